use super::Host;
use crate::Result;
use crate::artifacts::write_json_pretty;
use crate::metrics::extract;
use crate::reports::format_number;
use crate::scoring::apply_score;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::{self, Write};

const LOG_TARGET: &str = "     parse";

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Log transcript of the benchmark run
    #[arg(value_name = "LOG_FILE")]
    pub log_file: Utf8PathBuf,

    /// Where to write the scored metrics record
    #[arg(value_name = "OUTPUT_JSON")]
    pub output: Utf8PathBuf,
}

/// Extract and score one transcript, writing the record as JSON.
///
/// A missing log file is not an error: it produces a `no_logs` record.
pub fn parse_log<H: Host>(host: &mut H, args: &ParseArgs) -> Result<()> {
    let transcript = read_transcript(&args.log_file)?;
    if transcript.is_none() {
        let _ = writeln!(host.output(), "Log file not found: {}", args.log_file);
    }

    let record = apply_score(extract(transcript.as_deref()));
    write_json_pretty(&args.output, &record)?;

    let _ = writeln!(host.output(), "Results written to {}", args.output);
    if let Some(score) = record.score() {
        let _ = writeln!(host.output(), "Score: {}/100", format_number(score));
    }

    Ok(())
}

/// Read a transcript, or `None` if the file does not exist.
fn read_transcript(path: &Utf8Path) -> Result<Option<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!(target: LOG_TARGET, "No transcript at '{path}'");
            return Ok(None);
        }
        Err(e) => return Err(e).into_app_err_with(|| format!("unable to read log file '{path}'")),
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Log file '{path}' is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok(Some(text))
}
