//! Command dispatch logic for lumo-bench

use super::common::{GlobalArgs, init_logging};
use super::{AnalyzeArgs, BadgeArgs, InitArgs, ParseArgs, ValidateArgs, analyze_benchmarks, generate_badges, init_config, parse_log, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "lumo-bench", author, version, long_about = None)]
#[command(about = "Score server benchmark runs from their log transcripts and compare editions")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: BenchSubcommand,
}

#[derive(Subcommand, Debug)]
enum BenchSubcommand {
    /// Extract and score the metrics of one log transcript
    Parse(ParseArgs),
    /// Rank all editions' results and generate reports
    Analyze(AnalyzeArgs),
    /// Generate shields.io badges from a summary
    Badge(BadgeArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.global.log_level);

    match &cli.command {
        BenchSubcommand::Parse(parse_args) => parse_log(host, parse_args),
        BenchSubcommand::Analyze(analyze_args) => analyze_benchmarks(host, analyze_args, cli.global.color),
        BenchSubcommand::Badge(badge_args) => generate_badges(host, badge_args),
        BenchSubcommand::Init(init_args) => init_config(host, init_args),
        BenchSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
