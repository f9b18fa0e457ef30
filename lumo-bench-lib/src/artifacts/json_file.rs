use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};

/// Read and deserialize a JSON file.
///
/// # Errors
///
/// Returns an error naming `path` if the file cannot be opened or does not hold valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T> {
    let file = File::open(path).into_app_err_with(|| format!("unable to open '{path}'"))?;
    serde_json::from_reader(BufReader::new(file)).into_app_err_with(|| format!("unable to parse '{path}'"))
}

/// Write `value` as indented JSON, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written
pub fn write_json_pretty<T: Serialize>(path: &Utf8Path, value: &T) -> Result<()> {
    write_with(path, |writer| serde_json::to_writer_pretty(writer, value))
}

/// Write `value` as compact single-line JSON, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written
pub fn write_json<T: Serialize>(path: &Utf8Path, value: &T) -> Result<()> {
    write_with(path, |writer| serde_json::to_writer(writer, value))
}

fn write_with<F>(path: &Utf8Path, serialize: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> serde_json::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent).into_app_err_with(|| format!("unable to create directory '{parent}'"))?;
    }

    let file = File::create(path).into_app_err_with(|| format!("unable to create '{path}'"))?;
    let mut writer = BufWriter::new(file);

    serialize(&mut writer).into_app_err_with(|| format!("unable to write '{path}'"))?;
    writer.flush().into_app_err_with(|| format!("unable to flush '{path}'"))?;
    Ok(())
}
