use super::read_json;
use crate::Result;
use crate::metrics::MetricsRecord;
use crate::ranking::EditionSet;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::IntoAppError;
use walkdir::WalkDir;

const LOG_TARGET: &str = " artifacts";

/// Naming conventions of artifact directories and the record files inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    /// Prefix of artifact directory names, stripped to obtain the edition name.
    pub prefix: String,

    /// File name suffix identifying the persisted record inside an artifact.
    pub suffix: String,
}

impl ArtifactLayout {
    /// The edition name for an artifact directory name.
    #[must_use]
    pub fn edition_name<'a>(&self, dir_name: &'a str) -> &'a str {
        dir_name.strip_prefix(self.prefix.as_str()).unwrap_or(dir_name)
    }
}

/// Load the persisted record of every artifact under `benchmarks_dir`.
///
/// Artifacts are visited in directory-name order, which becomes the encounter
/// order of the returned set. Directories without a record file are skipped.
///
/// # Errors
///
/// Returns an error if `benchmarks_dir` cannot be read or a record file cannot be parsed
pub fn load_editions(benchmarks_dir: &Utf8Path, layout: &ArtifactLayout) -> Result<EditionSet> {
    let mut editions = EditionSet::new();

    for artifact in sorted_children(benchmarks_dir)? {
        if !artifact.is_dir() {
            continue;
        }

        let Some(dir_name) = artifact.file_name() else {
            continue;
        };
        let edition = layout.edition_name(dir_name);

        let Some(record_path) = find_record_file(&artifact, &layout.suffix)? else {
            log::debug!(target: LOG_TARGET, "Skipping '{artifact}': no '*{}' file", layout.suffix);
            continue;
        };

        log::info!(target: LOG_TARGET, "Loading results for '{edition}' from '{record_path}'");
        let record: MetricsRecord = read_json(&record_path)?;

        if editions.insert(edition, record).is_some() {
            log::warn!(target: LOG_TARGET, "Duplicate results for '{edition}', keeping '{record_path}'");
        }
    }

    Ok(editions)
}

fn find_record_file(artifact: &Utf8Path, suffix: &str) -> Result<Option<Utf8PathBuf>> {
    Ok(sorted_children(artifact)?
        .into_iter()
        .find(|path| path.is_file() && path.file_name().is_some_and(|name| name.ends_with(suffix))))
}

/// Immediate children of `dir`, sorted by file name.
fn sorted_children(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut children = Vec::new();

    for entry_result in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name().follow_links(true) {
        let entry = entry_result.into_app_err_with(|| format!("unable to read directory '{dir}'"))?;
        match Utf8PathBuf::from_path_buf(entry.into_path()) {
            Ok(path) => children.push(path),
            Err(path) => log::warn!(target: LOG_TARGET, "Skipping non UTF-8 path '{}'", path.display()),
        }
    }

    Ok(children)
}
