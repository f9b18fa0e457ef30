use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::sync::LazyLock;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "bench.toml";

/// Most medals that can be handed out.
const MAX_MEDALS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Heading of the Markdown report
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Closing line of the Markdown report
    #[serde(default = "default_report_footer")]
    pub report_footer: String,

    /// Number of medals handed out in the summary table (1..=3)
    #[serde(default = "default_medal_count")]
    pub medal_count: usize,

    /// Number of entries shown in each leaderboard
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Number of errors listed per edition in the report details
    #[serde(default = "default_error_detail_limit")]
    pub error_detail_limit: usize,

    /// Prefix of artifact directory names, stripped to obtain the edition name
    #[serde(default = "default_artifact_prefix")]
    pub artifact_prefix: String,

    /// Suffix of the results file inside each artifact directory
    #[serde(default = "default_results_suffix")]
    pub results_suffix: String,

    /// Editions that always appear in the report, as placeholders when they have no results
    #[serde(default = "default_expected_editions")]
    pub expected_editions: Vec<String>,
}

/// The configuration embedded from `default_config.toml`.
///
/// Every field must be set in that file: per-field defaults read from here.
static DEFAULTS: LazyLock<Config> =
    LazyLock::new(|| toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config"));

fn default_report_title() -> String {
    DEFAULTS.report_title.clone()
}

fn default_report_footer() -> String {
    DEFAULTS.report_footer.clone()
}

fn default_medal_count() -> usize {
    DEFAULTS.medal_count
}

fn default_leaderboard_size() -> usize {
    DEFAULTS.leaderboard_size
}

fn default_error_detail_limit() -> usize {
    DEFAULTS.error_detail_limit
}

fn default_artifact_prefix() -> String {
    DEFAULTS.artifact_prefix.clone()
}

fn default_results_suffix() -> String {
    DEFAULTS.results_suffix.clone()
}

fn default_expected_editions() -> Vec<String> {
    DEFAULTS.expected_editions.clone()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `bench.toml` in `base_dir` is used if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading lumo-bench configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading lumo-bench configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_MEDALS).contains(&self.medal_count) {
            return Err(app_err!("medal_count must be between 1 and {}, got {}", MAX_MEDALS, self.medal_count));
        }

        if self.leaderboard_size == 0 {
            return Err(app_err!("leaderboard_size must be at least 1"));
        }

        if self.results_suffix.is_empty() {
            return Err(app_err!("results_suffix must not be empty"));
        }

        if let Some(name) = self.expected_editions.iter().find(|name| name.trim().is_empty()) {
            return Err(app_err!("expected_editions must not contain blank names, got '{}'", name));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.artifact_prefix, "benchmark-");
        assert_eq!(config.results_suffix, "-results.json");
        assert_eq!(config.medal_count, 3);
        assert_eq!(config.leaderboard_size, 5);
        assert!(config.expected_editions.is_empty());
    }

    #[test]
    fn test_validate_medal_count_zero() {
        let config = Config { medal_count: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_medal_count_too_high() {
        let config = Config { medal_count: 4, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_medal_count_boundaries() {
        Config { medal_count: 1, ..Config::default() }.validate().unwrap();
        Config { medal_count: 3, ..Config::default() }.validate().unwrap();
    }

    #[test]
    fn test_validate_leaderboard_size_zero() {
        let config = Config { leaderboard_size: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_suffix() {
        let config = Config { results_suffix: String::new(), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_blank_expected_edition() {
        let config = Config { expected_editions: vec!["vanilla".into(), "  ".into()], ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let defaults = Config::default();
        let config: Config = toml::from_str("medal_count = 2").unwrap();
        assert_eq!(config.medal_count, 2);
        assert_eq!(config.leaderboard_size, defaults.leaderboard_size);
        assert_eq!(config.artifact_prefix, "benchmark-");
        assert_eq!(config.report_title, defaults.report_title);
        assert_eq!(config.report_footer, defaults.report_footer);
        assert_eq!(config.report_title, "Lumo Optimized - Benchmark Results");

        let config: Config = toml::from_str("report_title = \"Nightly\"").unwrap();
        assert_eq!(config.report_title, "Nightly");
        assert_eq!(config.report_footer, defaults.report_footer);
    }

    #[test]
    fn test_empty_file_equals_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("medals = 2").is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_save_default_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let output_path = Utf8PathBuf::try_from(tmp.path().join("bench.toml")).unwrap();
        Config::save_default(&output_path).unwrap();
        let loaded = Config::load(&Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap(), Some(&output_path)).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_finds_default_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let base_dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        fs::write(base_dir.join(DEFAULT_CONFIG_FILE), "leaderboard_size = 2\nexpected_editions = [\"vanilla\"]").unwrap();

        let config = Config::load(&base_dir, None).unwrap();
        assert_eq!(config.leaderboard_size, 2);
        assert_eq!(config.expected_editions, vec!["vanilla".to_string()]);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_config_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let base_dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let config = Config::load(&base_dir, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_invalid_values_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("bad.toml")).unwrap();
        fs::write(&path, "medal_count = 7").unwrap();

        let err = Config::load(&path, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("medal_count"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_explicit_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("absent.toml")).unwrap();
        assert!(Config::load(&path, Some(&path)).is_err());
    }

    #[test]
    fn test_default_config_toml_is_not_empty() {
        assert!(!DEFAULT_CONFIG_TOML.is_empty());
    }
}
