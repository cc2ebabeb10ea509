//! Configuration handling for textstat
//!
//! Defaults for the count flags, output format and worker count come from,
//! in increasing priority:
//!
//! 1. built-in defaults
//! 2. a config file (`--config`/`$TEXTSTAT_CONFIG`, `./textstat.toml`,
//!    `./textstat.yaml`, `./textstat.yml`, then the user config directory)
//! 3. `TEXTSTAT_*` environment variables
//! 4. explicit command-line flags (applied by the CLI layer)
//!
//! Configuration problems are never fatal: they are logged and the layer
//! that failed is skipped.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Prefix shared by every configuration environment variable
pub const ENV_PREFIX: &str = "TEXTSTAT_";

const LOCAL_CANDIDATES: [&str; 3] = ["textstat.toml", "textstat.yaml", "textstat.yml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {var}: '{value}'")]
    Env { var: String, value: String },
}

/// Output format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Effective settings, passed explicitly to the counting and output layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Show the letter count
    pub letters: bool,

    /// Show the word count
    pub words: bool,

    /// Show the byte count
    pub bytes: bool,

    /// Output format
    pub format: OutputFormat,

    /// Worker threads (0 = one per CPU)
    pub jobs: usize,
}

impl Config {
    /// Loads file and environment layers. Never fails; problems are logged.
    pub fn load(explicit: Option<&Path>) -> Self {
        let mut config = match Self::locate(explicit) {
            Some(path) => match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        for e in config.apply_env(|var| std::env::var(var).ok()) {
            warn!("{}; ignoring it", e);
        }

        config
    }

    /// Returns the user-level config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "textstat", "textstat").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Picks the config file to read, if any
    fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = LOCAL_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file());
        if local.is_some() {
            return local;
        }

        Self::global_config_dir()
            .map(|dir| dir.join("config.toml"))
            .filter(|p| p.is_file())
    }

    /// Reads a config file, TOML or YAML depending on its extension
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let parsed = if is_yaml {
            serde_yaml::from_str::<Option<Self>>(content)
                .map(Option::unwrap_or_default)
                .map_err(|e| e.to_string())
        } else {
            toml::from_str(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Applies `TEXTSTAT_*` overrides read through `lookup`.
    ///
    /// Each bad value is skipped and returned; the others still apply.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (key, field) in [
            ("LETTERS", &mut self.letters),
            ("WORDS", &mut self.words),
            ("BYTES", &mut self.bytes),
        ] {
            let var = format!("{}{}", ENV_PREFIX, key);
            if let Some(value) = lookup(&var) {
                match parse_bool(&value) {
                    Some(b) => *field = b,
                    None => errors.push(ConfigError::Env { var, value }),
                }
            }
        }

        let var = format!("{}FORMAT", ENV_PREFIX);
        if let Some(value) = lookup(&var) {
            match <OutputFormat as clap::ValueEnum>::from_str(value.trim(), true) {
                Ok(format) => self.format = format,
                Err(_) => errors.push(ConfigError::Env { var, value }),
            }
        }

        let var = format!("{}JOBS", ENV_PREFIX);
        if let Some(value) = lookup(&var) {
            match value.trim().parse() {
                Ok(jobs) => self.jobs = jobs,
                Err(_) => errors.push(ConfigError::Env { var, value }),
            }
        }

        errors
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.letters && !config.words && !config.bytes);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.jobs, 0);
    }

    #[test]
    fn parse_toml_config() {
        let toml = r#"
letters = true
format = "csv"
jobs = 2
"#;

        let config = Config::parse(Path::new("textstat.toml"), toml).unwrap();
        assert!(config.letters);
        assert!(!config.words);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.jobs, 2);
    }

    #[test]
    fn parse_yaml_config() {
        let yaml = "words: true\nformat: json\n";

        let config = Config::parse(Path::new("textstat.yml"), yaml).unwrap();
        assert!(config.words);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn empty_yaml_is_default() {
        let config = Config::parse(Path::new("textstat.yaml"), "").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let err = Config::parse(Path::new("textstat.toml"), "format = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = Config::parse(Path::new("textstat.toml"), "format = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_falls_back_to_defaults_on_bad_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "letters = maybe").unwrap();

        let config = Config::load(Some(&path));
        assert!(!config.letters);
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "bytes = true\n").unwrap();

        let config = Config::load(Some(&path));
        assert!(config.bytes);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config {
            letters: true,
            ..Config::default()
        };

        let errors = config.apply_env(env(&[
            ("TEXTSTAT_LETTERS", "false"),
            ("TEXTSTAT_WORDS", "yes"),
            ("TEXTSTAT_FORMAT", "JSON"),
            ("TEXTSTAT_JOBS", "4"),
        ]));

        assert!(errors.is_empty());
        assert!(!config.letters);
        assert!(config.words);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.jobs, 4);
    }

    #[test]
    fn bad_env_values_are_reported_and_skipped() {
        let mut config = Config::default();

        let errors = config.apply_env(env(&[
            ("TEXTSTAT_BYTES", "sometimes"),
            ("TEXTSTAT_FORMAT", "xml"),
            ("TEXTSTAT_JOBS", "-1"),
            ("TEXTSTAT_WORDS", "1"),
        ]));

        assert_eq!(errors.len(), 3);
        assert!(!config.bytes);
        assert!(config.words);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.jobs, 0);
    }
}
