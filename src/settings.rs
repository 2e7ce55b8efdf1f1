use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ctrailz::AlgorithmType;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::Error;

pub const DEFAULT_ROWS: i32 = 10;
pub const DEFAULT_COLS: i32 = 10;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// User settings, loaded from the TOML config file and overridden by command line arguments.
///
/// Every field is optional, missing ones fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows: Option<i32>,
    pub cols: Option<i32>,
    pub algorithm: Option<AlgorithmType>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trailz").join("config.toml"))
    }

    /// Loads settings from `path`, or from [`Settings::default_path`] when it's `None`.
    ///
    /// An explicitly given file must exist, a missing default file just means default settings.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loading settings from {:?}", path);
                Ok(Self::from_toml(&content)?)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Fields set in `other` replace the ones in `self`.
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            rows: other.rows.or(self.rows),
            cols: other.cols.or(self.cols),
            algorithm: other.algorithm.or(self.algorithm),
            seed: other.seed.or(self.seed),
            log_level: other.log_level.or(self.log_level),
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows.unwrap_or(DEFAULT_ROWS)
    }

    pub fn cols(&self) -> i32 {
        self.cols.unwrap_or(DEFAULT_COLS)
    }

    pub fn algorithm(&self) -> AlgorithmType {
        self.algorithm.unwrap_or_default()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.log_level.as_deref().map(str::parse::<LevelFilter>) {
            None => DEFAULT_LOG_LEVEL,
            Some(Ok(level)) => level,
            Some(Err(_)) => {
                // logger isn't up yet at this point
                eprintln!("Invalid value for 'log_level', using default value");
                DEFAULT_LOG_LEVEL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn parse_full_file() {
        let settings = Settings::from_toml(
            r#"
            rows = 20
            cols = 30
            algorithm = "binary-tree"
            seed = 99
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.rows(), 20);
        assert_eq!(settings.cols(), 30);
        assert_eq!(settings.algorithm(), AlgorithmType::BinaryTree);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.rows(), DEFAULT_ROWS);
        assert_eq!(settings.cols(), DEFAULT_COLS);
        assert_eq!(settings.algorithm(), AlgorithmType::BinaryTree);
        assert_eq!(settings.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Settings::from_toml(r#"algorithm = "wilson""#).is_err());
        assert!(Settings::from_toml("colums = 3").is_err());

        let settings = Settings::from_toml(r#"log_level = "loud""#).unwrap();
        assert_eq!(settings.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn merge_prefers_other() {
        let file = Settings {
            rows: Some(5),
            cols: Some(6),
            seed: Some(1),
            ..Default::default()
        };
        let args = Settings {
            cols: Some(12),
            log_level: Some("info".to_string()),
            ..Default::default()
        };

        let merged = file.merge(args);
        assert_eq!(merged.rows(), 5);
        assert_eq!(merged.cols(), 12);
        assert_eq!(merged.seed, Some(1));
        assert_eq!(merged.log_level(), LevelFilter::Info);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 3\nseed = 7").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.rows(), 3);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(Settings::load(Some(&path)), Err(Error::Io(_))));
    }
}
