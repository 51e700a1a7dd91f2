use crate::error::Result;
use crate::formats::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "scorify.json";
const DEFAULT_SALES_FILE: &str = "sales.json";
const DEFAULT_EXPORT_STEM: &str = "sales_export";

/// Environment variable overriding the data directory (defaults to the working directory).
pub const HOME_ENV: &str = "SCORIFY_HOME";

/// Configuration for scorify, read from `scorify.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScorifyConfig {
    /// File name of the durable ledger, relative to the data directory
    #[serde(default = "default_sales_file")]
    pub sales_file: String,

    /// Base name shared by every export file (`<stem>.csv`, `<stem>.sd`, ...)
    #[serde(default = "default_export_stem")]
    pub export_stem: String,

    /// Where exports are written; the data directory when unset
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_sales_file() -> String {
    DEFAULT_SALES_FILE.to_string()
}

fn default_export_stem() -> String {
    DEFAULT_EXPORT_STEM.to_string()
}

impl Default for ScorifyConfig {
    fn default() -> Self {
        Self {
            sales_file: default_sales_file(),
            export_stem: default_export_stem(),
            export_dir: None,
        }
    }
}

impl ScorifyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn paths(&self, data_dir: &Path) -> ScorifyPaths {
        let export_dir = match &self.export_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => data_dir.join(dir),
            None => data_dir.to_path_buf(),
        };
        ScorifyPaths {
            sales_file: data_dir.join(&self.sales_file),
            export_dir,
            export_stem: self.export_stem.clone(),
        }
    }
}

/// Resolved locations of every file scorify reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorifyPaths {
    pub sales_file: PathBuf,
    pub export_dir: PathBuf,
    pub export_stem: String,
}

impl ScorifyPaths {
    pub fn export_path(&self, format: ExportFormat) -> PathBuf {
        self.export_dir
            .join(format!("{}.{}", self.export_stem, format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ScorifyConfig::default();
        assert_eq!(config.sales_file, "sales.json");
        assert_eq!(config.export_stem, "sales_export");
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ScorifyConfig::load(dir.path()).unwrap();
        assert_eq!(config, ScorifyConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"sales_file": "shop.json"}"#,
        )
        .unwrap();

        let config = ScorifyConfig::load(dir.path()).unwrap();
        assert_eq!(config.sales_file, "shop.json");
        assert_eq!(config.export_stem, "sales_export");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "sales_file = 1").unwrap();
        assert!(ScorifyConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_default_paths() {
        let paths = ScorifyConfig::default().paths(Path::new("/data"));
        assert_eq!(paths.sales_file, PathBuf::from("/data/sales.json"));
        assert_eq!(
            paths.export_path(ExportFormat::Sd),
            PathBuf::from("/data/sales_export.sd")
        );
    }

    #[test]
    fn test_relative_export_dir_is_under_data_dir() {
        let config = ScorifyConfig {
            export_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        let paths = config.paths(Path::new("/data"));
        assert_eq!(
            paths.export_path(ExportFormat::Csv),
            PathBuf::from("/data/out/sales_export.csv")
        );
    }
}
