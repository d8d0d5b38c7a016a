use crate::constants::{DEFAULT_SLICE_LENGTH, EXTRACTED_DATA_DIRECTORY};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Decides where the meaningful category columns of a taxonomy end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryBoundary {
    /// Every column is a category. A blank header is rejected.
    All,
    /// Only the first `n` columns are categories.
    Count(usize),
    /// Categories end right before the first header equal to this marker.
    EndMarker(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// One sub-directory per company, holding its reports.
    pub input_dir: PathBuf,
    /// Root of all intermediate and final outputs.
    pub output_dir: PathBuf,
    pub taxonomy_path: PathBuf,
    pub category_boundary: CategoryBoundary,
    pub slice_length: usize,
    /// Write token files gzip-compressed.
    pub compress_tokens: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input_dir: PathBuf::from_iter(["assets", "PDF-Data"]),
            output_dir: PathBuf::from(EXTRACTED_DATA_DIRECTORY),
            taxonomy_path: PathBuf::from_iter(["assets", "keywords.csv"]),
            category_boundary: CategoryBoundary::All,
            slice_length: DEFAULT_SLICE_LENGTH,
            compress_tokens: false,
        }
    }
}

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub taxonomy_path: Option<PathBuf>,
    pub category_boundary: Option<CategoryBoundary>,
    pub slice_length: Option<usize>,
    pub compress_tokens: Option<bool>,
}

impl PipelineConfig {
    /// Loads a TOML config file and lays it over the defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::ConfigError(format!(
                "Config file {:?} does not exist",
                path
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config_file: ConfigFile = toml::from_str(content)?;
        Self::default().merge(config_file)
    }

    /// Overlay values take precedence over `self`.
    pub fn merge(self, overlay: ConfigFile) -> Result<Self, Error> {
        let merged = PipelineConfig {
            input_dir: overlay.input_dir.unwrap_or(self.input_dir),
            output_dir: overlay.output_dir.unwrap_or(self.output_dir),
            taxonomy_path: overlay.taxonomy_path.unwrap_or(self.taxonomy_path),
            category_boundary: overlay.category_boundary.unwrap_or(self.category_boundary),
            slice_length: overlay.slice_length.unwrap_or(self.slice_length),
            compress_tokens: overlay.compress_tokens.unwrap_or(self.compress_tokens),
        };

        if merged.slice_length == 0 {
            return Err(Error::ConfigError(
                "slice_length must be greater than zero".to_string(),
            ));
        }

        Ok(merged)
    }
}
