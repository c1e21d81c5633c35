//! Configuration management for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one subdirectory per catalog category
    #[serde(default = "default_documents_dir")]
    pub documents_dir: PathBuf,

    /// Relationship notation file
    ///
    /// Defaults to `relationships.mmd` under the documents directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships_file: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Default configuration file name, looked up in the working directory.
    pub const FILE_NAME: &'static str = "atlas.toml";

    /// Load configuration.
    ///
    /// An explicitly given path must exist; without one, `atlas.toml` in
    /// the working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                Ok(toml::from_str(&contents)?)
            }
            None => {
                let default_path = Path::new(Self::FILE_NAME);
                if default_path.exists() {
                    let contents = fs::read_to_string(default_path)?;
                    Ok(toml::from_str(&contents)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// The notation file to load.
    pub fn relationships_file(&self) -> PathBuf {
        self.relationships_file
            .clone()
            .unwrap_or_else(|| self.documents_dir.join("relationships.mmd"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
            relationships_file: None,
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: default_true(),
            format: default_format(),
        }
    }
}

fn default_documents_dir() -> PathBuf {
    PathBuf::from("documents")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
