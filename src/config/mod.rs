use serde::Deserialize;
use std::path::PathBuf;

use crate::export::{DEFAULT_INDENT, DEFAULT_SUFFIX, ExportOptions};

/// Largest accepted JSON indentation
pub const MAX_INDENT: usize = 8;

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}
fn default_indent() -> usize {
    DEFAULT_INDENT
}
fn default_verbose() -> bool {
    false
}
fn default_validate() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Object to export instead of the first one in the document
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default = "default_validate")]
    pub validate: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            object: None,
            suffix: default_suffix(),
            indent: default_indent(),
            verbose: default_verbose(),
            validate: default_validate(),
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            suffix: self.suffix.clone(),
            indent: self.indent.min(MAX_INDENT),
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("mesh2json.toml"));
    paths.push(PathBuf::from(".mesh2json.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mesh2json").join("config.toml"));
        paths.push(config_dir.join("mesh2json.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mesh2json.toml"));
        paths.push(home.join(".config").join("mesh2json").join("config.toml"));
    }

    paths
}
