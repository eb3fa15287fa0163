// crates/course-setup-core/src/config.rs - Configuration System
//
// This module provides the configuration schema and loading mechanism for
// course-setup. It handles the hierarchy of configuration sources and
// produces the single `GenerationOptions` value the planner consumes.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--no-dirs, --no-toc, --extra, ...)
// 2. Environment variables (COURSE_SETUP_EXTRA)
// 3. Config file (--config path, or <output dir>/.course-setup.toml)
// 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::markdown::DEFAULT_OUTLINE;

/// Name of the config file looked up in the output directory
pub const CONFIG_FILE_NAME: &str = ".course-setup.toml";

/// Environment variable overriding the trailing markdown block
pub const EXTRA_ENV_VAR: &str = "COURSE_SETUP_EXTRA";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// How sections are laid out on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One directory per section with index, flashcard and subsection pages
    #[default]
    Directories,
    /// One markdown file per section, no subsections
    Flat,
}

/// Complete configuration file schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory layout settings
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Page content settings
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// "directories" or "flat"
    #[serde(default)]
    pub mode: Layout,

    /// Whether to create the empty `100-review_files/` tree per section
    #[serde(default = "default_true")]
    pub review_dirs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Whether section pages carry a table of contents (flat mode only)
    #[serde(default = "default_true")]
    pub toc: bool,

    /// Replacement for the trailing block of subsection pages
    #[serde(default)]
    pub extra: Option<String>,
}

/// Everything that varies between runs, in one place
///
/// Built from the layered configuration and handed to the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub layout: Layout,
    /// Section table of contents; may only be disabled in flat mode
    pub toc: bool,
    /// Trailing block override for subsection pages (flat: section pages)
    pub extra: Option<String>,
    pub review_dirs: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Directories,
            toc: true,
            extra: None,
            review_dirs: true,
        }
    }
}

impl GenerationOptions {
    /// Reject option combinations that make no sense
    ///
    /// Directory mode always writes section TOCs, they are the only
    /// navigation between subsection pages.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.toc && self.layout != Layout::Flat {
            return Err(ConfigError::ValidationError(
                "The table of contents can only be disabled in flat mode (--no-dirs)".to_string(),
            ));
        }
        Ok(())
    }

    /// The trailing block for outline pages; an empty override means default
    pub fn outline_block(&self) -> &str {
        match self.extra.as_deref() {
            Some(extra) if !extra.is_empty() => extra,
            _ => DEFAULT_OUTLINE,
        }
    }
}

impl ScaffoldConfig {
    /// Convert the file-level settings into generation options
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            layout: self.layout.mode,
            toc: self.content.toc,
            extra: self.content.extra.clone(),
            review_dirs: self.layout.review_dirs,
        }
    }
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from all file and environment sources
    ///
    /// LOADING STRATEGY:
    /// 1. Start with built-in defaults
    /// 2. Replace with the explicit config file, which must exist, or the
    ///    optional `.course-setup.toml` in the output directory
    /// 3. Override with environment variables
    ///
    /// Command-line flags are applied afterwards by the CLI, so the result
    /// is not validated here. Call `validate_config` (or
    /// `GenerationOptions::validate`) on the fully merged options.
    pub fn load_config(base_dir: &Path, explicit: Option<&Path>) -> ConfigResult<ScaffoldConfig> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path.display().to_string()));
                }
                Self::load_file(path)?
            }
            None => {
                let default_path = base_dir.join(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::load_file(&default_path)?
                } else {
                    ScaffoldConfig::default()
                }
            }
        };

        Self::apply_overrides(&mut config, |key| std::env::var(key).ok());

        Ok(config)
    }

    /// Read and parse one TOML config file
    pub fn load_file(path: &Path) -> ConfigResult<ScaffoldConfig> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading config file");

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Apply environment-style overrides through a lookup function
    ///
    /// - COURSE_SETUP_EXTRA -> content.extra
    pub fn apply_overrides<F>(config: &mut ScaffoldConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(extra) = lookup(EXTRA_ENV_VAR) {
            config.content.extra = Some(extra);
        }
    }

    /// Validate the configuration for consistency
    pub fn validate_config(config: &ScaffoldConfig) -> ConfigResult<()> {
        config.options().validate()
    }

    /// Generate a default configuration file with comments
    pub fn generate_default_config() -> String {
        r###"# course-setup configuration
#
# Place this file at <output dir>/.course-setup.toml or pass it with --config.
# Command-line flags take priority over everything in here.

[layout]
# "directories": one folder per section with index, flashcard and subsection pages
# "flat": one markdown file per section
mode = "directories"

# Create an empty 100-review_files/ tree inside every section folder
review_dirs = true

[content]
# Table of contents on section pages (can only be disabled in flat mode)
toc = true

# Replace the trailing block of subsection pages (flat mode: section pages)
# extra = "## Key Points/Concepts\n\n## Lecture\n\n## Misc."
"###
        .to_string()
    }
}

fn default_true() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: Layout::default(),
            review_dirs: true,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            toc: true,
            extra: None,
        }
    }
}
