use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::path::PathBuf;

use course_setup_core::config::{ConfigManager, GenerationOptions, Layout};
use course_setup_core::markdown::decode_escapes;

use crate::cli::Cli;
use crate::services::OutputService;

/// Application context that gets passed to command handlers
///
/// Resolves the output directory once and merges configuration file,
/// environment and flags into the generation options. Nothing downstream
/// looks at the process working directory again.
pub struct Context {
    pub output: OutputService,
    options: GenerationOptions,
}

impl Context {
    /// Create new context from parsed command-line arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        // Precedence: --output-dir / COURSE_SETUP_DIR (clap) > current directory
        let base_dir: PathBuf = match &cli.output_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir().context("Failed to determine the current directory")?,
        };

        let config = ConfigManager::load_config(&base_dir, cli.config.as_deref())?;
        let options = Self::apply_flags(config.options(), cli)?;
        tracing::debug!(?options, base_dir = %base_dir.display(), "resolved options");

        Ok(Self {
            output: OutputService::new(base_dir),
            options,
        })
    }

    /// Layer command-line flags over the configured options
    fn apply_flags(mut options: GenerationOptions, cli: &Cli) -> Result<GenerationOptions> {
        if cli.no_dirs {
            options.layout = Layout::Flat;
        }
        if cli.no_toc {
            options.toc = false;
        }
        if cli.no_review_dirs {
            options.review_dirs = false;
        }
        if let Some(extra) = &cli.extra {
            let decoded = decode_escapes(extra).context("Invalid escape sequence in --extra")?;
            options.extra = Some(decoded);
        }

        options.validate()?;
        Ok(options)
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }
}
