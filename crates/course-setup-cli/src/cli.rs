use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "course-setup")]
#[command(
    about = "Create structured directories and markdown files with auto-completed tables of contents, using Obsidian-style links between sections and subsections"
)]
#[command(version)]
pub struct Cli {
    /// Create section markdown files rather than section folders, indices, flashcards, and subsection files
    #[arg(short = 'n', long)]
    pub no_dirs: bool,

    /// Leave the table of contents out of section files (only valid with --no-dirs)
    #[arg(short = 't', long)]
    pub no_toc: bool,

    /// Markdown replacing the trailing block of subsection files (section files with --no-dirs); escapes like \n are decoded
    #[arg(short, long)]
    pub extra: Option<String>,

    /// Directory that receives the course folder (defaults to the current directory)
    #[arg(short, long, env = "COURSE_SETUP_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read the course from a YAML outline instead of prompting
    #[arg(long, value_name = "FILE")]
    pub outline: Option<PathBuf>,

    /// Configuration file (defaults to <output dir>/.course-setup.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not create the empty 100-review_files/ folders
    #[arg(long)]
    pub no_review_dirs: bool,

    /// Show what would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a documented default configuration file and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Check flag combinations clap cannot express on its own
    ///
    /// Runs before any prompt or file I/O; the returned error exits with
    /// clap's usage status (2).
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.no_toc && !self.no_dirs {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "The --no-toc flag can only be used with --no-dirs.",
            ));
        }
        Ok(())
    }
}
