// crates/course-setup-cli/src/services/output.rs - File System Output Service
//
// This service handles every write the tool performs. It knows HOW to put a
// planned scaffold on disk but not WHAT the scaffold contains; that is
// decided by the planner in course-setup-core.
//
// DESIGN PRINCIPLES:
// - Single Responsibility: Only handles file I/O operations
// - Explicit base path: every relative path is resolved against `base_dir`,
//   never against the process working directory
// - Error Handling: every failure names the path that caused it
// - Overwrite semantics: existing files are replaced, no backups, no retry

use anyhow::{Context as AnyhowContext, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use course_setup_core::markdown::MarkdownPage;
use course_setup_core::scaffold::{Scaffold, ScaffoldEntry};

/// Summary of a generation run, printed as text or JSON
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Course directory joined onto the base directory, relative if the base is
    pub course_dir: PathBuf,
    /// Markdown files written, in write order
    pub files: Vec<PathBuf>,
    /// Empty directories created
    pub directories: Vec<PathBuf>,
    /// True when nothing was actually written
    pub dry_run: bool,
}

/// Writes planned pages and directories below one base directory
///
/// EXAMPLE USAGE:
/// ```rust
/// let output = OutputService::new("/path/to/notes".into());
/// let report = output.write_scaffold(&scaffold)?;
/// println!("{} files", report.files.len());
/// ```
pub struct OutputService {
    /// Directory that receives the course directory
    base_dir: PathBuf,
}

impl OutputService {
    /// Create a new output service for the given base directory
    ///
    /// The directory does not need to exist yet, it is created on the first
    /// write.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Write a markdown page into a directory relative to the base
    ///
    /// Parent directories are created as needed and an existing file with
    /// the same name is overwritten.
    pub fn create_markdown_file(&self, page: &MarkdownPage, dir: &Path) -> Result<PathBuf> {
        let full_path = self.base_dir.join(dir).join(&page.filename);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&full_path, &page.content)
            .with_context(|| format!("Failed to create file: {}", full_path.display()))?;

        tracing::info!(path = %full_path.display(), "wrote page");
        Ok(full_path)
    }

    /// Create a directory (and its parents) relative to the base
    pub fn create_dir(&self, dir: &Path) -> Result<PathBuf> {
        let full_path = self.base_dir.join(dir);

        fs::create_dir_all(&full_path)
            .with_context(|| format!("Failed to create directory: {}", full_path.display()))?;

        tracing::info!(path = %full_path.display(), "created directory");
        Ok(full_path)
    }

    /// Put a whole scaffold on disk, in plan order
    ///
    /// The first failure stops the run; anything written before it stays.
    pub fn write_scaffold(&self, scaffold: &Scaffold) -> Result<GenerationReport> {
        let mut report = self.empty_report(scaffold, false);

        for entry in &scaffold.entries {
            match entry {
                ScaffoldEntry::Directory(dir) => report.directories.push(self.create_dir(dir)?),
                ScaffoldEntry::Page { dir, page } => {
                    report.files.push(self.create_markdown_file(page, dir)?)
                }
            }
        }

        Ok(report)
    }

    /// Report what `write_scaffold` would do without touching the disk
    pub fn preview(&self, scaffold: &Scaffold) -> GenerationReport {
        let mut report = self.empty_report(scaffold, true);

        report.files = scaffold
            .pages()
            .map(|(dir, page)| self.base_dir.join(dir).join(&page.filename))
            .collect();
        report.directories = scaffold
            .directories()
            .map(|dir| self.base_dir.join(dir))
            .collect();

        report
    }

    fn empty_report(&self, scaffold: &Scaffold, dry_run: bool) -> GenerationReport {
        GenerationReport {
            course_dir: self.base_dir.join(&scaffold.course_dir),
            files: Vec::new(),
            directories: Vec::new(),
            dry_run,
        }
    }

    /// Base directory all output is written under
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
