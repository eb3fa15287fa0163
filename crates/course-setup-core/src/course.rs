// crates/course-setup-core/src/course.rs - Course and section data model
//
// A course is a small ordered tree: Course -> Sections -> subsection titles.
// It is built once (from prompts or an outline file), never mutated during
// generation, and dropped when the process exits. Everything derived from
// it (slugs, positions, directory names) is computed on demand.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::slug::generate_slug;
use crate::title::title_case;

/// Page number used for `00-` index pages
pub const INDEX_PAGE: u32 = 0;

/// Page number used for `99-` flashcard pages
pub const FLASHCARDS_PAGE: u32 = 99;

/// Errors that can occur while loading a course outline
#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Failed to read outline {file}: {error}")]
    Io {
        file: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Invalid YAML in outline {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Course title cannot be empty")]
    EmptyTitle,
}

/// Result type for outline operations
pub type OutlineResult<T> = Result<T, OutlineError>;

/// A course with its ordered sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Position within a larger program, prefixes the course directory
    #[serde(default, rename = "number")]
    pub course_number: Option<u32>,

    /// Full course title
    pub title: String,

    /// Course code or shorthand, e.g. `CS 101`. Case is kept as typed.
    #[serde(default)]
    pub short_title: String,

    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One section of a course and the titles of its subsections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,

    #[serde(default)]
    pub subsections: Vec<String>,
}

impl Course {
    pub fn new(
        title: impl Into<String>,
        short_title: impl Into<String>,
        course_number: Option<u32>,
    ) -> Self {
        Self {
            course_number,
            title: title.into(),
            short_title: short_title.into(),
            sections: Vec::new(),
        }
    }

    /// Load a course from a YAML outline file
    ///
    /// OUTLINE FORMAT:
    /// ```yaml
    /// number: 1
    /// title: Example Course
    /// short_title: EC 1
    /// sections:
    ///   - title: Section 1
    ///     subsections: [Intro, Details]
    ///   - title: Section 2
    /// ```
    pub fn from_outline_file(path: &Path) -> OutlineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|error| OutlineError::Io {
            file: path.display().to_string(),
            error,
        })?;

        Self::from_outline_str(&content).map_err(|e| match e {
            OutlineError::ParseError { error, .. } => OutlineError::ParseError {
                file: path.display().to_string(),
                error,
            },
            other => other,
        })
    }

    /// Parse a course from YAML outline text
    ///
    /// Titles are trimmed the same way typed answers are.
    pub fn from_outline_str(content: &str) -> OutlineResult<Self> {
        let mut course: Course =
            serde_yaml::from_str(content).map_err(|e| OutlineError::ParseError {
                file: "<string>".to_string(),
                error: e.to_string(),
            })?;

        course.title = course.title.trim().to_string();
        course.short_title = course.short_title.trim().to_string();
        if course.title.is_empty() {
            return Err(OutlineError::EmptyTitle);
        }

        for section in &mut course.sections {
            section.title = section.title.trim().to_string();
            for subsection in &mut section.subsections {
                *subsection = subsection.trim().to_string();
            }
        }

        Ok(course)
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn slug(&self) -> String {
        generate_slug(&self.title)
    }

    /// Name of the course output directory
    ///
    /// `01-course_slug` when a course number is set, `course_slug` otherwise.
    /// Number 0 counts as unset.
    pub fn directory_name(&self) -> String {
        match self.course_number {
            Some(number) if number > 0 => format!("{:02}-{}", number, self.slug()),
            _ => self.slug(),
        }
    }

    /// Display title used in the course index heading and back-links
    pub fn display_title(&self) -> String {
        format!("{} - {}", self.short_title, title_case(&self.title))
    }

    /// Filename of the course index page
    pub fn index_filename(&self) -> String {
        format!("{:02}-{}.md", INDEX_PAGE, self.slug())
    }
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subsections: Vec::new(),
        }
    }

    pub fn add_subsection(&mut self, title: impl Into<String>) {
        self.subsections.push(title.into());
    }

    pub fn slug(&self) -> String {
        generate_slug(&self.title)
    }

    /// Directory holding the section in directory mode, e.g. `02-loops`
    ///
    /// `position` is the 1-based position of the section in its course.
    pub fn directory_name(&self, position: usize) -> String {
        format!("{:02}-{}", position, self.slug())
    }

    pub fn index_filename(&self) -> String {
        format!("{:02}-{}.md", INDEX_PAGE, self.slug())
    }

    pub fn flashcards_filename(&self) -> String {
        format!("{}-flashcards_{}.md", FLASHCARDS_PAGE, self.slug())
    }
}
