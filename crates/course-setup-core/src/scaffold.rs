// crates/course-setup-core/src/scaffold.rs - Scaffold planning
//
// The planner turns a course plus generation options into the ordered list
// of directories and pages to create. It never touches the filesystem: the
// CLI writes the plan, prints it for a dry run, or reports on it.
//
// DIRECTORY MODE:
// ```
// 01-example_course/
// ├── 00-example_course.md
// └── 01-section_one/
//     ├── 00-section_one.md
//     ├── 01-first_topic.md
//     ├── 99-flashcards_section_one.md
//     └── 100-review_files/
//         └── 01-first_topic/
// ```
//
// FLAT MODE:
// ```
// 01-example_course/
// ├── 00-example_course.md
// └── 01-section_one.md
// ```
//
// All paths in a plan are relative to the output base directory.

use std::path::{Path, PathBuf};

use crate::config::{GenerationOptions, Layout};
use crate::course::{Course, FLASHCARDS_PAGE, INDEX_PAGE, Section};
use crate::markdown::{DEFAULT_EXTRA, MarkdownPage, render_markdown};
use crate::slug::generate_slug;
use crate::title::title_case;
use crate::toc::TocBuilder;

/// Directory holding the per-subsection review folders
pub const REVIEW_DIR: &str = "100-review_files";

/// One thing to create on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEntry {
    /// A directory that must exist even if nothing is written into it
    Directory(PathBuf),
    /// A page written into `dir`
    Page { dir: PathBuf, page: MarkdownPage },
}

/// The full plan for one course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    /// Course directory, relative to the output base directory
    pub course_dir: PathBuf,
    pub entries: Vec<ScaffoldEntry>,
}

impl Scaffold {
    /// Iterate over planned pages with their target directories
    pub fn pages(&self) -> impl Iterator<Item = (&Path, &MarkdownPage)> {
        self.entries.iter().filter_map(|entry| match entry {
            ScaffoldEntry::Page { dir, page } => Some((dir.as_path(), page)),
            ScaffoldEntry::Directory(_) => None,
        })
    }

    /// Iterate over directories that are created without content
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|entry| match entry {
            ScaffoldEntry::Directory(dir) => Some(dir.as_path()),
            ScaffoldEntry::Page { .. } => None,
        })
    }
}

/// Plan every directory and page for a course
///
/// EXAMPLES:
/// ```rust
/// use course_setup_core::config::GenerationOptions;
/// use course_setup_core::course::{Course, Section};
/// use course_setup_core::scaffold::plan;
///
/// let mut course = Course::new("example course", "EC 1", Some(1));
/// let mut section = Section::new("section one");
/// section.add_subsection("first topic");
/// course.add_section(section);
///
/// let scaffold = plan(&course, &GenerationOptions::default());
/// assert_eq!(scaffold.course_dir.to_str(), Some("01-example_course"));
/// assert_eq!(scaffold.pages().count(), 4);
/// ```
pub fn plan(course: &Course, options: &GenerationOptions) -> Scaffold {
    Planner::new(course, options).plan()
}

struct Planner<'a> {
    course: &'a Course,
    options: &'a GenerationOptions,
    toc: TocBuilder<'a>,
    course_dir: PathBuf,
}

impl<'a> Planner<'a> {
    fn new(course: &'a Course, options: &'a GenerationOptions) -> Self {
        Self {
            course,
            options,
            toc: TocBuilder::new(course, options.layout),
            course_dir: PathBuf::from(course.directory_name()),
        }
    }

    fn plan(self) -> Scaffold {
        let mut entries = vec![ScaffoldEntry::Page {
            dir: self.course_dir.clone(),
            page: self.course_index(),
        }];

        for (index, section) in self.course.sections.iter().enumerate() {
            let position = index + 1;
            match self.options.layout {
                Layout::Directories => self.plan_section_dir(position, section, &mut entries),
                Layout::Flat => entries.push(ScaffoldEntry::Page {
                    dir: self.course_dir.clone(),
                    page: self.flat_section(position, section),
                }),
            }
        }

        for entry in &entries {
            tracing::debug!(?entry, "planned");
        }

        Scaffold {
            course_dir: self.course_dir,
            entries,
        }
    }

    fn course_index(&self) -> MarkdownPage {
        let title = self.course.display_title();
        let content = render_markdown(&title, &self.toc.course_toc(), false, DEFAULT_EXTRA);
        MarkdownPage::new(title, self.course.slug(), content, self.course.index_filename())
    }

    fn plan_section_dir(&self, position: usize, section: &Section, entries: &mut Vec<ScaffoldEntry>) {
        let section_dir = self.course_dir.join(section.directory_name(position));
        let review_dir = section_dir.join(REVIEW_DIR);
        let section_toc = self.toc.section_toc(position, true);

        if self.options.review_dirs {
            entries.push(ScaffoldEntry::Directory(review_dir.clone()));
        }

        entries.push(ScaffoldEntry::Page {
            dir: section_dir.clone(),
            page: self.section_index(position, section, &section_toc),
        });
        entries.push(ScaffoldEntry::Page {
            dir: section_dir.clone(),
            page: self.flashcards(position, section, &section_toc),
        });

        for (index, subsection) in section.subsections.iter().enumerate() {
            let sub_position = index + 1;
            let slug = generate_slug(subsection);
            let title = format!(
                "{} - {:02}.{:02} - {}",
                self.course.short_title,
                position,
                sub_position,
                title_case(subsection)
            );
            let content = render_markdown(&title, &section_toc, true, self.options.outline_block());
            let filename = format!("{:02}-{}.md", sub_position, slug);

            entries.push(ScaffoldEntry::Page {
                dir: section_dir.clone(),
                page: MarkdownPage::new(title, &slug, content, filename),
            });

            if self.options.review_dirs {
                entries.push(ScaffoldEntry::Directory(
                    review_dir.join(format!("{:02}-{}", sub_position, slug)),
                ));
            }
        }
    }

    fn section_index(&self, position: usize, section: &Section, toc: &str) -> MarkdownPage {
        let title = format!(
            "{} - {:02}.{:02} - {}",
            self.course.short_title,
            position,
            INDEX_PAGE,
            title_case(&section.title)
        );
        let content = render_markdown(&title, toc, true, DEFAULT_EXTRA);
        MarkdownPage::new(title, section.slug(), content, section.index_filename())
    }

    /// Flashcard page with one empty H2 per subsection
    fn flashcards(&self, position: usize, section: &Section, toc: &str) -> MarkdownPage {
        let title = format!(
            "{} - {:02}.{} - {} Flashcards",
            self.course.short_title,
            position,
            FLASHCARDS_PAGE,
            title_case(&section.title)
        );
        let headers: String = section
            .subsections
            .iter()
            .map(|subsection| format!("## {}\n\n\n", title_case(subsection)))
            .collect();
        let content = render_markdown(&title, toc, false, &headers);
        MarkdownPage::new(title, section.slug(), content, section.flashcards_filename())
    }

    fn flat_section(&self, position: usize, section: &Section) -> MarkdownPage {
        let title = format!(
            "{} - {:02} - {}",
            self.course.short_title,
            position,
            title_case(&section.title)
        );
        let toc = self.toc.section_toc(position, self.options.toc);
        let content = render_markdown(&title, &toc, true, self.options.outline_block());
        let filename = format!("{:02}-{}.md", position, section.slug());
        MarkdownPage::new(title, section.slug(), content, filename)
    }
}
