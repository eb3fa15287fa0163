// crates/course-setup-core/src/toc.rs - Table of contents builder
//
// Tables of contents are Obsidian wikilink lists. Link targets are file
// names without the `.md` extension, labels are the display titles:
//
// ```markdown
// - [[00-intro_to_rust|RS 1 - Intro to Rust]]
// - [[00-ownership|RS 1 - 01.00 - Ownership]]
// 	- [[01-moves|RS 1 - 01.01 - Moves]]
// 	- [[99-flashcards_ownership|RS 1 - 01.99 - Ownership Flashcards]]
// - [[00-traits|RS 1 - 02.00 - Traits]]
// ```
//
// Child lines are indented with a single tab. Display numbers are 1-based
// positions, zero padded to two digits.

use crate::config::Layout;
use crate::course::{Course, FLASHCARDS_PAGE, INDEX_PAGE, Section};
use crate::slug::generate_slug;
use crate::title::title_case;

/// Builds the link lists embedded in every generated page
pub struct TocBuilder<'a> {
    course: &'a Course,
    layout: Layout,
}

impl<'a> TocBuilder<'a> {
    pub fn new(course: &'a Course, layout: Layout) -> Self {
        Self { course, layout }
    }

    /// TOC for the course index page: every section, fully expanded
    pub fn course_toc(&self) -> String {
        let mut toc = self.course_link();

        for (position, section) in self.positions() {
            match self.layout {
                Layout::Directories => {
                    toc.push_str(&self.section_link(position, section));
                    toc.push_str(&self.section_children(position, section));
                }
                Layout::Flat => toc.push_str(&self.flat_section_link(position, section)),
            }
        }

        toc
    }

    /// TOC for the pages of one section
    ///
    /// In directory mode only the current section is expanded. With
    /// `include_sections` false (flat mode only) the TOC shrinks to the
    /// course back-link.
    pub fn section_toc(&self, current: usize, include_sections: bool) -> String {
        let mut toc = self.course_link();

        for (position, section) in self.positions() {
            match self.layout {
                Layout::Directories => {
                    toc.push_str(&self.section_link(position, section));
                    if position == current {
                        toc.push_str(&self.section_children(position, section));
                    }
                }
                Layout::Flat if include_sections => {
                    toc.push_str(&self.flat_section_link(position, section));
                }
                Layout::Flat => {}
            }
        }

        toc
    }

    fn positions(&self) -> impl Iterator<Item = (usize, &'a Section)> + use<'a> {
        let course: &'a Course = self.course;
        course
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| (index + 1, section))
    }

    fn course_link(&self) -> String {
        format!(
            "- [[{:02}-{}|{}]]\n",
            INDEX_PAGE,
            self.course.slug(),
            self.course.display_title()
        )
    }

    fn section_link(&self, position: usize, section: &Section) -> String {
        format!(
            "- [[{:02}-{}|{} - {:02}.{:02} - {}]]\n",
            INDEX_PAGE,
            section.slug(),
            self.course.short_title,
            position,
            INDEX_PAGE,
            title_case(&section.title)
        )
    }

    fn flat_section_link(&self, position: usize, section: &Section) -> String {
        format!(
            "- [[{:02}-{}|{} - {:02} - {}]]\n",
            position,
            section.slug(),
            self.course.short_title,
            position,
            title_case(&section.title)
        )
    }

    /// Indented subsection lines followed by the flashcard page line
    fn section_children(&self, position: usize, section: &Section) -> String {
        let mut lines = String::new();

        for (index, subsection) in section.subsections.iter().enumerate() {
            let sub_position = index + 1;
            lines.push_str(&format!(
                "\t- [[{:02}-{}|{} - {:02}.{:02} - {}]]\n",
                sub_position,
                generate_slug(subsection),
                self.course.short_title,
                position,
                sub_position,
                title_case(subsection)
            ));
        }

        lines.push_str(&format!(
            "\t- [[{}-flashcards_{}|{} - {:02}.{} - {} Flashcards]]\n",
            FLASHCARDS_PAGE,
            section.slug(),
            self.course.short_title,
            position,
            FLASHCARDS_PAGE,
            title_case(&section.title)
        ));

        lines
    }
}
