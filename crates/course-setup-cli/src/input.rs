// crates/course-setup-cli/src/input.rs - Course input collection
//
// A course comes from one of two places:
// - interactive prompts, one title per line, CTRL-D closing each loop
// - a YAML outline file passed with --outline
//
// Prompts are written to stderr so stdout only ever carries the report,
// which keeps `course-setup --json | jq` usable while answering prompts.

use anyhow::{Result, anyhow};
use std::io::{self, BufRead, Stderr, StdinLock, Write};
use std::path::Path;

use course_setup_core::config::Layout;
use course_setup_core::course::{Course, Section};

const NUMBER_PROMPT: &str = "Enter the course number (leave blank if no course number): ";
const TITLE_PROMPT: &str = "Enter the course title: ";
const SHORT_TITLE_PROMPT: &str = "Enter the short-form title (case-sensitive): ";
const SECTION_PROMPT: &str = "Section title: ";
const SUBSECTION_PROMPT: &str = "Subsection title: ";

/// Line-oriented question and answer channel
///
/// The collector only talks to this trait, so tests can script the
/// answers, including end-of-input, without a terminal.
pub trait Prompter {
    /// Show `prompt` and read one trimmed answer; `None` means end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Show an informational line
    fn say(&mut self, message: &str) -> Result<()>;
}

/// Prompter over any reader/writer pair, normally stdin and stderr
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompter<StdinLock<'static>, Stderr> {
    /// Prompt on stderr, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // On a terminal CTRL-D makes read_line return 0 without closing
        // stdin, so later prompts can still be answered
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

/// Build a course by prompting for every title
///
/// PROMPT SEQUENCE:
/// 1. Course number: blank for none, re-asked until it parses
/// 2. Course title: re-asked until non-blank
/// 3. Short title
/// 4. Section titles until end of input; in directory mode each section is
///    followed by subsection titles until end of input
///
/// End of input while the course details are being asked is an error.
pub fn collect_course<P: Prompter + ?Sized>(prompter: &mut P, layout: Layout) -> Result<Course> {
    let course_number = loop {
        let answer = require(prompter, NUMBER_PROMPT, "a course number")?;
        if answer.is_empty() {
            break None;
        }
        match answer.parse::<u32>() {
            Ok(number) => break Some(number),
            Err(_) => prompter
                .say("Invalid course number. Please enter a valid integer or leave it blank.")?,
        }
    };

    let title = loop {
        let answer = require(prompter, TITLE_PROMPT, "a course title")?;
        if !answer.is_empty() {
            break answer;
        }
        prompter.say("Course title cannot be empty. Please enter a valid course title.")?;
    };

    let short_title = require(prompter, SHORT_TITLE_PROMPT, "a short-form title")?;
    let mut course = Course::new(title, short_title, course_number);

    prompter.say("\nEnter the section title (or CTRL-D to finish):\n")?;
    while let Some(section_title) = prompter.ask(SECTION_PROMPT)? {
        let mut section = Section::new(section_title);

        if layout == Layout::Directories {
            while let Some(subsection) = prompter.ask(SUBSECTION_PROMPT)? {
                section.add_subsection(subsection);
            }
            prompter.say("")?;
        }

        tracing::debug!(
            section = %section.title,
            subsections = section.subsections.len(),
            "collected section"
        );
        course.add_section(section);
    }
    prompter.say("")?;

    Ok(course)
}

/// Load a course from a YAML outline instead of prompting
pub fn load_outline(path: &Path, layout: Layout) -> Result<Course> {
    let course = Course::from_outline_file(path)?;

    if layout == Layout::Flat {
        for section in course.sections.iter().filter(|s| !s.subsections.is_empty()) {
            tracing::warn!(
                section = %section.title,
                "subsections are ignored with --no-dirs"
            );
        }
    }

    Ok(course)
}

fn require<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str, what: &str) -> Result<String> {
    prompter
        .ask(prompt)?
        .ok_or_else(|| anyhow!("Input ended before {} was entered", what))
}
