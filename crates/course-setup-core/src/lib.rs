// crates/course-setup-core/src/lib.rs - Course note scaffolding core
//
// Pure building blocks for turning a course outline into a tree of linked
// markdown notes. Nothing in this crate prompts the user or writes files;
// the CLI crate owns all I/O.
//
// MODULE ORGANIZATION (leaf to root):
// - slug: title -> filesystem name
// - title: headline casing with minor words and Roman numerals
// - markdown: page rendering and terminal escape decoding
// - course: Course / Section data model and YAML outlines
// - toc: Obsidian wikilink tables of contents
// - config: layered configuration and `GenerationOptions`
// - scaffold: the plan of directories and pages for one course

pub mod config;
pub mod course;
pub mod markdown;
pub mod scaffold;
pub mod slug;
pub mod title;
pub mod toc;

pub use config::{GenerationOptions, Layout};
pub use course::{Course, Section};
pub use markdown::MarkdownPage;
pub use scaffold::{Scaffold, ScaffoldEntry, plan};
