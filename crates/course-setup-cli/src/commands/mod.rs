// crates/course-setup-cli/src/commands/mod.rs - Command Handler Modules
//
// MODULE ORGANIZATION:
// - generate: plan a course and write (or preview) its notes
// - config: print the documented default configuration

pub mod config;
pub mod generate;
