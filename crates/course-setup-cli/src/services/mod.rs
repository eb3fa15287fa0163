// crates/course-setup-cli/src/services/mod.rs - Service layer modules
pub mod output;

pub use output::{GenerationReport, OutputService};
