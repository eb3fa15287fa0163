// crates/course-setup-cli/src/commands/generate.rs - Scaffold Generation Command
//
// The one command that does real work: plan the course, then write the plan
// (or just describe it for --dry-run), then report what happened.

use anyhow::Result;
use console::style;
use std::path::Path;

use course_setup_core::course::Course;
use course_setup_core::scaffold::plan;

use crate::context::Context;
use crate::services::GenerationReport;

/// Generate the note tree for a collected course
///
/// OUTPUT:
/// - default: a short human summary on stdout
/// - `--dry-run`: every path that would be created, nothing written
/// - `--json`: the `GenerationReport` as pretty JSON, for scripting
pub fn handle(ctx: &Context, course: &Course, dry_run: bool, json: bool) -> Result<()> {
    let scaffold = plan(course, ctx.options());

    let report = if dry_run {
        ctx.output.preview(&scaffold)
    } else {
        ctx.output.write_scaffold(&scaffold)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, ctx.output.base_dir());
    }

    Ok(())
}

fn print_summary(report: &GenerationReport, base_dir: &Path) {
    if report.dry_run {
        println!("{}", style("Dry run, nothing was written:").yellow());
        for file in &report.files {
            println!("  📄 {}", relative(file, base_dir));
        }
        for dir in &report.directories {
            println!("  📁 {}/", relative(dir, base_dir));
        }
        return;
    }

    println!(
        "{} Created {} pages and {} directories in {}",
        style("✅").green(),
        report.files.len(),
        report.directories.len(),
        style(report.course_dir.display()).bold()
    );
}

fn relative(path: &Path, base_dir: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_paths_in_summary() {
        let base = PathBuf::from("/notes");
        assert_eq!(relative(Path::new("/notes/ec/00-ec.md"), &base), "ec/00-ec.md");
        assert_eq!(relative(Path::new("/elsewhere/x.md"), &base), "/elsewhere/x.md");
    }
}
