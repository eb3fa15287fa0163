// crates/course-setup-cli/src/main.rs - CLI Application Entry Point
//
// course-setup asks for a course outline and writes a tree of markdown
// notes with YAML front matter and Obsidian-style tables of contents.
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   Flags / env   │───▶│     Context      │───▶│  commands/generate  │
// │  (clap, cli.rs) │    │ (config + paths) │    │  (plan + report)    │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 ▲                        │
//                                 │                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │      Input       │    │   OutputService     │
//                        │ (prompts/outline)│    │   (file writes)     │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// course-setup                              # Section folders with subsections
// course-setup --no-dirs --no-toc           # One file per section, no TOC
// course-setup -e '## Notes\n\n## Links'    # Custom trailing block
// course-setup --outline course.yaml --json # Non-interactive, JSON report
// ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod input;
mod services;

use cli::Cli;
use context::Context;
use input::TerminalPrompter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flag validation happens before any prompt or file I/O
    if let Err(err) = cli.validate() {
        err.exit();
    }

    init_tracing(cli.verbose);

    if cli.print_config {
        return commands::config::handle();
    }

    let ctx = Context::new(&cli)?;
    let layout = ctx.options().layout;

    let course = match &cli.outline {
        Some(path) => input::load_outline(path, layout)?,
        None => input::collect_course(&mut TerminalPrompter::stdio(), layout)?,
    };

    commands::generate::handle(&ctx, &course, cli.dry_run, cli.json)
}

/// Log to stderr; RUST_LOG wins over --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
