// crates/course-setup-core/examples/playground.rs
// Run with: cargo run --example playground

use course_setup_core::config::{GenerationOptions, Layout};
use course_setup_core::course::{Course, Section};
use course_setup_core::scaffold::{ScaffoldEntry, plan};
use course_setup_core::slug::generate_slug;
use course_setup_core::title::title_case;

fn main() {
    println!("🗂️ Course Setup Playground\n");

    println!("=== Titles and Slugs ===");
    for raw in ["intro to rust ii", "the borrow checker: a field guide", "I/O (and friends)"] {
        println!("{:<40} -> {:<40} {}", raw, title_case(raw), generate_slug(raw));
    }

    let mut course = Course::new("systems programming", "SP 2", Some(2));
    let mut memory = Section::new("memory management");
    memory.add_subsection("stack vs heap");
    memory.add_subsection("ownership in practice");
    let mut concurrency = Section::new("concurrency");
    concurrency.add_subsection("threads and channels");
    course.add_section(memory);
    course.add_section(concurrency);

    println!("\n=== Directory Layout ===");
    let scaffold = plan(&course, &GenerationOptions::default());
    for entry in &scaffold.entries {
        match entry {
            ScaffoldEntry::Directory(dir) => println!("📁 {}/", dir.display()),
            ScaffoldEntry::Page { dir, page } => {
                println!("📄 {}", dir.join(&page.filename).display())
            }
        }
    }

    println!("\n=== Flat Layout ===");
    let flat = GenerationOptions {
        layout: Layout::Flat,
        ..GenerationOptions::default()
    };
    for (dir, page) in plan(&course, &flat).pages() {
        println!("📄 {}", dir.join(&page.filename).display());
    }

    println!("\n=== Course Index Page ===");
    if let Some((_, index)) = scaffold.pages().next() {
        println!("{}", index.content);
    }
}
