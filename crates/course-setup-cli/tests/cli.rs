// crates/course-setup-cli/tests/cli.rs - End-to-end tests of the binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

const TWO_BY_TWO: &str = "\
number: 1
title: example course
short_title: EC 1
sections:
  - title: Section 1
    subsections: [Subsection 1-1, Subsection 1-2]
  - title: Section 2
    subsections: [Subsection 2-1, Subsection 2-2]
";

fn course_setup(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("course-setup").unwrap();
    cmd.current_dir(dir)
        .env_remove("COURSE_SETUP_DIR")
        .env_remove("COURSE_SETUP_EXTRA")
        .env_remove("RUST_LOG");
    cmd
}

fn write_outline(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("course.yaml");
    fs::write(&path, TWO_BY_TWO).unwrap();
    path
}

fn markdown_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .map(|e| e.path().strip_prefix(root).unwrap().display().to_string())
        .collect();
    files.sort();
    files
}

#[test]
fn directory_mode_two_by_two() {
    let temp = TempDir::new().unwrap();
    let outline = write_outline(temp.path());
    let out = temp.path().join("notes");

    course_setup(temp.path())
        .arg("--outline")
        .arg(&outline)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 9 pages and 6 directories"));

    let course_dir = out.join("01-example_course");
    let files = markdown_files(&course_dir);
    assert_eq!(
        files,
        vec![
            "00-example_course.md",
            "01-section_1/00-section_1.md",
            "01-section_1/01-subsection_1-1.md",
            "01-section_1/02-subsection_1-2.md",
            "01-section_1/99-flashcards_section_1.md",
            "02-section_2/00-section_2.md",
            "02-section_2/01-subsection_2-1.md",
            "02-section_2/02-subsection_2-2.md",
            "02-section_2/99-flashcards_section_2.md",
        ]
    );

    for (section, subs) in [
        ("01-section_1", ["01-subsection_1-1", "02-subsection_1-2"]),
        ("02-section_2", ["01-subsection_2-1", "02-subsection_2-2"]),
    ] {
        let review = course_dir.join(section).join("100-review_files");
        assert!(review.is_dir());
        for sub in subs {
            let dir = review.join(sub);
            assert!(dir.is_dir());
            assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        }
    }
}

#[test]
fn flat_mode_from_piped_prompts() {
    let temp = TempDir::new().unwrap();

    course_setup(temp.path())
        .arg("--no-dirs")
        .write_stdin("\n\n   \nexample course\nEC 1\nSection 1\nSection 2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Course title cannot be empty"));

    let course_dir = temp.path().join("example_course");
    assert_eq!(
        markdown_files(&course_dir),
        vec!["00-example_course.md", "01-section_1.md", "02-section_2.md"]
    );

    let section = fs::read_to_string(course_dir.join("01-section_1.md")).unwrap();
    assert!(section.starts_with("---\ntitle: \"EC 1 - 01 - Section 1\"\ntags: []\ndates: []\n---\n"));
    assert!(section.contains("- [[02-section_2|EC 1 - 02 - Section 2]]\n"));
    assert!(section.ends_with("---\n## Key Points/Concepts\n\n## Lecture\n\n## Misc."));
}

#[test]
fn no_toc_without_no_dirs_fails_before_writing() {
    let temp = TempDir::new().unwrap();

    course_setup(temp.path())
        .arg("--no-toc")
        .write_stdin("1\nexample course\nEC 1\nSection 1\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(
            "The --no-toc flag can only be used with --no-dirs.",
        ));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn no_toc_in_flat_mode_keeps_course_link_only() {
    let temp = TempDir::new().unwrap();

    course_setup(temp.path())
        .args(["-n", "-t"])
        .write_stdin("\nexample course\nEC 1\nSection 1\nSection 2\n")
        .assert()
        .success();

    let section = fs::read_to_string(temp.path().join("example_course/02-section_2.md")).unwrap();
    assert!(section.contains("## TOC\n- [[00-example_course|EC 1 - Example Course]]\n\n---\n"));
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let temp = TempDir::new().unwrap();
    let outline = write_outline(temp.path());
    let run = || {
        course_setup(temp.path())
            .arg("--outline")
            .arg(&outline)
            .assert()
            .success();
    };

    run();
    let course_dir = temp.path().join("01-example_course");
    let snapshot: Vec<(String, Vec<u8>)> = markdown_files(&course_dir)
        .into_iter()
        .map(|f| {
            let bytes = fs::read(course_dir.join(&f)).unwrap();
            (f, bytes)
        })
        .collect();

    // Scribble over one file; the second run must restore it
    fs::write(course_dir.join("00-example_course.md"), "edited").unwrap();
    run();

    for (file, bytes) in snapshot {
        assert_eq!(fs::read(course_dir.join(&file)).unwrap(), bytes, "{}", file);
    }
}

#[test]
fn extra_flag_decodes_escapes() {
    let temp = TempDir::new().unwrap();
    let outline = write_outline(temp.path());

    course_setup(temp.path())
        .arg("--outline")
        .arg(&outline)
        .args(["--extra", r"## Notes\n\n## Links"])
        .assert()
        .success();

    let sub = fs::read_to_string(
        temp.path()
            .join("01-example_course/01-section_1/01-subsection_1-1.md"),
    )
    .unwrap();
    assert!(sub.ends_with("---\n## Notes\n\n## Links"));

    // Index pages keep their default block
    let index = fs::read_to_string(temp.path().join("01-example_course/00-example_course.md")).unwrap();
    assert!(index.ends_with("---\n## Misc."));
}

#[test]
fn front_matter_parses_as_yaml() {
    let temp = TempDir::new().unwrap();
    let outline = write_outline(temp.path());

    course_setup(temp.path())
        .arg("--outline")
        .arg(&outline)
        .assert()
        .success();

    let page = fs::read_to_string(
        temp.path()
            .join("01-example_course/02-section_2/00-section_2.md"),
    )
    .unwrap();
    let front = page
        .strip_prefix("---\n")
        .and_then(|rest| rest.split("\n---\n").next())
        .unwrap();
    let yaml: serde_yaml::Value = serde_yaml::from_str(front).unwrap();
    assert_eq!(yaml["title"].as_str(), Some("EC 1 - 02.00 - Section 2"));
}

#[test]
fn dry_run_json_report_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let outline = write_outline(temp.path());
    let out = temp.path().join("notes");

    let assert = course_setup(temp.path())
        .arg("--outline")
        .arg(&outline)
        .arg("-o")
        .arg(&out)
        .args(["--dry-run", "--json", "--no-review-dirs"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["dry_run"], serde_json::Value::Bool(true));
    assert_eq!(report["files"].as_array().unwrap().len(), 9);
    assert!(report["directories"].as_array().unwrap().is_empty());
    assert!(!out.exists());
}

#[test]
fn config_file_in_output_dir_is_used() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".course-setup.toml"),
        "[layout]\nmode = \"flat\"\n\n[content]\nextra = \"## From Config\"\n",
    )
    .unwrap();

    course_setup(temp.path())
        .write_stdin("\nexample course\nEC 1\nSection 1\n")
        .assert()
        .success();

    let section = fs::read_to_string(temp.path().join("example_course/01-section_1.md")).unwrap();
    assert!(section.ends_with("---\n## From Config"));
}

#[test]
fn print_config_outputs_toml() {
    let temp = TempDir::new().unwrap();

    course_setup(temp.path())
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[layout]").and(predicate::str::contains("review_dirs = true")));
}

#[test]
fn missing_outline_is_an_error() {
    let temp = TempDir::new().unwrap();

    course_setup(temp.path())
        .args(["--outline", "nope.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nope.yaml"));
}
