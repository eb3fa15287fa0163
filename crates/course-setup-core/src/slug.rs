// crates/course-setup-core/src/slug.rs - Title to filesystem name transform
//
// Slugs name every directory and markdown file the scaffold produces, and
// they double as Obsidian link targets, so the mapping must be a pure
// function of the title text. Two distinct titles may map to the same slug;
// nothing here tries to prevent that.
//
// MAPPING:
// - ' '  -> '_'
// - ':'  -> "_-"
// - '/'  -> '-'
// - '(' ')' '?' '!' ',' '\'' -> removed
// - everything else is lowercased

/// Convert a title into a filesystem and link friendly slug
///
/// EXAMPLES:
/// ```rust
/// use course_setup_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("Intro to Rust"), "intro_to_rust");
/// assert_eq!(generate_slug("Week 1: Basics"), "week_1_-_basics");
/// assert_eq!(generate_slug("Input/Output (I/O)"), "input-output_i-o");
/// ```
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.chars() {
        match c {
            '(' | ')' | '?' | '!' | ',' | '\'' => {}
            ' ' => slug.push('_'),
            ':' => slug.push_str("_-"),
            '/' => slug.push('-'),
            other => slug.extend(other.to_lowercase()),
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_slugs() {
        assert_eq!(generate_slug("Course Title"), "course_title");
        assert_eq!(generate_slug("What's New?"), "whats_new");
        assert_eq!(generate_slug("Hello, World!"), "hello_world");
        assert_eq!(generate_slug("Part 2: The Sequel"), "part_2_-_the_sequel");
        assert_eq!(generate_slug("TCP/IP"), "tcp-ip");
        assert_eq!(generate_slug("Sorting (Advanced)"), "sorting_advanced");
    }

    #[test]
    fn test_empty_and_unicode() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("Ünïcödé Tïtle"), "ünïcödé_tïtle");
    }

    proptest! {
        #[test]
        fn slug_is_idempotent(title in "[a-zA-Z0-9 ():/?!,'_À-ž-]*") {
            let once = generate_slug(&title);
            prop_assert_eq!(generate_slug(&once), once);
        }

        #[test]
        fn slug_has_no_stripped_characters(title in "[a-zA-Z0-9 ():/?!,']*") {
            let slug = generate_slug(&title);
            for forbidden in ['(', ')', ':', '/', '?', '!', ',', '\'', ' '] {
                prop_assert!(!slug.contains(forbidden), "{:?} kept {:?}", slug, forbidden);
            }
        }
    }
}
