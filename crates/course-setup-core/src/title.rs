// crates/course-setup-core/src/title.rs - Title casing for headings and link labels
//
// Every visible title in the generated notes goes through `title_case`.
// The rules are the usual English headline rules with two twists:
// Roman numerals are shouted ("Part ii" -> "Part II") and minor words stay
// lowercase unless they open the title.

use regex::Regex;
use std::sync::LazyLock;

/// Words kept lowercase when they are not the first word
///
/// Membership is case-sensitive: "The" in the middle of a title is not a
/// minor word and gets capitalized like any other word.
pub const MINOR_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "for", "so", "yet", "as", "at", "by", "down",
    "from", "in", "into", "like", "near", "of", "off", "on", "onto", "out", "over", "past", "per",
    "to", "up", "upon", "with", "via", "vs",
];

static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^M*(C[MD]|D?C{0,3})(X[CL]|L?X{0,3})(I[XV]|V?I{0,3})$")
        .expect("roman numeral pattern is valid")
});

/// Check whether a single word is a Roman numeral
pub fn is_roman_numeral(word: &str) -> bool {
    !word.is_empty() && ROMAN_NUMERAL.is_match(word)
}

/// Convert a title to headline case
///
/// Whitespace between words is preserved exactly as given.
///
/// EXAMPLES:
/// ```rust
/// use course_setup_core::title::title_case;
///
/// assert_eq!(title_case("course title ii"), "Course Title II");
/// assert_eq!(title_case("title of the course"), "Title of the Course");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut seen_word = false;

    for token in tokens(text) {
        if token.starts_with(char::is_whitespace) {
            result.push_str(token);
            continue;
        }

        let first = !seen_word;
        seen_word = true;

        if is_roman_numeral(token) {
            result.push_str(&token.to_uppercase());
        } else if first || !MINOR_WORDS.contains(&token) {
            result.push_str(&capitalize(token));
        } else {
            result.push_str(&token.to_lowercase());
        }
    }

    result
}

/// Uppercase the first character and lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split text into alternating runs of whitespace and non-whitespace
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let in_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != in_space)
            .map_or(rest.len(), |(i, _)| i);
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some(token)
    })
}
