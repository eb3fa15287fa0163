// crates/course-setup-core/src/markdown.rs - Markdown page rendering
//
// Every generated file has the same fixed shape:
//
// ```markdown
// ---
// title: "CS 101 - 01.00 - Getting Started"
// tags: []
// dates: []
// ---
// # CS 101 - 01.00 - Getting Started
// ## TOC
// - [[00-intro_to_cs|CS 101 - Intro to CS]]
// ...
// ---
// ## Misc.
// ```
//
// The front matter is written by hand rather than through a YAML serializer
// so the output stays byte-for-byte stable: the title is always a double
// quoted scalar and the keys always appear in this order.

use thiserror::Error;

/// Trailing block for index and flashcard pages when nothing else is supplied
pub const DEFAULT_EXTRA: &str = "## Misc.";

/// Trailing block for subsection pages (and section pages in flat mode)
pub const DEFAULT_OUTLINE: &str = "## Key Points/Concepts\n\n## Lecture\n\n## Misc.";

/// Errors from decoding terminal escape sequences
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EscapeError {
    #[error("Truncated escape sequence '\\{0}' at end of input")]
    Truncated(char),

    #[error("Invalid hex digits in escape '\\{kind}{digits}'")]
    InvalidHex { kind: char, digits: String },

    #[error("Escape '\\{kind}{digits}' is not a valid unicode scalar value")]
    InvalidCodepoint { kind: char, digits: String },
}

/// Result type for escape decoding
pub type EscapeResult<T> = Result<T, EscapeError>;

/// A single rendered markdown document, ready to be written
///
/// Pages are plain values: they are built right before writing and carry
/// everything the writer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownPage {
    /// Heading title, as shown in the H1 and front matter
    pub title: String,
    /// Slug of the thing the page describes
    pub slug: String,
    /// Full markdown text of the page
    pub content: String,
    /// File name, e.g. `00-intro.md`
    pub filename: String,
}

impl MarkdownPage {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            content: content.into(),
            filename: filename.into(),
        }
    }
}

/// Render a complete markdown page
///
/// `dates` controls the empty `dates: []` front matter field. When it is
/// false the line is left blank so every page has the same line count.
///
/// EXAMPLES:
/// ```rust
/// use course_setup_core::markdown::{render_markdown, DEFAULT_EXTRA};
///
/// let page = render_markdown("Intro", "- [[00-intro|Intro]]\n", false, DEFAULT_EXTRA);
/// assert!(page.starts_with("---\ntitle: \"Intro\"\ntags: []\n\n---\n# Intro\n"));
/// assert!(page.ends_with("---\n## Misc."));
/// ```
pub fn render_markdown(title: &str, table_of_contents: &str, dates: bool, extra: &str) -> String {
    let dates_line = if dates { "dates: []" } else { "" };

    format!(
        "---\n\
         title: \"{quoted}\"\n\
         tags: []\n\
         {dates_line}\n\
         ---\n\
         # {title}\n\
         ## TOC\n\
         {table_of_contents}\n\
         ---\n\
         {extra}",
        quoted = escape_yaml_string(title),
    )
}

/// Escape text for use inside a double quoted YAML scalar
fn escape_yaml_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Decode backslash escapes typed on the command line
///
/// Shells hand `--extra '## Notes\n\n## Links'` over with a literal
/// backslash-n, so the text is decoded before it reaches any page.
///
/// SUPPORTED ESCAPES:
/// - `\n` `\t` `\r` `\\` `\'` `\"` `\a` `\b` `\f` `\v`
/// - `\ooo` octal (one to three digits)
/// - `\xHH`, `\uHHHH`, `\UHHHHHHHH`
///
/// Unknown escapes such as `\q` are kept verbatim.
pub fn decode_escapes(text: &str) -> EscapeResult<String> {
    let mut decoded = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        let Some(kind) = chars.next() else {
            // A lone trailing backslash is kept as typed
            decoded.push('\\');
            break;
        };

        match kind {
            'n' => decoded.push('\n'),
            't' => decoded.push('\t'),
            'r' => decoded.push('\r'),
            '\\' => decoded.push('\\'),
            '\'' => decoded.push('\''),
            '"' => decoded.push('"'),
            'a' => decoded.push('\x07'),
            'b' => decoded.push('\x08'),
            'f' => decoded.push('\x0c'),
            'v' => decoded.push('\x0b'),
            '0'..='7' => {
                let mut value = kind.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                // Three octal digits top out at 0o777, always a valid scalar
                decoded.extend(char::from_u32(value));
            }
            'x' | 'u' | 'U' => {
                let width = match kind {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.by_ref().take(width).collect();
                if digits.chars().count() < width {
                    return Err(EscapeError::Truncated(kind));
                }
                // from_str_radix alone would accept a leading sign
                let value = digits
                    .chars()
                    .all(|d| d.is_ascii_hexdigit())
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .ok_or_else(|| EscapeError::InvalidHex {
                        kind,
                        digits: digits.clone(),
                    })?;
                let ch = char::from_u32(value)
                    .ok_or(EscapeError::InvalidCodepoint { kind, digits })?;
                decoded.push(ch);
            }
            other => {
                decoded.push('\\');
                decoded.push(other);
            }
        }
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_dates() {
        let page = render_markdown("EC 1 - 01.01 - Intro", "- [[toc]]\n", true, DEFAULT_OUTLINE);
        let expected = "---\n\
                        title: \"EC 1 - 01.01 - Intro\"\n\
                        tags: []\n\
                        dates: []\n\
                        ---\n\
                        # EC 1 - 01.01 - Intro\n\
                        ## TOC\n\
                        - [[toc]]\n\
                        \n\
                        ---\n\
                        ## Key Points/Concepts\n\n## Lecture\n\n## Misc.";
        assert_eq!(page, expected);
    }

    #[test]
    fn test_render_without_dates_keeps_blank_line() {
        let page = render_markdown("Title", "", false, DEFAULT_EXTRA);
        assert_eq!(
            page,
            "---\ntitle: \"Title\"\ntags: []\n\n---\n# Title\n## TOC\n\n---\n## Misc."
        );
    }

    #[test]
    fn test_front_matter_is_valid_yaml() {
        let page = render_markdown(r#"Say "Hi" \o/"#, "", true, DEFAULT_EXTRA);
        let front = page
            .strip_prefix("---\n")
            .and_then(|rest| rest.split("\n---\n").next())
            .unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(front).unwrap();
        assert_eq!(value["title"].as_str(), Some(r#"Say "Hi" \o/"#));
        assert!(value["tags"].as_sequence().unwrap().is_empty());
        assert!(value["dates"].as_sequence().unwrap().is_empty());
    }

    #[test]
    fn test_decode_common_escapes() {
        assert_eq!(decode_escapes(r"## A\n\n## B").unwrap(), "## A\n\n## B");
        assert_eq!(decode_escapes(r"tab\there").unwrap(), "tab\there");
        assert_eq!(decode_escapes(r"back\\slash").unwrap(), "back\\slash");
        assert_eq!(decode_escapes(r#"\'q\""#).unwrap(), "'q\"");
    }

    #[test]
    fn test_decode_numeric_escapes() {
        assert_eq!(decode_escapes(r"\x41é\U0001F600").unwrap(), "Aé😀");
        assert_eq!(decode_escapes(r"\101\0").unwrap(), "A\0");
    }

    #[test]
    fn test_decode_keeps_unknown_and_non_ascii() {
        assert_eq!(decode_escapes(r"\q stays").unwrap(), r"\q stays");
        assert_eq!(decode_escapes("naïve ✓").unwrap(), "naïve ✓");
        assert_eq!(decode_escapes("trailing\\").unwrap(), "trailing\\");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode_escapes(r"\x4"), Err(EscapeError::Truncated('x')));
        assert!(matches!(
            decode_escapes(r"\xZZ"),
            Err(EscapeError::InvalidHex { kind: 'x', .. })
        ));
        assert_eq!(
            decode_escapes(r"\u+041"),
            Err(EscapeError::InvalidHex {
                kind: 'u',
                digits: "+041".to_string()
            })
        );
        assert!(matches!(
            decode_escapes(r"\uD800"),
            Err(EscapeError::InvalidCodepoint { kind: 'u', .. })
        ));
    }
}
