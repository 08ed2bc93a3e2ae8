//! Listing patterns.
//!
//! Accepts either a bare regular expression (`\.log$`) or a delimited one with trailing
//! flags (`/\.log$/i`, `#^sub#`, `{\.log$}`). Any punctuation other than `\` can
//! delimit; `(`, `[`, `{` and `<` close with their partner. Flags are `imsxU`. A
//! delimited form whose tail is not a valid flag set is taken as a bare expression, so
//! `/usr/.*` stays a plain regex. Note that `[abc]` is therefore the delimited body
//! `abc`, not a character class.

use regex::Regex;

use crate::errors::FolderError;

const FLAGS: &[char] = &['i', 'm', 's', 'x', 'U'];

/// Compile a listing pattern into a [`Regex`].
pub fn compile_pattern(pattern: &str) -> Result<Regex, FolderError> {
    let source = match split_delimited(pattern) {
        Some((body, flags)) => with_inline_flags(body, flags),
        None => pattern.to_string(),
    };
    Regex::new(&source).map_err(|source| FolderError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Closing partner of a bracket-style delimiter.
fn closing_bracket(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn is_delimiter(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && c != '\\'
}

/// `(body, flags)` when `pattern` is `<d>body<d>flags` with a valid delimiter and flag set.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let open = pattern.chars().next().filter(|&c| is_delimiter(c))?;
    let rest = &pattern[open.len_utf8()..];
    let (end, close) = match closing_bracket(open) {
        Some(close) => (matching_close(rest, open, close)?, close),
        None => (rest.rfind(open)?, open),
    };
    let (body, flags) = (&rest[..end], &rest[end + close.len_utf8()..]);
    flags.chars().all(|c| FLAGS.contains(&c)).then_some((body, flags))
}

/// Byte offset of the bracket closing the one already consumed, honouring nesting and escapes.
fn matching_close(rest: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        }
    }
    None
}

/// Prefix `body` with the flags as an inline group, each flag once.
fn with_inline_flags(body: &str, flags: &str) -> String {
    let mut inline = String::new();
    for c in flags.chars() {
        if !inline.contains(c) {
            inline.push(c);
        }
    }
    if inline.is_empty() {
        return body.to_string();
    }
    format!("(?{inline}){body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_expression() {
        let re = compile_pattern(r"\.log$").unwrap();
        assert!(re.is_match("z.log"));
        assert!(!re.is_match("y.txt"));
    }

    #[test]
    fn delimited_with_flags() {
        let re = compile_pattern(r"/\.LOG$/i").unwrap();
        assert!(re.is_match("z.log"));
        let re = compile_pattern("#^sub#").unwrap();
        assert!(re.is_match("sub"));
        assert!(!re.is_match("xsub"));
    }

    #[test]
    fn delimiter_inside_body_uses_last_occurrence() {
        let re = compile_pattern("/a/b/").unwrap();
        assert!(re.is_match("xa/by"));
    }

    #[test]
    fn non_flag_tail_falls_back_to_bare() {
        let re = compile_pattern("/usr/.*").unwrap();
        assert!(re.is_match("/usr/bin"));
    }

    #[test]
    fn repeated_flags_are_collapsed() {
        assert_eq!(with_inline_flags("a", "iUi"), "(?iU)a");
        assert_eq!(with_inline_flags("a", ""), "a");
    }

    #[test]
    fn bracket_delimiters_close_with_their_partner() {
        let re = compile_pattern(r"{\.log$}").unwrap();
        assert!(re.is_match("z.log"));
        assert!(!re.is_match("z.txt"));

        let re = compile_pattern("(^SUB)i").unwrap();
        assert!(re.is_match("sub"));
        assert!(!re.is_match("xsub"));

        let re = compile_pattern(r"<a{2}>").unwrap();
        assert!(re.is_match("baab"));
        assert!(!re.is_match("ab"));
    }

    #[test]
    fn nested_and_escaped_brackets_stay_in_the_body() {
        let re = compile_pattern(r"((a|b)c)i").unwrap();
        assert!(re.is_match("BC"));
        let re = compile_pattern(r"[x\]]").unwrap();
        assert!(re.is_match("x]"));
    }

    #[test]
    fn any_punctuation_can_delimit() {
        let re = compile_pattern(r"+\.log$+i").unwrap();
        assert!(re.is_match("A.LOG"));
        let re = compile_pattern(r"=^ab=").unwrap();
        assert!(re.is_match("abc"));
    }

    #[test]
    fn unknown_flags_fall_back_to_bare() {
        // "u" is not an accepted flag, so the whole text is one expression.
        let re = compile_pattern("/a/u").unwrap();
        assert!(re.is_match("/a/u"));
        assert!(!re.is_match("a"));
        // Two groups are not one delimited body.
        let re = compile_pattern("(a)(b)").unwrap();
        assert!(re.is_match("ab"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = compile_pattern("/(unclosed/").unwrap_err();
        assert!(matches!(err, FolderError::InvalidPattern { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }
}
