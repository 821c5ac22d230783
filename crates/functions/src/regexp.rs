//! Regular-expression matching and replacement.
//!
//! Patterns use the `regex` crate's syntax, which covers the POSIX
//! character classes (`[[:xdigit:]]` and friends) the SQL surface
//! expects. Searches are unanchored.

use regex::{Regex, RegexBuilder};
use skiffsql_core::error::{Error, Result};

/// Unanchored match with an explicit case-sensitivity flag.
pub fn posix_regex(s: &str, pattern: &str, case_sensitive: bool) -> Result<bool> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| Error::InvalidRegex(e.to_string()))?;
    Ok(regex.is_match(s))
}

/// Replaces every match of `pattern` in `s`.
pub fn regexp_replace(s: &str, pattern: &str, replacement: &str) -> Result<String> {
    regexp_replace_with(s, pattern, replacement, 1, 0, "c")
}

/// Replaces matches starting at the 1-based character position `pos`.
pub fn regexp_replace_from(s: &str, pattern: &str, replacement: &str, pos: i64) -> Result<String> {
    regexp_replace_with(s, pattern, replacement, pos, 0, "c")
}

/// Replaces the `occurrence`-th match (0 = all) starting at `pos`.
pub fn regexp_replace_occurrence(
    s: &str,
    pattern: &str,
    replacement: &str,
    pos: i64,
    occurrence: i64,
) -> Result<String> {
    regexp_replace_with(s, pattern, replacement, pos, occurrence, "c")
}

/// Full replacement form.
///
/// `pos` is the 1-based character position at which matching starts;
/// text before it is passed through untouched. `occurrence` selects
/// the n-th match, 0 replacing all. `match_type` is a flag string:
/// `i` case-insensitive, `c` case-sensitive, `n` lets `.` match
/// newlines, `m` multi-line anchors. The replacement may reference
/// numbered capture groups as `$1`, `$2`, ...
pub fn regexp_replace_with(
    s: &str,
    pattern: &str,
    replacement: &str,
    pos: i64,
    occurrence: i64,
    match_type: &str,
) -> Result<String> {
    if pos < 1 {
        return Err(Error::regexp_replace_input(pos));
    }
    if occurrence < 0 {
        return Err(Error::regexp_replace_input(occurrence));
    }

    let mut builder = RegexBuilder::new(pattern);
    for flag in match_type.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'c' => {
                builder.case_insensitive(false);
            }
            'n' => {
                builder.dot_matches_new_line(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            _ => return Err(Error::regexp_replace_input(match_type)),
        }
    }
    let regex = builder
        .build()
        .map_err(|e| Error::InvalidRegex(e.to_string()))?;

    let start = match char_offset(s, pos) {
        Some(offset) => offset,
        None => return Ok(s.to_string()),
    };
    let (head, tail) = s.split_at(start);
    let replaced = if occurrence == 0 {
        regex.replace_all(tail, replacement).into_owned()
    } else {
        replace_nth(&regex, tail, replacement, occurrence as usize)
    };
    Ok(format!("{}{}", head, replaced))
}

// Byte offset of the 1-based character position, or None past the end.
fn char_offset(s: &str, pos: i64) -> Option<usize> {
    if pos == 1 {
        return Some(0);
    }
    s.char_indices().nth((pos - 1) as usize).map(|(i, _)| i)
}

fn replace_nth(regex: &Regex, s: &str, replacement: &str, occurrence: usize) -> String {
    for (index, caps) in regex.captures_iter(s).enumerate() {
        if index + 1 == occurrence {
            let matched = caps.get(0).expect("capture group 0 always exists");
            let mut expanded = String::new();
            caps.expand(replacement, &mut expanded);
            let mut result = String::with_capacity(s.len());
            result.push_str(&s[..matched.start()]);
            result.push_str(&expanded);
            result.push_str(&s[matched.end()..]);
            return result;
        }
    }
    s.to_string()
}
