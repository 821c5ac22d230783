//! Plain string functions.

pub fn char_length(s: &str) -> i64 {
    s.chars().count() as i64
}

pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Capitalizes the first character of each word and lowercases the
/// rest. ASCII letters and digits are word characters; anything else
/// ends the word.
pub fn initcap(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub fn concat(s0: &str, s1: &str) -> String {
    format!("{}{}", s0, s1)
}

/// Trims characters contained in `seek` from the selected ends.
pub fn trim(left: bool, right: bool, seek: &str, s: &str) -> String {
    let mut out = s;
    if left {
        out = out.trim_start_matches(|c: char| seek.contains(c));
    }
    if right {
        out = out.trim_end_matches(|c: char| seek.contains(c));
    }
    out.to_string()
}

pub fn ltrim(s: &str) -> String {
    s.trim_start_matches(' ').to_string()
}

pub fn rtrim(s: &str) -> String {
    s.trim_end_matches(' ').to_string()
}

/// The smaller operand; an absent operand loses, two absent operands
/// yield absent.
pub fn lesser<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b < a { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

/// The larger operand; an absent operand loses, two absent operands
/// yield absent.
pub fn greater<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b > a { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Splits on non-overlapping, left-to-right occurrences of
/// `delimiter`. An empty input yields no pieces; an empty delimiter
/// yields the whole input once.
pub fn split(s: &str, delimiter: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![s.to_string()];
    }
    s.split(delimiter).map(str::to_string).collect()
}
