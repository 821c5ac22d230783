use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// An immutable, ordered sequence of 8-bit units.
///
/// Equality is byte-sequence equality; ordering is unsigned
/// lexicographic, with a proper prefix ordering before the longer
/// value. The backing allocation is shared, so `clone` and the
/// empty-operand `concat` shortcut are O(1) and allocation-free.
#[derive(Clone)]
pub struct ByteString {
    bytes: Arc<[u8]>,
}

impl ByteString {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parses hexadecimal text, two digits per byte, case-insensitive.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() % 2 != 0 {
            return Err(Error::OddHexLength);
        }
        let mut bytes = Vec::with_capacity(s.len() / 2);
        let mut digits = s.chars();
        while let (Some(hi), Some(lo)) = (digits.next(), digits.next()) {
            bytes.push(hex_digit(hi)? << 4 | hex_digit(lo)?);
        }
        Ok(Self::new(bytes))
    }

    /// Decodes standard base64 text. Whitespace is tolerated anywhere
    /// in the input, as produced by line-wrapping encoders.
    pub fn from_base64(s: &str) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD
            .decode(cleaned.as_bytes())
            .map_err(|e| Error::invalid_query(format!("Invalid base64 string: {}", e)))?;
        Ok(Self::new(bytes))
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Renders as a digit string: radix 16 gives two lowercase hex
    /// digits per byte, radix 2 gives eight binary digits per byte.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        match radix {
            16 => Ok(hex::encode(self.as_bytes())),
            2 => {
                let mut out = String::with_capacity(self.len() * 8);
                for byte in self.as_bytes() {
                    out.push_str(&format!("{:08b}", byte));
                }
                Ok(out)
            }
            _ => Err(Error::invalid_query(format!(
                "unsupported radix for BYTES rendering: {}",
                radix
            ))),
        }
    }

    /// Half-open byte slice `[start, end)`.
    pub fn substring(&self, start: usize, end: usize) -> Result<Self> {
        if start > end || end > self.len() {
            return Err(Error::byte_range(start, end, self.len()));
        }
        Ok(Self::new(self.bytes[start..end].to_vec()))
    }

    /// Concatenation. When one side is empty the other side is
    /// returned sharing its allocation, so identity-comparing callers
    /// can skip copies; see [`ByteString::ptr_eq`].
    pub fn concat(&self, other: &ByteString) -> ByteString {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend_from_slice(self.as_bytes());
        bytes.extend_from_slice(other.as_bytes());
        Self::new(bytes)
    }

    /// Whether two values share the same backing allocation.
    pub fn ptr_eq(a: &ByteString, b: &ByteString) -> bool {
        Arc::ptr_eq(&a.bytes, &b.bytes)
    }

    /// First offset at which `needle` occurs as a contiguous
    /// subsequence, or -1. The empty needle matches at offset 0, even
    /// in an empty haystack.
    pub fn index_of(&self, needle: &ByteString) -> i64 {
        self.index_of_from(needle, 0)
    }

    /// As [`ByteString::index_of`], starting the search at `from`.
    pub fn index_of_from(&self, needle: &ByteString, from: usize) -> i64 {
        let haystack = self.as_bytes();
        let sought = needle.as_bytes();
        if from > haystack.len() {
            return -1;
        }
        if sought.is_empty() {
            return from as i64;
        }
        if sought.len() > haystack.len() - from {
            return -1;
        }
        for i in from..=haystack.len() - sought.len() {
            if &haystack[i..i + sought.len()] == sought {
                return i as i64;
            }
        }
        -1
    }

    /// Lazily splits on non-overlapping, left-to-right occurrences of
    /// `delimiter`. The iterator is finite and holds only the current
    /// search position; calling `split` again restarts from the start.
    pub fn split<'a>(&'a self, delimiter: &'a ByteString) -> Split<'a> {
        Split {
            haystack: self,
            delimiter,
            position: 0,
            done: false,
        }
    }
}

fn hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(Error::InvalidHexCharacter(c))
}

/// Iterator returned by [`ByteString::split`].
///
/// An empty input yields nothing; an empty delimiter yields the whole
/// input once; a leading or trailing delimiter yields a leading or
/// trailing empty piece.
pub struct Split<'a> {
    haystack: &'a ByteString,
    delimiter: &'a ByteString,
    position: usize,
    done: bool,
}

impl Iterator for Split<'_> {
    type Item = ByteString;

    fn next(&mut self) -> Option<ByteString> {
        if self.done {
            return None;
        }
        if self.haystack.is_empty() {
            self.done = true;
            return None;
        }
        if self.delimiter.is_empty() {
            self.done = true;
            return Some(self.haystack.clone());
        }
        match self.haystack.index_of_from(self.delimiter, self.position) {
            -1 => {
                self.done = true;
                Some(ByteString::new(
                    self.haystack.as_bytes()[self.position..].to_vec(),
                ))
            }
            at => {
                let at = at as usize;
                let piece = ByteString::new(self.haystack.as_bytes()[self.position..at].to_vec());
                self.position = at + self.delimiter.len();
                Some(piece)
            }
        }
    }
}

impl Default for ByteString {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl std::hash::Hash for ByteString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_bytes()))
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b'{}'", hex::encode(self.as_bytes()))
    }
}

impl Serialize for ByteString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

struct ByteStringVisitor;

impl<'de> Visitor<'de> for ByteStringVisitor {
    type Value = ByteString;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a byte sequence")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<ByteString, E> {
        Ok(ByteString::from(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> std::result::Result<ByteString, E> {
        Ok(ByteString::new(v))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> std::result::Result<ByteString, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(ByteString::new(bytes))
    }
}

impl<'de> Deserialize<'de> for ByteString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_byte_buf(ByteStringVisitor)
    }
}
