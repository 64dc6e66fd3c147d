//! Course code normalization
//!
//! Handbook codes carry their credit value as the last character, and some
//! credit values are written with Greek letters (`MAT121β`, `CSC113α`). The
//! portal and hand-typed input are inconsistent about case, spacing and
//! whether the Greek letter or its Latin stand-in is used, so every lookup
//! goes through [`normalize`] first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed Greek → Latin substitutions for credit-suffix characters.
///
/// One Greek letter maps to exactly one Latin letter. Uppercase Greek forms
/// are folded to lowercase before this table is consulted.
const GREEK_CREDIT_SUFFIXES: [(char, char); 4] = [
    ('\u{03b1}', 'a'), // α
    ('\u{03b2}', 'b'), // β
    ('\u{03b4}', 'd'), // δ
    ('\u{03b5}', 'e'), // ε
];

/// Map a single (already lowercased) character through the suffix table.
fn latinize(ch: char) -> char {
    GREEK_CREDIT_SUFFIXES
        .iter()
        .find(|(greek, _)| *greek == ch)
        .map_or(ch, |(_, latin)| *latin)
}

/// Normalize a raw course code: lowercase, whitespace removed, Greek credit
/// suffixes replaced by their Latin letters.
///
/// Never fails; empty input yields an empty string.
///
/// # Examples
/// ```
/// use degree_progress::core::models::code::normalize;
///
/// assert_eq!(normalize("MAT 121β"), "mat121b");
/// assert_eq!(normalize("csc113α"), "csc113a");
/// ```
#[must_use]
pub fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(latinize)
        .collect()
}

/// A course code that has already been normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedCode(String);

impl NormalizedCode {
    /// Normalize `raw` and wrap it
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// Borrow the normalized form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code starts with any of the given department prefixes.
    ///
    /// Prefixes are compared in normalized form, so `"CSC"` matches `csc1113`.
    #[must_use]
    pub fn has_prefix(&self, prefixes: &[&str]) -> bool {
        prefixes
            .iter()
            .any(|prefix| self.0.starts_with(&normalize(prefix)))
    }

    /// The first ASCII digit of the code, which encodes the year level
    #[must_use]
    pub fn year_digit(&self) -> Option<char> {
        self.0.chars().find(char::is_ascii_digit)
    }
}

impl From<&str> for NormalizedCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for NormalizedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
