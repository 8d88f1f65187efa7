//! Canonical identity keys for free-text author names.
//!
//! `"Martin Pražák"`, `"martin.prazak"` and `"MARTIN_PRAZAK"` all map to
//! `"martinprazak"`: accents are folded, case is dropped, and every
//! character outside the Unicode letter and number categories (whitespace
//! and combining marks included) is removed.

use regex::Regex;
use std::collections::HashMap;

#[rustfmt::skip]
const DIACRITICS: &[(char, char)] = &[
    ('á', 'a'), ('à', 'a'), ('â', 'a'), ('ä', 'a'), ('ā', 'a'), ('ã', 'a'), ('å', 'a'), ('ą', 'a'), ('ă', 'a'),
    ('é', 'e'), ('è', 'e'), ('ê', 'e'), ('ë', 'e'), ('ē', 'e'), ('ę', 'e'), ('ě', 'e'),
    ('í', 'i'), ('ì', 'i'), ('î', 'i'), ('ï', 'i'), ('ī', 'i'), ('ı', 'i'),
    ('ó', 'o'), ('ò', 'o'), ('ô', 'o'), ('ö', 'o'), ('ō', 'o'), ('õ', 'o'), ('ő', 'o'), ('ø', 'o'),
    ('ú', 'u'), ('ù', 'u'), ('û', 'u'), ('ü', 'u'), ('ū', 'u'), ('ů', 'u'), ('ű', 'u'),
    ('ý', 'y'), ('ÿ', 'y'),
    ('ñ', 'n'), ('ň', 'n'), ('ń', 'n'),
    ('ç', 'c'), ('č', 'c'), ('ć', 'c'),
    ('š', 's'), ('ś', 's'), ('ş', 's'),
    ('ž', 'z'), ('ź', 'z'), ('ż', 'z'),
    ('ř', 'r'), ('ď', 'd'), ('ť', 't'), ('ľ', 'l'), ('ĺ', 'l'), ('ł', 'l'), ('ğ', 'g'),
    ('Á', 'A'), ('À', 'A'), ('Â', 'A'), ('Ä', 'A'), ('Ā', 'A'), ('Ã', 'A'), ('Å', 'A'), ('Ą', 'A'), ('Ă', 'A'),
    ('É', 'E'), ('È', 'E'), ('Ê', 'E'), ('Ë', 'E'), ('Ē', 'E'), ('Ę', 'E'), ('Ě', 'E'),
    ('Í', 'I'), ('Ì', 'I'), ('Î', 'I'), ('Ï', 'I'), ('Ī', 'I'), ('İ', 'I'),
    ('Ó', 'O'), ('Ò', 'O'), ('Ô', 'O'), ('Ö', 'O'), ('Ō', 'O'), ('Õ', 'O'), ('Ő', 'O'), ('Ø', 'O'),
    ('Ú', 'U'), ('Ù', 'U'), ('Û', 'U'), ('Ü', 'U'), ('Ū', 'U'), ('Ů', 'U'), ('Ű', 'U'),
    ('Ý', 'Y'), ('Ÿ', 'Y'),
    ('Ñ', 'N'), ('Ň', 'N'), ('Ń', 'N'),
    ('Ç', 'C'), ('Č', 'C'), ('Ć', 'C'),
    ('Š', 'S'), ('Ś', 'S'), ('Ş', 'S'),
    ('Ž', 'Z'), ('Ź', 'Z'), ('Ż', 'Z'),
    ('Ř', 'R'), ('Ď', 'D'), ('Ť', 'T'), ('Ľ', 'L'), ('Ĺ', 'L'), ('Ł', 'L'), ('Ğ', 'G'),
];

#[derive(Debug, Clone)]
pub struct NameNormalizer {
    table: HashMap<char, char>,
    separators: Regex,
}

impl NameNormalizer {
    pub fn new() -> Self {
        Self {
            table: DIACRITICS.iter().copied().collect(),
            separators: Regex::new(r"[^\p{L}\p{N}]+").expect("valid regex"),
        }
    }

    /// Map a raw author name onto its canonical key. Total: the empty
    /// string maps to itself.
    pub fn normalize(&self, raw: &str) -> String {
        let folded: String = raw
            .chars()
            .map(|c| self.table.get(&c).copied().unwrap_or(c))
            .collect();

        self.separators
            .replace_all(&folded.to_lowercase(), "")
            .into_owned()
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// How a raw author name becomes an aggregation key.
#[derive(Debug, Clone)]
pub enum KeyPolicy {
    /// The raw string is the identity.
    Exact,
    Normalized(NameNormalizer),
}

impl KeyPolicy {
    pub fn from_flag(normalize: bool) -> Self {
        if normalize {
            KeyPolicy::Normalized(NameNormalizer::new())
        } else {
            KeyPolicy::Exact
        }
    }

    pub fn key(&self, raw: &str) -> String {
        match self {
            KeyPolicy::Exact => raw.to_string(),
            KeyPolicy::Normalized(n) => n.normalize(raw),
        }
    }
}
