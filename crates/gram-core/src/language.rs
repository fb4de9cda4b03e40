use unicode_normalization::UnicodeNormalization;

use crate::segment::{self, Segment};

/// A writing system, described by the code point ranges it occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script {
    pub name: &'static str,
    ranges: &'static [(char, char)],
}

impl Script {
    pub const fn new(name: &'static str, ranges: &'static [(char, char)]) -> Self {
        Self { name, ranges }
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
    }
}

/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "mr", "hi", etc.)
    fn language_code(&self) -> &str;

    /// Script the language's dictionary keys are written in
    fn script(&self) -> &Script;

    /// Canonical composition (NFC), so equivalent spellings compare equal
    fn normalize(&self, text: &str) -> String {
        text.nfc().collect()
    }

    /// Break text into words and separators
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        segment::segment(text)
    }

    /// Whether `text` holds at least one character of this language's script
    fn is_native(&self, text: &str) -> bool {
        let script = self.script();
        text.chars().any(|c| script.contains(c))
    }
}
