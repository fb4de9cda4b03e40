/// Characters that split text into words on top of whitespace.
/// Hyphen variants, comma and the Devanagari danda.
pub const SEPARATORS: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', ',', '\u{0964}',
];

/// Punctuation peeled off both ends of a word before lookup
pub const EDGE_PUNCTUATION: &[char] = &[
    '.', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}', '…', '\u{0965}', '“',
    '”', '‘', '’',
];

/// A piece of segmented text, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Word(&'a str),
    /// A whitespace run or a single separator character
    Separator(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Word(s) | Segment::Separator(s) => *s,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Segment::Word(_))
    }
}

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Split text into words and separators, keeping every separator so that
/// concatenating the segments reproduces the input exactly.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !c.is_whitespace() && !is_separator(c) {
            word_start.get_or_insert(idx);
            continue;
        }

        if let Some(start) = word_start.take() {
            segments.push(Segment::Word(&text[start..idx]));
        }

        let mut end = idx + c.len_utf8();
        if c.is_whitespace() {
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
        }
        segments.push(Segment::Separator(&text[idx..end]));
    }

    if let Some(start) = word_start {
        segments.push(Segment::Word(&text[start..]));
    }

    segments
}

/// A word with its edge punctuation split off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stripped<'a> {
    pub leading: &'a str,
    pub core: &'a str,
    pub trailing: &'a str,
}

impl Stripped<'_> {
    /// Put the punctuation back around a replacement for `core`
    pub fn reattach(&self, replacement: &str) -> String {
        format!("{}{}{}", self.leading, replacement, self.trailing)
    }
}

pub fn strip_punctuation(word: &str) -> Stripped<'_> {
    let rest = word.trim_start_matches(EDGE_PUNCTUATION);
    let leading = &word[..word.len() - rest.len()];
    let core = rest.trim_end_matches(EDGE_PUNCTUATION);
    let trailing = &rest[core.len()..];

    Stripped {
        leading,
        core,
        trailing,
    }
}
