use gram_core::dictionary::Dictionary;

/// Look for any dictionary key inside `word`, longest substrings first and
/// left to right within a length. Dictionaries are tried in the given order
/// for each substring.
///
/// On a hit the word becomes `before translation after`, with a space only
/// between non-empty parts. Substrings run from one char shorter than the
/// word down to two chars.
pub fn split_compound(word: &str, dictionaries: &[&dyn Dictionary]) -> Option<String> {
    let boundaries: Vec<usize> = word
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(word.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    for len in (2..char_count).rev() {
        for start in 0..=char_count - len {
            let (from, to) = (boundaries[start], boundaries[start + len]);
            let candidate = &word[from..to];

            let Some(translation) = dictionaries.iter().find_map(|d| d.lookup_exact(candidate))
            else {
                continue;
            };

            tracing::debug!("Split {:?} around {:?} -> {:?}", word, candidate, translation);

            let mut parts = Vec::with_capacity(3);
            if from > 0 {
                parts.push(&word[..from]);
            }
            parts.push(translation);
            if to < word.len() {
                parts.push(&word[to..]);
            }
            return Some(parts.join(" "));
        }
    }

    None
}
