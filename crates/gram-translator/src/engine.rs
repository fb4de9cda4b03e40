use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gram_core::dictionary::{Dictionary, PhraseTable};
use gram_core::language::LanguageProcessor;
use gram_core::segment::{Segment, strip_punctuation};
use gram_core::store::{LearnedEntries, LearnedStore};

use crate::compound::split_compound;
use crate::{LanguageCode, ProviderMetadata, Translator};

#[derive(Debug, Clone)]
pub struct TranslatorOptions {
    pub name: String,
    pub source_lang: LanguageCode,
    pub target_lang: LanguageCode,
    /// Longest run of consecutive words looked up as a single phrase.
    /// 1 matches word by word only.
    pub phrase_window: usize,
    /// NFC-normalize table keys and input before matching
    pub normalize_unicode: bool,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            name: "dictionary".to_string(),
            source_lang: "mr".to_string(),
            target_lang: "en".to_string(),
            phrase_window: 1,
            normalize_unicode: false,
        }
    }
}

struct Tables {
    /// base ∪ learned, first writer wins
    effective: PhraseTable,
    learned: LearnedEntries,
}

/// Dictionary translator over a base phrase table, a fragment table and a
/// learned table persisted through a [`LearnedStore`].
pub struct DictionaryTranslator<P> {
    processor: P,
    options: TranslatorOptions,
    fragments: PhraseTable,
    tables: RwLock<Tables>,
    store: Arc<dyn LearnedStore>,
}

impl<P: LanguageProcessor> DictionaryTranslator<P> {
    pub fn new(
        processor: P,
        base: PhraseTable,
        fragments: PhraseTable,
        store: Arc<dyn LearnedStore>,
        options: TranslatorOptions,
    ) -> Self {
        let (mut effective, fragments) = if options.normalize_unicode {
            (
                base.map_keys(|k| processor.normalize(k)),
                fragments.map_keys(|k| processor.normalize(k)),
            )
        } else {
            (base, fragments)
        };

        let learned = store.load().unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load learned translations from {}: {}",
                store.location(),
                e
            );
            LearnedEntries::new()
        });

        let mut merged = 0;
        for (source, target) in &learned {
            let key = if options.normalize_unicode {
                processor.normalize(source)
            } else {
                source.clone()
            };
            if effective.insert_if_absent(&key, target) {
                merged += 1;
            }
        }
        if merged < learned.len() {
            tracing::debug!(
                "{} learned entries shadowed by existing phrases",
                learned.len() - merged
            );
        }

        tracing::info!(
            "{}: {} phrases ({} learned), {} fragments, {} -> {}",
            options.name,
            effective.len(),
            merged,
            fragments.len(),
            options.source_lang,
            options.target_lang
        );

        Self {
            processor,
            options,
            fragments,
            tables: RwLock::new(Tables { effective, learned }),
            store,
        }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    /// Snapshot of the learned table alone
    pub fn learned_translations(&self) -> LearnedEntries {
        self.read_tables().learned.clone()
    }

    fn read_tables(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tables(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.normalize_unicode {
            Cow::Owned(self.processor.normalize(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Try the longest run of words (up to `phrase_window`) starting at the
    /// head of `rest` as one phrase. Runs stop at any non-space separator.
    fn match_phrase_window(
        &self,
        effective: &PhraseTable,
        rest: &[Segment<'_>],
    ) -> Option<(usize, String)> {
        if self.options.phrase_window < 2 || !rest.first().is_some_and(Segment::is_word) {
            return None;
        }

        let mut word_ends = Vec::with_capacity(self.options.phrase_window);
        for (idx, segment) in rest.iter().enumerate() {
            match segment {
                Segment::Word(_) => {
                    word_ends.push(idx + 1);
                    if word_ends.len() == self.options.phrase_window {
                        break;
                    }
                }
                Segment::Separator(sep) if !sep.trim().is_empty() => break,
                Segment::Separator(_) => {}
            }
        }

        for &end in word_ends.iter().skip(1).rev() {
            let span: String = rest[..end].iter().map(Segment::as_str).collect();
            let stripped = strip_punctuation(&span);
            if let Some(hit) = effective.lookup_exact(stripped.core) {
                tracing::debug!("Phrase window match {:?} -> {:?}", stripped.core, hit);
                return Some((end, stripped.reattach(hit)));
            }
        }

        None
    }

    fn translate_word(&self, effective: &PhraseTable, word: &str) -> String {
        let stripped = strip_punctuation(word);
        let core = stripped.core;
        if core.is_empty() {
            return word.to_string();
        }

        let replacement = if let Some(hit) = effective.lookup_exact(core) {
            hit.to_string()
        } else if let Some(hit) = self.fragments.lookup_exact(core) {
            hit.to_string()
        } else if !self.processor.is_native(core) {
            core.to_string()
        } else if let Some(entry) = effective.longest_overlap(core) {
            tracing::debug!("Compound match {:?} in {:?}", entry.source, core);
            // A key longer than the word has no span to replace, leaving it as is
            core.replacen(entry.source, entry.target, 1)
        } else {
            let dictionaries: [&dyn Dictionary; 2] = [effective, &self.fragments];
            split_compound(core, &dictionaries).unwrap_or_else(|| core.to_string())
        };

        stripped.reattach(&replacement)
    }
}

impl<P: LanguageProcessor> Translator for DictionaryTranslator<P> {
    fn translate(&self, text: &str, from: &str, to: &str) -> String {
        if text.is_empty() || from == to {
            return text.to_string();
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return text.to_string();
        }

        let prepared = self.prepare(trimmed);
        let tables = self.read_tables();

        if let Some(hit) = tables.effective.lookup_exact(&prepared) {
            return hit.to_string();
        }

        let segments = self.processor.tokenize(&prepared);
        let mut output = String::with_capacity(prepared.len());
        let mut changed = false;
        let mut idx = 0;

        while idx < segments.len() {
            if let Some((consumed, phrase)) =
                self.match_phrase_window(&tables.effective, &segments[idx..])
            {
                output.push_str(&phrase);
                changed = true;
                idx += consumed;
                continue;
            }

            match segments[idx] {
                Segment::Separator(sep) => output.push_str(sep),
                Segment::Word(word) => {
                    let replacement = self.translate_word(&tables.effective, word);
                    changed |= replacement != word;
                    output.push_str(&replacement);
                }
            }
            idx += 1;
        }

        if changed {
            output
        } else {
            text.to_string()
        }
    }

    fn learn_word(&self, source: &str, target: &str) -> bool {
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            return false;
        }
        let key = self.prepare(source).into_owned();

        // Check, insert and persist under one write lock
        let mut tables = self.write_tables();
        if !tables.effective.insert_if_absent(&key, target) {
            tracing::debug!("Ignoring learn for known phrase {:?}", key);
            return false;
        }
        tables.learned.insert(key.clone(), target.to_string());

        if let Err(e) = self.store.save(&tables.learned) {
            tracing::warn!(
                "Failed to persist learned translation {:?} to {}: {}",
                key,
                self.store.location(),
                e
            );
        }

        tracing::info!("Learned {:?} -> {:?}", key, target);
        true
    }

    fn all_translations(&self) -> HashMap<String, String> {
        self.read_tables().effective.to_map()
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        vec![(
            self.options.source_lang.clone(),
            self.options.target_lang.clone(),
        )]
    }

    fn metadata(&self) -> ProviderMetadata {
        let tables = self.read_tables();
        ProviderMetadata {
            name: self.options.name.clone(),
            source_lang: self.options.source_lang.clone(),
            target_lang: self.options.target_lang.clone(),
            phrase_count: tables.effective.len(),
            learned_count: tables.learned.len(),
            fragment_count: self.fragments.len(),
        }
    }
}
