use std::collections::HashMap;

pub mod compound;
pub mod engine;
pub mod proxy;


pub use engine::{DictionaryTranslator, TranslatorOptions};
pub use proxy::{ErrorResponse, TranslateError, TranslateRequest, TranslateResponse};

pub type LanguageCode = String;

/// Translation provider interface.
///
/// Translation is best effort: parts without a known translation are left
/// in place, so none of these operations fail.
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    fn translate(&self, text: &str, from: &str, to: &str) -> String;

    /// Translate each text independently, preserving order and length
    fn translate_batch<S: AsRef<str>>(&self, texts: &[S], from: &str, to: &str) -> Vec<String>
    where
        Self: Sized,
    {
        texts
            .iter()
            .map(|text| self.translate(text.as_ref(), from, to))
            .collect()
    }

    /// Teach a new translation. Returns false when either side is blank or
    /// the source is already known.
    fn learn_word(&self, source: &str, target: &str) -> bool;

    /// Same as [`Translator::learn_word`]
    fn add_translation(&self, source: &str, target: &str) -> bool {
        self.learn_word(source, target)
    }

    /// Snapshot of every phrase the translator can match exactly
    fn all_translations(&self) -> HashMap<String, String>;

    /// Get supported language pairs
    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub source_lang: LanguageCode,
    pub target_lang: LanguageCode,
    pub phrase_count: usize,
    pub learned_count: usize,
    pub fragment_count: usize,
}
