use std::collections::HashMap;
use std::sync::Arc;

use gram_config::dictionary::DictionaryConfig;
use gram_config::translator::TranslatorConfig;
use gram_core::store::{LearnedEntries, LearnedStore};
use gram_translator::{
    DictionaryTranslator, LanguageCode, ProviderMetadata, Translator, TranslatorOptions,
};

use crate::loader::MarathiLoader;
use crate::processor::MarathiProcessor;

/// Marathi → English translator over the built-in Gram Panchayat vocabulary
pub struct MarathiTranslator {
    inner: DictionaryTranslator<MarathiProcessor>,
}

impl MarathiTranslator {
    /// Built-in tables with default options
    pub fn new(store: Arc<dyn LearnedStore>) -> Self {
        Self::from_config(&TranslatorConfig::default(), &DictionaryConfig::default(), store)
    }

    pub fn from_config(
        translator: &TranslatorConfig,
        dictionary: &DictionaryConfig,
        store: Arc<dyn LearnedStore>,
    ) -> Self {
        let base = MarathiLoader::load_base(&dictionary.additional_paths);
        let fragments = MarathiLoader::load_fragments();

        let options = TranslatorOptions {
            name: "marathi-dictionary".to_string(),
            source_lang: translator.source_lang.clone(),
            target_lang: translator.target_lang.clone(),
            phrase_window: translator.phrase_window.max(1),
            normalize_unicode: translator.normalize_unicode,
        };

        Self {
            inner: DictionaryTranslator::new(MarathiProcessor, base, fragments, store, options),
        }
    }

    pub fn learned_translations(&self) -> LearnedEntries {
        self.inner.learned_translations()
    }

    pub fn options(&self) -> &TranslatorOptions {
        self.inner.options()
    }
}

impl Translator for MarathiTranslator {
    fn translate(&self, text: &str, from: &str, to: &str) -> String {
        self.inner.translate(text, from, to)
    }

    fn learn_word(&self, source: &str, target: &str) -> bool {
        self.inner.learn_word(source, target)
    }

    fn all_translations(&self) -> HashMap<String, String> {
        self.inner.all_translations()
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        self.inner.supported_languages()
    }

    fn metadata(&self) -> ProviderMetadata {
        self.inner.metadata()
    }
}
