use serde::{Deserialize, Serialize};

fn default_source_lang() -> String {
    "mr".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

fn default_phrase_window() -> usize {
    1
}

fn default_normalize_unicode() -> bool {
    false
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Longest run of words looked up as one phrase; 1 translates word by word
    #[serde(default = "default_phrase_window")]
    pub phrase_window: usize,
    /// NFC-normalize dictionary keys and input before matching
    #[serde(default = "default_normalize_unicode")]
    pub normalize_unicode: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            phrase_window: default_phrase_window(),
            normalize_unicode: default_normalize_unicode(),
        }
    }
}
