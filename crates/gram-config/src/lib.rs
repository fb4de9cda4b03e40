use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::{LogConfig, LogFormat};
use self::store::StoreConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod log;
pub mod store;
pub mod translator;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub dictionary: DictionaryConfig,
    pub store: StoreConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied.
    pub fn new() -> Self {
        Self::default().with_env()
    }

    pub fn with_env(self) -> Self {
        self.with_env_from(|key| env::var(key).ok())
    }

    /// Applies `GRAM_*` and `LOG_*` overrides read through `lookup`.
    /// Unparseable values leave the current setting untouched.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("GRAM_SOURCE_LANG").filter(|v| !v.trim().is_empty()) {
            self.translator.source_lang = v.trim().to_string();
        }
        if let Some(v) = lookup("GRAM_TARGET_LANG").filter(|v| !v.trim().is_empty()) {
            self.translator.target_lang = v.trim().to_string();
        }
        if let Some(window) = lookup("GRAM_PHRASE_WINDOW")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|w| *w >= 1)
        {
            self.translator.phrase_window = window;
        }
        if let Some(flag) = lookup("GRAM_NORMALIZE_UNICODE").and_then(|v| parse_flag(&v)) {
            self.translator.normalize_unicode = flag;
        }

        if let Some(flag) = lookup("GRAM_STORE_ENABLED").and_then(|v| parse_flag(&v)) {
            self.store.enabled = flag;
        }
        if let Some(dir) = lookup("GRAM_STORE_DIR").filter(|v| !v.trim().is_empty()) {
            self.store.dir = Some(dir);
        }
        if let Some(ns) = lookup("GRAM_STORE_NAMESPACE").filter(|v| !v.trim().is_empty()) {
            self.store.namespace = ns.trim().to_string();
        }

        if let Some(level) = lookup("LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            self.log.level = level.trim().to_string();
        }
        if let Some(format) = lookup("LOG_FORMAT").and_then(|v| LogFormat::parse(v.trim())) {
            self.log.format = format;
        }

        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
