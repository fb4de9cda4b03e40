use gram_core::language::{LanguageProcessor, Script};

/// Devanagari block, including the danda and double danda
pub const DEVANAGARI: Script = Script::new("Devanagari", &[('\u{0900}', '\u{097F}')]);

/// Marathi language processor
#[derive(Debug, Clone, Copy, Default)]
pub struct MarathiProcessor;

impl MarathiProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for MarathiProcessor {
    fn language_code(&self) -> &str {
        "mr"
    }

    fn script(&self) -> &Script {
        &DEVANAGARI
    }
}
