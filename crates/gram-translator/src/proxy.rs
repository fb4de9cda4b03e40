//! Wire shape of the remote translation proxy.
//!
//! The proxy itself is a stateless forwarder to a cloud API and lives
//! outside this workspace. These types let a local [`Translator`] answer
//! the same requests.

use serde::{Deserialize, Serialize};

use crate::{LanguageCode, Translator};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source_language: LanguageCode,
    #[serde(default)]
    pub target_language: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    pub source_language: LanguageCode,
    pub target_language: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },
}

impl From<&TranslateError> for ErrorResponse {
    fn from(err: &TranslateError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl TranslateRequest {
    pub fn validate(&self) -> Result<(), TranslateError> {
        if self.text.trim().is_empty() {
            return Err(TranslateError::MissingField("text"));
        }
        if self.source_language.is_empty() {
            return Err(TranslateError::MissingField("sourceLanguage"));
        }
        if self.target_language.is_empty() {
            return Err(TranslateError::MissingField("targetLanguage"));
        }
        Ok(())
    }

    /// Answer the request with a local translator
    pub fn answer<T: Translator + ?Sized>(
        &self,
        translator: &T,
    ) -> Result<TranslateResponse, TranslateError> {
        self.validate()?;

        let (from, to) = (&self.source_language, &self.target_language);
        let supported = from == to
            || translator
                .supported_languages()
                .iter()
                .any(|(f, t)| f == from && t == to);
        if !supported {
            return Err(TranslateError::UnsupportedLanguagePair {
                from: from.clone(),
                to: to.clone(),
            });
        }

        Ok(TranslateResponse {
            translated_text: translator.translate(&self.text, from, to),
            source_language: from.clone(),
            target_language: to.clone(),
        })
    }
}
