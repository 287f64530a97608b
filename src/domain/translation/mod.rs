pub mod artifact;
pub mod error;
pub mod language;
pub mod service;

pub use artifact::TemporaryAudioArtifact;
pub use error::TranslationError;
pub use language::{LanguageCodeTable, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};
pub use service::{TranslationResult, TranslationService, TranslationServiceApi};

/// One translate-and-speak request, already unpacked from the HTTP body
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}
