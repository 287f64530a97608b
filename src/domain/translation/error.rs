use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Translation API error: {0}")]
    TranslationService(String),
    #[error("No translation generated")]
    EmptyTranslation,
    #[error("Speech synthesis error: {0}")]
    SpeechSynthesis(String),
    #[error("Audio file error: {0}")]
    AudioArtifact(#[from] std::io::Error),
}

impl From<TranslationError> for AppError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::InvalidInput(msg) => AppError::BadRequest(msg),
            TranslationError::TranslationService(_)
            | TranslationError::EmptyTranslation
            | TranslationError::SpeechSynthesis(_) => AppError::ExternalService(err.to_string()),
            TranslationError::AudioArtifact(_) => AppError::Internal(err.to_string()),
        }
    }
}
