use super::artifact::TemporaryAudioArtifact;
use super::error::TranslationError;
use super::language::LanguageCodeTable;
use super::TranslationRequest;
use crate::infrastructure::repositories::{TranslationRepository, TtsRepository};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub translation: String,
    pub audio: Vec<u8>,
    pub resolved_source_tag: String,
    pub resolved_target_tag: String,
}

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    languages: Arc<LanguageCodeTable>,
    audio_dir: Option<PathBuf>,
}

impl TranslationService {
    pub fn new(
        translation_repo: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        languages: Arc<LanguageCodeTable>,
        audio_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            translation_repo,
            tts_repo,
            languages,
            audio_dir,
        }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text and voice the result
    ///
    /// This operation:
    /// - Rejects empty text
    /// - Maps ISO codes to NLLB tags (unknown codes fall back to en/es)
    /// - Calls the translation provider, then the speech provider
    /// - Round-trips the audio through a temporary file that is always removed
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslationError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        // 1. Validate
        if request.text.is_empty() {
            return Err(TranslationError::InvalidInput(
                "No text provided".to_string(),
            ));
        }

        // 2. Resolve NLLB tags
        let source_tag = self.languages.resolve_source(&request.source_lang);
        let target_tag = self.languages.resolve_target(&request.target_lang);

        tracing::info!(
            source_lang = %request.source_lang,
            target_lang = %request.target_lang,
            source_tag = source_tag,
            target_tag = target_tag,
            text_length = request.text.len(),
            "Translation request"
        );

        // 3. Translate
        let translation = self.call_translation(&request.text, source_tag, target_tag).await?;

        // 4. Synthesize speech in the target language
        let audio = self
            .tts_repo
            .synthesize(&translation, &request.target_lang)
            .await
            .map_err(TranslationError::SpeechSynthesis)?;

        // 5. Park the audio on disk and read it back
        let audio = self.round_trip_audio(&audio).await?;

        tracing::info!(
            translation_length = translation.len(),
            audio_size = audio.len(),
            "Translation completed"
        );

        Ok(TranslationResult {
            translation,
            audio,
            resolved_source_tag: source_tag.to_string(),
            resolved_target_tag: target_tag.to_string(),
        })
    }
}

impl TranslationService {
    async fn call_translation(
        &self,
        text: &str,
        source_tag: &str,
        target_tag: &str,
    ) -> Result<String, TranslationError> {
        let translation = self
            .translation_repo
            .translate(text, source_tag, target_tag)
            .await
            .map_err(TranslationError::TranslationService)?;

        if translation.is_empty() {
            tracing::warn!(
                source_tag = source_tag,
                target_tag = target_tag,
                "Translation provider returned no text"
            );
            return Err(TranslationError::EmptyTranslation);
        }

        Ok(translation)
    }

    async fn round_trip_audio(&self, audio: &[u8]) -> Result<Vec<u8>, TranslationError> {
        let artifact = TemporaryAudioArtifact::create(self.audio_dir.as_deref(), audio).await?;
        let contents = artifact.read().await;
        artifact.close();
        Ok(contents?)
    }
}
