use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the hosted translation model behind the pipeline.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` between two NLLB tags (e.g. `eng_Latn` -> `spa_Latn`)
    ///
    /// Returns the provider's translation text, which may be empty when the
    /// provider produced nothing usable.
    ///
    /// # Errors
    /// Returns the remote error text when the provider answers with a
    /// non-success status or cannot be reached
    async fn translate(
        &self,
        text: &str,
        source_tag: &str,
        target_tag: &str,
    ) -> Result<String, String>;
}
