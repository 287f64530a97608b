use super::tts_repository::TtsRepository;
use async_trait::async_trait;

pub const DEFAULT_TTS_API_URL: &str = "https://translate.google.com/translate_tts";

/// Google Translate TTS rejects requests above 100 characters
const MAX_BATCH_SIZE: usize = 100;

/// Google Translate text-to-speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    api_url: String,
}

impl GoogleTtsRepository {
    pub fn new(http_client: reqwest::Client, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }

    /// Map an ISO 639-1 code to the `tl` value the endpoint expects
    fn language_param(language: &str) -> &str {
        match language {
            "zh" => "zh-CN",
            other => other,
        }
    }

    /// Split text into batches of at most MAX_BATCH_SIZE characters,
    /// breaking on whitespace and hard-splitting words that are too long
    fn split_into_batches(text: &str) -> Vec<String> {
        let mut batches = Vec::new();
        let mut current_batch = String::new();
        let mut current_len = 0;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();

            // Scripts without spaces (or absurdly long tokens) get cut by characters
            if word_len > MAX_BATCH_SIZE {
                if !current_batch.is_empty() {
                    batches.push(std::mem::take(&mut current_batch));
                    current_len = 0;
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(MAX_BATCH_SIZE) {
                    batches.push(chunk.iter().collect());
                }
                continue;
            }

            let needed = if current_batch.is_empty() {
                word_len
            } else {
                current_len + 1 + word_len
            };

            if needed > MAX_BATCH_SIZE {
                batches.push(std::mem::take(&mut current_batch));
                current_batch.push_str(word);
                current_len = word_len;
            } else {
                if !current_batch.is_empty() {
                    current_batch.push(' ');
                }
                current_batch.push_str(word);
                current_len = needed;
            }
        }

        if !current_batch.is_empty() {
            batches.push(current_batch);
        }

        batches
    }

    /// Fetch MP3 audio for a single batch
    async fn call_google(
        &self,
        text: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        let idx = index.to_string();
        let total = total.to_string();
        let textlen = text.chars().count().to_string();

        tracing::debug!(
            language = language,
            batch_index = index,
            text_length = text.len(),
            "Calling Google TTS"
        );

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", language),
                ("client", "tw-ob"),
                ("ttsspeed", "1"),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = language, "Google TTS request failed");
                format!("Google TTS request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                language = language,
                error = %error_text,
                "Google TTS returned an error"
            );
            return Err(format!(
                "TTS service returned {} for language '{}': {}",
                status.as_u16(),
                language,
                error_text
            ));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read TTS audio: {}", e))?;

        if audio.is_empty() {
            return Err("TTS service returned no audio".to_string());
        }

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let language = Self::language_param(language);

        let batches = Self::split_into_batches(text);
        if batches.is_empty() {
            return Err("No text to synthesize".to_string());
        }

        tracing::info!(
            language = language,
            batch_count = batches.len(),
            text_length = text.len(),
            "Starting Google TTS synthesis"
        );

        // MP3 frames concatenate cleanly, so batches are merged in order
        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self
                .call_google(batch, language, index, batches.len())
                .await?;
            merged_audio.extend(audio_data);
        }

        tracing::info!(
            provider = "google",
            language = language,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
