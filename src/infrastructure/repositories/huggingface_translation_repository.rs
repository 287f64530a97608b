use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRANSLATION_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/nllb-200-distilled-600M";

/// Upper bound on generated tokens sent with every request
const MAX_LENGTH: u32 = 512;

#[derive(Debug, Serialize)]
struct TranslationPayload<'a> {
    inputs: &'a str,
    parameters: TranslationParameters<'a>,
}

#[derive(Debug, Serialize)]
struct TranslationParameters<'a> {
    src_lang: &'a str,
    tgt_lang: &'a str,
    max_length: u32,
}

/// The inference API answers with either a list of outputs or a bare output
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranslationReply {
    Many(Vec<TranslationOutput>),
    One(TranslationOutput),
}

#[derive(Debug, Deserialize)]
struct TranslationOutput {
    #[serde(default)]
    translation_text: Option<String>,
}

impl TranslationReply {
    fn into_text(self) -> String {
        let output = match self {
            TranslationReply::Many(outputs) => outputs.into_iter().next(),
            TranslationReply::One(output) => Some(output),
        };

        output
            .and_then(|o| o.translation_text)
            .unwrap_or_default()
    }
}

fn parse_translation(body: &str) -> Result<String, String> {
    serde_json::from_str::<TranslationReply>(body)
        .map(TranslationReply::into_text)
        .map_err(|e| format!("Failed to parse translation response: {}", e))
}

/// NLLB-200 on the Hugging Face inference API
pub struct HuggingFaceTranslationRepository {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HuggingFaceTranslationRepository {
    pub fn new(http_client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            http_client,
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl TranslationRepository for HuggingFaceTranslationRepository {
    async fn translate(
        &self,
        text: &str,
        source_tag: &str,
        target_tag: &str,
    ) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let payload = TranslationPayload {
            inputs: text,
            parameters: TranslationParameters {
                src_lang: source_tag,
                tgt_lang: target_tag,
                max_length: MAX_LENGTH,
            },
        };

        tracing::debug!(
            api_url = %self.api_url,
            src_lang = source_tag,
            tgt_lang = target_tag,
            text_length = text.len(),
            "Calling translation API"
        );

        let response = self
            .http_client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, api_url = %self.api_url, "Translation API unreachable");
                format!("request failed: {}", e)
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                error = %error_text,
                "Translation API error"
            );
            return Err(error_text);
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read translation response: {}", e))?;
        tracing::debug!(body = %body, "Received translation response");

        let translation = parse_translation(&body)?;

        tracing::info!(
            provider = "huggingface",
            latency_ms = start_time.elapsed().as_millis(),
            translation_length = translation.len(),
            "Translation received"
        );

        Ok(translation)
    }
}
