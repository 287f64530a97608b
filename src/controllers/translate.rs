use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::translation::{
        TranslationRequest, TranslationService, TranslationServiceApi, DEFAULT_SOURCE_LANG,
        DEFAULT_TARGET_LANG,
    },
    error::{AppError, AppResult},
    infrastructure::middleware::RequestId,
};

/// Request for POST /translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
}

/// Response for POST /translate. Language fields carry the resolved NLLB tags.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub audio: String,
    pub source_lang: String,
    pub target_lang: String,
}

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /translate - Translate text and return it with spoken audio
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        Extension(request_id): Extension<RequestId>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> AppResult<Json<TranslateResponse>> {
        let body = parse_body(payload).map_err(|reason| {
            tracing::debug!(request_id = %request_id.0, reason = %reason, "Unusable translate body");
            AppError::BadRequest("No data received".to_string())
        })?;

        tracing::debug!(request_id = %request_id.0, "Received translation request");

        let request = TranslationRequest::new(
            body.text.unwrap_or_default(),
            body.source_lang
                .unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string()),
            body.target_lang
                .unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string()),
        );

        let result = controller
            .translation_service
            .translate(request)
            .await
            .map_err(AppError::from)?;

        Ok(Json(TranslateResponse {
            translation: result.translation,
            audio: base64::engine::general_purpose::STANDARD.encode(&result.audio),
            source_lang: result.resolved_source_tag,
            target_lang: result.resolved_target_tag,
        }))
    }
}

/// Decode the body, treating empty JSON (`{}`, `[]`, `null`, ...) as no data
fn parse_body(payload: Result<Json<Value>, JsonRejection>) -> Result<TranslateRequest, String> {
    let Json(value) = payload.map_err(|rejection| rejection.to_string())?;

    if is_empty_value(&value) {
        return Err("empty body".to_string());
    }
    if !value.is_object() {
        return Err("body is not a JSON object".to_string());
    }

    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
