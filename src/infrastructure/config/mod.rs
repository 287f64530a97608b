use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::infrastructure::repositories::google_tts_repository::DEFAULT_TTS_API_URL;
use crate::infrastructure::repositories::huggingface_translation_repository::DEFAULT_TRANSLATION_API_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    // Translation provider
    pub huggingface_api_key: String,
    pub translation_api_url: String,
    // Speech provider
    pub tts_api_url: String,
    // Applies to every outbound call
    pub outbound_timeout_secs: u64,
    // Where temporary audio files live; system temp dir when unset
    pub audio_temp_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            huggingface_api_key: env::var("HUGGINGFACE_API_KEY")
                .map_err(|_| "HUGGINGFACE_API_KEY must be set")?,
            translation_api_url: env::var("TRANSLATION_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATION_API_URL.to_string()),
            tts_api_url: env::var("TTS_API_URL").unwrap_or_else(|_| DEFAULT_TTS_API_URL.to_string()),
            outbound_timeout_secs: env::var("OUTBOUND_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            audio_temp_dir: env::var("AUDIO_TEMP_DIR")
                .ok()
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        };

        Ok(config)
    }
}
