use base64::Engine;
use serde_json::Value;

/// Check the success body shape and return the decoded audio
pub fn assert_translation_response(
    body: &Value,
    expected_translation: &str,
    expected_source_tag: &str,
    expected_target_tag: &str,
) -> Vec<u8> {
    assert_eq!(
        body.get("translation").and_then(|v| v.as_str()),
        Some(expected_translation)
    );
    assert_eq!(
        body.get("source_lang").and_then(|v| v.as_str()),
        Some(expected_source_tag)
    );
    assert_eq!(
        body.get("target_lang").and_then(|v| v.as_str()),
        Some(expected_target_tag)
    );

    let audio = body
        .get("audio")
        .and_then(|v| v.as_str())
        .expect("Missing audio field");
    assert!(!audio.is_empty(), "Audio field is empty");

    base64::engine::general_purpose::STANDARD
        .decode(audio)
        .expect("Audio field is not valid base64")
}

/// Check the NLLB tags and options the translation provider received
pub fn assert_translation_payload(payload: &Value, text: &str, src_lang: &str, tgt_lang: &str) {
    assert_eq!(
        payload,
        &serde_json::json!({
            "inputs": text,
            "parameters": {
                "src_lang": src_lang,
                "tgt_lang": tgt_lang,
                "max_length": 512
            }
        })
    );
}
