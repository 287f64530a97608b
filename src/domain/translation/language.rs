use std::collections::HashMap;

/// NLLB tag used when the source language is not in the table
pub const DEFAULT_SOURCE_TAG: &str = "eng_Latn";
/// NLLB tag used when the target language is not in the table
pub const DEFAULT_TARGET_TAG: &str = "spa_Latn";

pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "es";

/// ISO 639-1 codes accepted at the API boundary and their NLLB-200 tags
const NLLB_TAGS: &[(&str, &str)] = &[
    ("en", "eng_Latn"),
    ("es", "spa_Latn"),
    ("fr", "fra_Latn"),
    ("de", "deu_Latn"),
    ("it", "ita_Latn"),
    ("pt", "por_Latn"),
    ("nl", "nld_Latn"),
    ("pl", "pol_Latn"),
    ("ru", "rus_Cyrl"),
    ("ja", "jpn_Jpan"),
    ("zh", "zho_Hans"),
    ("ar", "ara_Arab"),
    ("ko", "kor_Hang"),
    ("hi", "hin_Deva"),
    ("tr", "tur_Latn"),
];

/// Read-only mapping from ISO 639-1 codes to NLLB tags.
///
/// Built once at startup and shared behind an `Arc`; never mutated.
#[derive(Debug, Clone)]
pub struct LanguageCodeTable {
    tags: HashMap<&'static str, &'static str>,
}

impl LanguageCodeTable {
    pub fn nllb() -> Self {
        Self {
            tags: NLLB_TAGS.iter().copied().collect(),
        }
    }

    /// Exact lookup, `None` when the code is unknown
    pub fn get(&self, iso_code: &str) -> Option<&'static str> {
        self.tags.get(iso_code).copied()
    }

    /// Resolve a source language, falling back to English
    pub fn resolve_source(&self, iso_code: &str) -> &'static str {
        self.resolve(iso_code, DEFAULT_SOURCE_TAG)
    }

    /// Resolve a target language, falling back to Spanish
    pub fn resolve_target(&self, iso_code: &str) -> &'static str {
        self.resolve(iso_code, DEFAULT_TARGET_TAG)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn resolve(&self, iso_code: &str, fallback: &'static str) -> &'static str {
        match self.get(iso_code) {
            Some(tag) => tag,
            None => {
                // Unknown codes are accepted and silently mapped; keep it visible in logs.
                tracing::warn!(
                    language = iso_code,
                    fallback = fallback,
                    "Unknown language code, using default NLLB tag"
                );
                fallback
            }
        }
    }
}

impl Default for LanguageCodeTable {
    fn default() -> Self {
        Self::nllb()
    }
}
