use crate::language::{FALLBACK_LANGUAGE, Language};
use serde::{Deserialize, Serialize};

/// Storage key for the saved language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "preferred-language";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub storage_key: String,
    pub fallback: Language,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            storage_key: LANGUAGE_STORAGE_KEY.to_string(),
            fallback: FALLBACK_LANGUAGE,
        }
    }
}
