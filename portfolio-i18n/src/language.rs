use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Languages the site ships a catalog for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    It,
    En,
}

/// Language adopted when neither a saved preference nor the browser locale matches.
pub const FALLBACK_LANGUAGE: Language = Language::En;

impl Language {
    pub const ALL: [Self; 2] = [Self::It, Self::En];

    /// Two-letter code used in catalogs and persisted preferences.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::It => "it",
            Self::En => "en",
        }
    }

    /// Exact match against a persisted or user-selected code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Match the primary subtag of a BCP-47-like tag such as `it-IT` or `en_us`.
    ///
    /// Only the primary subtag is inspected, case-insensitively.
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }

    /// Descriptor entry for this language.
    #[must_use]
    pub fn meta(self) -> &'static LanguageMeta {
        match self {
            Self::It => &AVAILABLE_LANGUAGES[0],
            Self::En => &AVAILABLE_LANGUAGES[1],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code \"{0}\"")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMeta {
    pub language: Language,
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub const AVAILABLE_LANGUAGES: &[LanguageMeta] = &[
    LanguageMeta {
        language: Language::It,
        code: "it",
        name: "Italiano",
        flag: "🇮🇹",
    },
    LanguageMeta {
        language: Language::En,
        code: "en",
        name: "English",
        flag: "🇺🇸",
    },
];

/// Supported languages in selector order.
#[must_use]
pub const fn available_languages() -> &'static [LanguageMeta] {
    AVAILABLE_LANGUAGES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_exactly() {
        assert_eq!(Language::from_code("it"), Some(Language::It));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn locale_tags_use_primary_subtag() {
        assert_eq!(Language::from_locale_tag("it-IT"), Some(Language::It));
        assert_eq!(Language::from_locale_tag("IT"), Some(Language::It));
        assert_eq!(Language::from_locale_tag("en_GB"), Some(Language::En));
        assert_eq!(Language::from_locale_tag("fr-FR"), None);
        assert_eq!(Language::from_locale_tag(""), None);
        assert_eq!(Language::from_locale_tag("iten"), None);
    }

    #[test]
    fn descriptor_matches_enum_order() {
        let codes: Vec<_> = available_languages().iter().map(|m| m.code).collect();
        assert_eq!(codes, ["it", "en"]);
        for lang in Language::ALL {
            assert_eq!(lang.meta().language, lang);
            assert_eq!(lang.meta().code, lang.code());
        }
        assert_eq!(Language::It.meta().flag, "🇮🇹");
    }
}
