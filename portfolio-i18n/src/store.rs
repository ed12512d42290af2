use crate::consistency::ConsistencyReport;
use crate::language::{FALLBACK_LANGUAGE, Language};
use crate::node::{LeafShape, TranslationNode};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use thiserror::Error;

const CATALOG_TABLE: &[(Language, &str)] = &[
    (Language::It, include_str!("../i18n/it.json")),
    (Language::En, include_str!("../i18n/en.json")),
];

static EMPTY_SECTION: TranslationNode = TranslationNode::Section(BTreeMap::new());

static BUILTIN: Lazy<TranslationStore> = Lazy::new(|| {
    let store = TranslationStore::from_catalogs(CATALOG_TABLE.iter().copied()).unwrap_or_else(|err| {
        log::error!("bundled translation catalogs failed to load: {err}");
        TranslationStore::empty()
    });
    store.check_consistency(FALLBACK_LANGUAGE).log_defects();
    store
});

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {language} catalog: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
    #[error("{language} catalog must be a JSON object at the top level")]
    RootNotSection { language: Language },
    #[error("no catalog supplied for {language}")]
    MissingLanguage { language: Language },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("empty translation key")]
    EmptyKey,
    #[error("\"{key}\" stops at missing entry \"{segment}\"")]
    MissingSegment { key: String, segment: String },
    #[error("\"{key}\" names a section, not a text or list")]
    NotALeaf { key: String },
}

/// Immutable catalog of every supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStore {
    catalogs: BTreeMap<Language, TranslationNode>,
}

impl TranslationStore {
    /// Catalogs compiled into the binary, parsed on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a store from one JSON document per language.
    ///
    /// # Errors
    ///
    /// Returns an error if a document fails to parse, is not an object at
    /// the top level, or a supported language has no document.
    pub fn from_catalogs<'a>(
        sources: impl IntoIterator<Item = (Language, &'a str)>,
    ) -> Result<Self, CatalogError> {
        let mut catalogs = BTreeMap::new();
        for (language, json) in sources {
            let root: TranslationNode = serde_json::from_str(json)
                .map_err(|source| CatalogError::Parse { language, source })?;
            if !root.is_section() {
                return Err(CatalogError::RootNotSection { language });
            }
            catalogs.insert(language, root);
        }
        if let Some(language) = Language::ALL
            .into_iter()
            .find(|lang| !catalogs.contains_key(lang))
        {
            return Err(CatalogError::MissingLanguage { language });
        }
        Ok(Self { catalogs })
    }

    fn empty() -> Self {
        Self {
            catalogs: Language::ALL
                .into_iter()
                .map(|lang| (lang, EMPTY_SECTION.clone()))
                .collect(),
        }
    }

    #[must_use]
    pub fn root(&self, language: Language) -> &TranslationNode {
        self.catalogs.get(&language).unwrap_or(&EMPTY_SECTION)
    }

    /// Walk `key` segment by segment from the language root.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty, a segment is missing, or the
    /// path ends on a section instead of a leaf.
    pub fn lookup(&self, language: Language, key: &str) -> Result<&TranslationNode, LookupError> {
        if key.is_empty() {
            return Err(LookupError::EmptyKey);
        }
        let mut current = self.root(language);
        for segment in key.split('.') {
            current = current
                .child(segment)
                .ok_or_else(|| LookupError::MissingSegment {
                    key: key.to_string(),
                    segment: segment.to_string(),
                })?;
        }
        if current.is_section() {
            return Err(LookupError::NotALeaf {
                key: key.to_string(),
            });
        }
        Ok(current)
    }

    /// Every leaf of one language keyed by its dotted path.
    #[must_use]
    pub fn leaf_keys(&self, language: Language) -> BTreeMap<String, LeafShape> {
        let mut out = BTreeMap::new();
        self.root(language).collect_leaves("", &mut out);
        out
    }

    /// Compare every language tree against `reference`.
    #[must_use]
    pub fn check_consistency(&self, reference: Language) -> ConsistencyReport {
        let expected = self.leaf_keys(reference);
        let others = Language::ALL
            .into_iter()
            .filter(|lang| *lang != reference)
            .map(|lang| (lang, self.leaf_keys(lang)));
        ConsistencyReport::compare(reference, &expected, others)
    }
}
