//! Structural comparison of language catalogs.
//!
//! Catalogs are hand-authored, so a key can exist in one language and not
//! in another. The resolver tolerates that by echoing the key; this module
//! makes the asymmetry visible ahead of time.

use crate::language::Language;
use crate::node::LeafShape;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "defect", rename_all = "snake_case")]
pub enum Defect {
    Missing {
        language: Language,
        key: String,
    },
    Extra {
        language: Language,
        key: String,
    },
    ShapeMismatch {
        language: Language,
        key: String,
        expected: LeafShape,
        found: LeafShape,
    },
}

impl std::fmt::Display for Defect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { language, key } => write!(f, "{language}: missing \"{key}\""),
            Self::Extra { language, key } => write!(f, "{language}: unexpected \"{key}\""),
            Self::ShapeMismatch {
                language,
                key,
                expected,
                found,
            } => write!(f, "{language}: \"{key}\" is {found}, expected {expected}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub reference: Language,
    pub defects: Vec<Defect>,
}

impl ConsistencyReport {
    pub(crate) fn compare(
        reference: Language,
        expected: &BTreeMap<String, LeafShape>,
        others: impl IntoIterator<Item = (Language, BTreeMap<String, LeafShape>)>,
    ) -> Self {
        let mut defects = Vec::new();
        for (language, found) in others {
            for (key, want) in expected {
                match found.get(key) {
                    None => defects.push(Defect::Missing {
                        language,
                        key: key.clone(),
                    }),
                    Some(got) if got != want => defects.push(Defect::ShapeMismatch {
                        language,
                        key: key.clone(),
                        expected: *want,
                        found: *got,
                    }),
                    Some(_) => {}
                }
            }
            defects.extend(
                found
                    .keys()
                    .filter(|key| !expected.contains_key(*key))
                    .map(|key| Defect::Extra {
                        language,
                        key: key.clone(),
                    }),
            );
        }
        Self { reference, defects }
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn log_defects(&self) {
        for defect in &self.defects {
            log::warn!("translation catalog mismatch against {}: {defect}", self.reference);
        }
    }
}
