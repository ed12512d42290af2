use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of a language catalog.
///
/// Catalogs are plain JSON: strings and string arrays are leaves, objects
/// are sections that nest further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Text(String),
    List(Vec<String>),
    Section(BTreeMap<String, TranslationNode>),
}

/// Shape of a leaf, used when comparing catalogs across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "len", rename_all = "lowercase")]
pub enum LeafShape {
    Text,
    List(usize),
}

impl std::fmt::Display for LeafShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::List(len) => write!(f, "list[{len}]"),
        }
    }
}

impl TranslationNode {
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Section(children) => children.get(segment),
            Self::Text(_) | Self::List(_) => None,
        }
    }

    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }

    /// `None` for sections.
    #[must_use]
    pub fn shape(&self) -> Option<LeafShape> {
        match self {
            Self::Text(_) => Some(LeafShape::Text),
            Self::List(items) => Some(LeafShape::List(items.len())),
            Self::Section(_) => None,
        }
    }

    /// Walk the subtree and record every leaf under its dotted key.
    pub fn collect_leaves(&self, prefix: &str, out: &mut BTreeMap<String, LeafShape>) {
        match self {
            Self::Section(children) => {
                for (name, child) in children {
                    let next = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    child.collect_leaves(&next, out);
                }
            }
            leaf => {
                if let Some(shape) = leaf.shape() {
                    out.insert(prefix.to_string(), shape);
                }
            }
        }
    }
}

/// A resolved translation.
///
/// Callers match on the variant they expect for a given key; a missing key
/// always comes back as `Text` holding the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Translation {
    Text(String),
    List(Vec<String>),
}

impl Translation {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }

    /// Lists are joined with `", "`.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::List(items) => items.join(", "),
        }
    }

    /// Text becomes a one-element list.
    #[must_use]
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![text],
            Self::List(items) => items,
        }
    }
}

impl std::fmt::Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}
