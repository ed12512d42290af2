use crate::language::Language;
use crate::node::{Translation, TranslationNode};
use crate::store::{LookupError, TranslationStore};

/// Resolves dotted keys against one language of a store.
///
/// Cheap to copy; UI code receives a fresh one whenever the active
/// language changes.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a TranslationStore,
    language: Language,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(store: &'a TranslationStore, language: Language) -> Self {
        Self { store, language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Resolve a dotted key such as `"experience.boolean.skills"`.
    ///
    /// Never fails: a key that does not lead to a text or list leaf comes
    /// back unchanged as `Translation::Text(key)` and a warning is logged.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Translation {
        match self.store.lookup(self.language, key) {
            Ok(TranslationNode::Text(text)) => Translation::Text(text.clone()),
            Ok(TranslationNode::List(items)) => Translation::List(items.clone()),
            Ok(TranslationNode::Section(_)) => self.miss(
                key,
                &LookupError::NotALeaf {
                    key: key.to_string(),
                },
            ),
            Err(err) => self.miss(key, &err),
        }
    }

    /// Resolve a key expected to hold text.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.resolve(key).into_text()
    }

    /// Resolve a key expected to hold a list.
    #[must_use]
    pub fn list(&self, key: &str) -> Vec<String> {
        self.resolve(key).into_list()
    }

    fn miss(&self, key: &str, err: &LookupError) -> Translation {
        log::warn!(
            "Translation key \"{key}\" not found for language \"{}\": {err}",
            self.language
        );
        Translation::Text(key.to_string())
    }
}
