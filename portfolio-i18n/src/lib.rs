//! Portfolio translations
//!
//! Platform-agnostic translation core for the portfolio site: the bundled
//! Italian/English catalogs, the active-language state and the dotted-key
//! resolver. UI crates inject a [`PreferenceStore`] and the browser locale.

pub mod config;
pub mod consistency;
pub mod context;
pub mod language;
pub mod node;
pub mod resolve;
pub mod storage;
pub mod store;

pub use config::{I18nConfig, LANGUAGE_STORAGE_KEY};
pub use consistency::{ConsistencyReport, Defect};
pub use context::{LanguageContext, LanguageSource};
pub use language::{
    AVAILABLE_LANGUAGES, FALLBACK_LANGUAGE, Language, LanguageMeta, UnsupportedLanguage,
    available_languages,
};
pub use node::{LeafShape, Translation, TranslationNode};
pub use resolve::Resolver;
pub use storage::{MemoryStore, PreferenceStore, StorageError, UnavailableStore};
pub use store::{CatalogError, LookupError, TranslationStore};
