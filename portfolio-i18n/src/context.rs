use crate::config::I18nConfig;
use crate::language::{Language, LanguageMeta, available_languages};
use crate::node::Translation;
use crate::resolve::Resolver;
use crate::storage::PreferenceStore;
use crate::store::TranslationStore;

/// Where the initial language of a session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    Persisted,
    Locale,
    Fallback,
}

/// Owner of the active language for one session.
///
/// `set_language` is the only way to change the language; it updates the
/// in-memory value before persisting, so every resolve after the call sees
/// the new language even when storage is unavailable.
#[derive(Debug, Clone)]
pub struct LanguageContext<'a, S> {
    store: &'a TranslationStore,
    storage: S,
    config: I18nConfig,
    language: Language,
    source: LanguageSource,
}

impl<S: PreferenceStore> LanguageContext<'static, S> {
    /// Start a session over the bundled catalogs with the default config.
    #[must_use]
    pub fn initialize(storage: S, locale_signal: Option<&str>) -> Self {
        Self::initialize_with(
            I18nConfig::default(),
            TranslationStore::builtin(),
            storage,
            locale_signal,
        )
    }
}

impl<'a, S: PreferenceStore> LanguageContext<'a, S> {
    /// Start a session: saved preference first, then the locale signal,
    /// then the configured fallback.
    #[must_use]
    pub fn initialize_with(
        config: I18nConfig,
        store: &'a TranslationStore,
        storage: S,
        locale_signal: Option<&str>,
    ) -> Self {
        let (language, source) = detect_language(&config, &storage, locale_signal);
        log::debug!("initial language {language} ({source:?})");
        Self {
            store,
            storage,
            config,
            language,
            source,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn source(&self) -> LanguageSource {
        self.source
    }

    #[must_use]
    pub const fn config(&self) -> &I18nConfig {
        &self.config
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn available_languages(&self) -> &'static [LanguageMeta] {
        available_languages()
    }

    /// Resolver bound to the current language.
    #[must_use]
    pub const fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.store, self.language)
    }

    #[must_use]
    pub fn resolve(&self, key: &str) -> Translation {
        self.resolver().resolve(key)
    }

    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.resolver().text(key)
    }

    #[must_use]
    pub fn list(&self, key: &str) -> Vec<String> {
        self.resolver().list(key)
    }

    /// Switch to `code` and persist it. Unsupported codes are ignored.
    pub fn set_language(&mut self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.select(language),
            None => log::debug!("ignoring unsupported language code \"{code}\""),
        }
    }

    pub fn select(&mut self, language: Language) {
        self.language = language;
        if let Err(err) = self.storage.save(&self.config.storage_key, language.code()) {
            log::warn!("language preference not persisted: {err}");
        }
    }
}

fn detect_language<S: PreferenceStore>(
    config: &I18nConfig,
    storage: &S,
    locale_signal: Option<&str>,
) -> (Language, LanguageSource) {
    let saved = storage.load(&config.storage_key).unwrap_or_else(|err| {
        log::debug!("saved language unavailable: {err}");
        None
    });
    if let Some(language) = saved.as_deref().and_then(Language::from_code) {
        return (language, LanguageSource::Persisted);
    }
    if let Some(language) = locale_signal.and_then(Language::from_locale_tag) {
        return (language, LanguageSource::Locale);
    }
    (config.fallback, LanguageSource::Fallback)
}
