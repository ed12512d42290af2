use crate::dom;
use portfolio_i18n::{
    Language, LanguageContext, LanguageMeta, PreferenceStore, StorageError, Translation,
};
use std::rc::Rc;
use yew::prelude::*;

/// `localStorage`-backed preference storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        #[cfg(target_arch = "wasm32")]
        {
            storage
                .get_item(key)
                .map_err(|err| StorageError::Backend(dom::js_error_message(&err)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (storage, key);
            Err(StorageError::Unavailable)
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        #[cfg(target_arch = "wasm32")]
        {
            storage
                .set_item(key, value)
                .map_err(|err| StorageError::Backend(dom::js_error_message(&err)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (storage, key, value);
            Err(StorageError::Unavailable)
        }
    }
}

pub type SiteLanguageContext = LanguageContext<'static, BrowserStore>;

/// Reducer state behind [`LanguageProvider`].
#[derive(Debug, Clone)]
pub struct LanguageState {
    context: Rc<SiteLanguageContext>,
}

impl LanguageState {
    #[must_use]
    pub fn new(context: SiteLanguageContext) -> Self {
        Self {
            context: Rc::new(context),
        }
    }

    /// Start a session; `locale` overrides `navigator.language`.
    #[must_use]
    pub fn initialize(locale: Option<&str>) -> Self {
        let detected = match locale {
            Some(tag) => Some(tag.to_string()),
            None => dom::navigator_language(),
        };
        Self::new(LanguageContext::initialize(BrowserStore, detected.as_deref()))
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.context.language()
    }
}

impl Reducible for LanguageState {
    type Action = String;

    fn reduce(self: Rc<Self>, code: Self::Action) -> Rc<Self> {
        let mut next = (*self.context).clone();
        next.set_language(&code);
        if next.language() == self.context.language() {
            return self;
        }
        Rc::new(Self::new(next))
    }
}

/// Handle shared with every component through Yew context.
///
/// Holds the current language snapshot and the single mutation entry point.
#[derive(Clone)]
pub struct I18n {
    context: Rc<SiteLanguageContext>,
    select: Callback<String>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.context, &other.context)
    }
}

impl I18n {
    #[must_use]
    pub fn new(state: &LanguageState, select: Callback<String>) -> Self {
        Self {
            context: state.context.clone(),
            select,
        }
    }

    /// Read-only handle used when no provider is mounted.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(
            &LanguageState::initialize(None),
            Callback::from(|code: String| {
                log::warn!("language change to \"{code}\" ignored: no LanguageProvider mounted");
            }),
        )
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.context.language()
    }

    #[must_use]
    pub fn available_languages(&self) -> &'static [LanguageMeta] {
        self.context.available_languages()
    }

    #[must_use]
    pub fn resolve(&self, key: &str) -> Translation {
        self.context.resolve(key)
    }

    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.context.text(key)
    }

    #[must_use]
    pub fn list(&self, key: &str) -> Vec<String> {
        self.context.list(key)
    }

    pub fn set_language(&self, code: &str) {
        self.select.emit(code.to_string());
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    /// Locale tag to use instead of `navigator.language`.
    #[prop_or_default]
    pub locale: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(p: &LanguageProviderProps) -> Html {
    let locale = p.locale.clone();
    let state = use_reducer(move || LanguageState::initialize(locale.as_deref()));

    use_effect_with(state.language(), |lang| {
        dom::set_document_lang(lang.code());
        || {}
    });

    let select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |code: String| dispatcher.dispatch(code))
    };
    let i18n = I18n::new(&state, select);

    html! {
        <ContextProvider<I18n> context={i18n}>
            { p.children.clone() }
        </ContextProvider<I18n>>
    }
}

/// Access the translation handle from any component below [`LanguageProvider`].
#[hook]
pub fn use_translation() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| {
        log::error!("use_translation must be used within a LanguageProvider");
        I18n::detached()
    })
}
