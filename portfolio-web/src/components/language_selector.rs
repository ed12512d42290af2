use crate::i18n::use_translation;
use portfolio_i18n::{Language, LanguageMeta};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LanguageOptionsProps {
    pub active: Language,
    pub languages: &'static [LanguageMeta],
    pub on_select: Callback<Language>,
}

/// The open dropdown: one entry per language, active one marked.
#[function_component(LanguageOptions)]
pub fn language_options(p: &LanguageOptionsProps) -> Html {
    let items = p.languages.iter().map(|meta| {
        let active = meta.language == p.active;
        let on_click = {
            let cb = p.on_select.clone();
            let language = meta.language;
            Callback::from(move |_: MouseEvent| cb.emit(language))
        };
        html! {
            <li role="option" aria-selected={active.to_string()} data-lang={meta.code}
                class={classes!("language-option", active.then_some("active"))}>
                <button type="button" onclick={on_click}>
                    <span class="flag">{ meta.flag }</span>
                    <span class="name">{ meta.name }</span>
                    if active {
                        <span class="check" aria-hidden="true">{ "✓" }</span>
                    }
                </button>
            </li>
        }
    });
    html! {
        <ul class="language-options" role="listbox">
            { for items }
        </ul>
    }
}

#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let i18n = use_translation();
    let open = use_state(|| false);
    let current = i18n.language().meta();

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let on_select = {
        let open = open.clone();
        let i18n = i18n.clone();
        Callback::from(move |language: Language| {
            i18n.set_language(language.code());
            open.set(false);
        })
    };

    html! {
        <div class="language-selector">
            <button type="button" class="language-toggle" onclick={toggle}
                aria-haspopup="listbox" aria-expanded={open.to_string()}
                aria-label={i18n.t("common.language")}>
                <span class="flag">{ current.flag }</span>
                <span class="code">{ current.code }</span>
            </button>
            if *open {
                <LanguageOptions active={i18n.language()} languages={i18n.available_languages()} {on_select} />
                <div class="language-overlay" onclick={close} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageProvider;
    use futures::executor::block_on;
    use portfolio_i18n::available_languages;
    use yew::LocalServerRenderer;

    #[test]
    fn options_mark_active_language() {
        let props = LanguageOptionsProps {
            active: Language::It,
            languages: available_languages(),
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LanguageOptions>::with_props(props).render());
        assert!(html.contains("Italiano"));
        assert!(html.contains("English"));
        assert_eq!(html.matches("✓").count(), 1);
        let it_pos = html.find("data-lang=\"it\"").expect("it option");
        let check_pos = html.find("✓").expect("check mark");
        let en_pos = html.find("data-lang=\"en\"").expect("en option");
        assert!(it_pos < check_pos && check_pos < en_pos);
    }

    #[test]
    fn selector_starts_closed_with_active_flag() {
        #[function_component(Harness)]
        fn harness() -> Html {
            html! {
                <LanguageProvider locale={AttrValue::from("it-IT")}>
                    <LanguageSelector />
                </LanguageProvider>
            }
        }
        let html = block_on(LocalServerRenderer::<Harness>::new().render());
        assert!(html.contains("🇮🇹"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("aria-label=\"Lingua\""));
        assert!(!html.contains("language-options"));
    }
}
