use crate::components::NAV_SECTIONS;
use crate::components::language_selector::LanguageSelector;
use crate::i18n::use_translation;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let i18n = use_translation();
    let links = NAV_SECTIONS.iter().map(|(anchor, key)| {
        html! {
            <li><a href={format!("#{anchor}")}>{ i18n.t(key) }</a></li>
        }
    });
    html! {
        <header role="banner" class="site-header">
            <a href="#hero" class="brand">{ i18n.t("hero.name") }</a>
            <nav aria-label="primary">
                <ul class="nav-links">{ for links }</ul>
            </nav>
            <LanguageSelector />
        </header>
    }
}
