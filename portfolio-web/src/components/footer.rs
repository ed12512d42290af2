use crate::components::NAV_SECTIONS;
use crate::i18n::use_translation;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_translation();
    let links = NAV_SECTIONS.iter().map(|(anchor, key)| {
        html! { <li><a href={format!("#{anchor}")}>{ i18n.t(key) }</a></li> }
    });
    html! {
        <footer class="site-footer">
            <p class="tagline">{ i18n.t("footer.tagline") }</p>
            <nav aria-label={i18n.t("footer.quickLinks")}>
                <h4>{ i18n.t("footer.quickLinks") }</h4>
                <ul>{ for links }</ul>
            </nav>
            <h4>{ i18n.t("footer.social") }</h4>
            <p class="copyright">{ i18n.t("footer.copyright") }</p>
            <a href="#hero" class="back-to-top">{ i18n.t("common.backToTop") }</a>
        </footer>
    }
}
