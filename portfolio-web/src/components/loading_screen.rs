use crate::i18n::use_translation;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(p: &Props) -> Html {
    let i18n = use_translation();
    if !p.visible {
        return html! {};
    }
    html! {
        <div class="loading-screen" role="status" aria-live="polite">
            <span class="initials">{ "MV" }</span>
            <p>{ i18n.t("common.loading") }</p>
        </div>
    }
}
