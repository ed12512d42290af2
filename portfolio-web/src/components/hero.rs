use crate::i18n::use_translation;
use yew::prelude::*;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let i18n = use_translation();
    html! {
        <section id="hero" class="hero">
            <p class="greeting">{ i18n.t("hero.greeting") }</p>
            <h1 class="name">{ i18n.t("hero.name") }</h1>
            <h2 class="title">{ i18n.t("hero.title") }</h2>
            <p class="subtitle">{ i18n.t("hero.subtitle") }</p>
            <div class="actions">
                <a class="btn btn-primary" href="#projects">{ i18n.t("hero.cta") }</a>
                <a class="btn" href="/cv.pdf" download="">{ i18n.t("hero.downloadCV") }</a>
            </div>
        </section>
    }
}
