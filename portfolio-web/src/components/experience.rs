use crate::i18n::{I18n, use_translation};
use yew::prelude::*;

const EDUCATION: [&str; 1] = ["boolean"];
const CERTIFICATIONS: [&str; 2] = ["responsive", "javascript"];

fn skill_list(i18n: &I18n, id: &str) -> Html {
    html! {
        <ul class="skills">
            { for i18n.list(&format!("experience.{id}.skills")).into_iter().map(|s| html! { <li>{ s }</li> }) }
        </ul>
    }
}

fn education_entry(i18n: &I18n, id: &str) -> Html {
    html! {
        <li class="timeline-entry education" data-entry={id.to_string()}>
            <h4>{ i18n.t(&format!("experience.{id}.title")) }</h4>
            <span class="period">{ i18n.t(&format!("experience.{id}.period")) }</span>
            <p>{ i18n.t(&format!("experience.{id}.description")) }</p>
            { skill_list(i18n, id) }
        </li>
    }
}

fn certification_entry(i18n: &I18n, id: &str) -> Html {
    html! {
        <li class="timeline-entry certification" data-entry={id.to_string()}>
            <h4>{ i18n.t(&format!("experience.{id}.title")) }</h4>
            <span class="issuer">{ i18n.t(&format!("experience.{id}.issuer")) }</span>
            <span class="date">{ i18n.t(&format!("experience.{id}.date")) }</span>
            { skill_list(i18n, id) }
        </li>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    let i18n = use_translation();
    html! {
        <section id="experience" class="experience">
            <h2>{ i18n.t("experience.title") }</h2>
            <p class="subtitle">{ i18n.t("experience.subtitle") }</p>
            <h3>{ i18n.t("experience.education") }</h3>
            <ul class="timeline">
                { for EDUCATION.iter().map(|id| education_entry(&i18n, id)) }
            </ul>
            <h3>{ i18n.t("experience.certifications") }</h3>
            <ul class="timeline">
                { for CERTIFICATIONS.iter().map(|id| certification_entry(&i18n, id)) }
            </ul>
        </section>
    }
}
