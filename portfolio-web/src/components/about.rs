use crate::i18n::use_translation;
use yew::prelude::*;

/// Skill name and self-assessed level in percent. Names are not translated.
const SKILLS: [(&str, u8); 8] = [
    ("JavaScript", 90),
    ("React", 85),
    ("Node.js", 80),
    ("MongoDB", 75),
    ("Next.js", 80),
    ("Tailwind CSS", 85),
    ("Git", 80),
    ("Responsive Design", 90),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let i18n = use_translation();
    let skills = SKILLS.iter().map(|(name, level)| {
        html! {
            <li class="skill">
                <span class="skill-name">{ *name }</span>
                <progress max="100" value={level.to_string()} aria-label={*name} />
            </li>
        }
    });
    html! {
        <section id="about" class="about">
            <h2>{ i18n.t("about.title") }</h2>
            <p class="description">{ i18n.t("about.description") }</p>
            <p class="bio">{ i18n.t("about.bio") }</p>
            <h3>{ i18n.t("about.skills") }</h3>
            <ul class="skills">{ for skills }</ul>
        </section>
    }
}
