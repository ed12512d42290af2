use crate::i18n::{I18n, use_translation};
use yew::prelude::*;

/// Catalog id under `projects.*` and the cover image for each card.
pub const PROJECTS: [(&str, &str); 4] = [
    (
        "booleanFlix",
        "https://images.unsplash.com/photo-1489599994951-0ad6bfa27e65?w=600&h=400&fit=crop",
    ),
    (
        "foodDelivery",
        "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=600&h=400&fit=crop",
    ),
    (
        "portfolioV1",
        "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=600&h=400&fit=crop",
    ),
    (
        "taskManager",
        "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop",
    ),
];

/// Feature chips shown on a card before collapsing into "+N".
const VISIBLE_FEATURES: usize = 3;

fn project_card(i18n: &I18n, id: &str, image: &'static str) -> Html {
    let title = i18n.t(&format!("projects.{id}.title"));
    let features = i18n.list(&format!("projects.{id}.features"));
    let hidden = features.len().saturating_sub(VISIBLE_FEATURES);
    html! {
        <article class="project-card" data-project={id.to_string()}>
            <img src={image} alt={title.clone()} loading="lazy" />
            <h3>{ title }</h3>
            <p>{ i18n.t(&format!("projects.{id}.description")) }</p>
            <ul class="features">
                { for features.iter().take(VISIBLE_FEATURES).map(|f| html! { <li>{ f.clone() }</li> }) }
                if hidden > 0 {
                    <li class="more">{ format!("+{hidden}") }</li>
                }
            </ul>
            <div class="links">
                <a href="#" class="live">{ i18n.t("projects.liveDemo") }</a>
                <a href="#" class="code">{ i18n.t("projects.viewCode") }</a>
            </div>
        </article>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let i18n = use_translation();
    html! {
        <section id="projects" class="projects">
            <h2>{ i18n.t("projects.title") }</h2>
            <p class="subtitle">{ i18n.t("projects.subtitle") }</p>
            <div class="project-grid">
                { for PROJECTS.iter().map(|&(id, image)| project_card(&i18n, id, image)) }
            </div>
        </section>
    }
}
