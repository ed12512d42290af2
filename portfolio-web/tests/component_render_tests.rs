use futures::executor::block_on;
use portfolio_web::app::{App, AppProps};
use portfolio_web::components::contact::{ContactSection, FormStatus, Props as ContactProps};
use portfolio_web::components::experience::ExperienceSection;
use portfolio_web::components::footer::Footer;
use portfolio_web::components::header::Header;
use portfolio_web::components::hero::HeroSection;
use portfolio_web::components::loading_screen::{LoadingScreen, Props as LoadingProps};
use portfolio_web::components::projects::ProjectsSection;
use portfolio_web::i18n::LanguageProvider;
use yew::prelude::*;
use yew::LocalServerRenderer;

fn render_app(locale: &str) -> String {
    let props = AppProps {
        locale: Some(AttrValue::from(locale.to_string())),
    };
    block_on(LocalServerRenderer::<App>::with_props(props).render())
}

#[test]
fn app_renders_italian_for_italian_locale() {
    let html = render_app("it-IT");
    assert!(html.contains("Chi Sono"));
    assert!(html.contains("I Miei Progetti"));
    assert!(html.contains("Invia Messaggio"));
    assert!(html.contains("Caricamento..."));
    assert!(!html.contains("Send Message"));
}

#[test]
fn app_renders_english_for_unsupported_locale() {
    let html = render_app("fr-FR");
    assert!(html.contains("About Me"));
    assert!(html.contains("My Projects"));
    assert!(html.contains("Send Message"));
    assert!(html.contains("id=\"main\""));
}

#[test]
fn header_links_every_section() {
    #[function_component(Harness)]
    fn harness() -> Html {
        html! { <LanguageProvider locale={AttrValue::from("it")}><Header /></LanguageProvider> }
    }
    let html = block_on(LocalServerRenderer::<Harness>::new().render());
    for anchor in ["#hero", "#about", "#projects", "#experience", "#contact"] {
        assert!(html.contains(&format!("href=\"{anchor}\"")), "missing {anchor}");
    }
    assert!(html.contains("Esperienza"));
    assert!(html.contains("language-toggle"));
}

#[test]
fn projects_render_feature_lists() {
    #[function_component(Harness)]
    fn harness() -> Html {
        html! { <LanguageProvider locale={AttrValue::from("en")}><ProjectsSection /></LanguageProvider> }
    }
    let html = block_on(LocalServerRenderer::<Harness>::new().render());
    assert_eq!(html.matches("class=\"project-card\"").count(), 4);
    assert_eq!(html.matches("class=\"more\"").count(), 4);
    assert!(html.contains("TMDB API"));
    assert!(html.contains("Live Demo"));
    assert!(!html.contains("projects.booleanFlix"));
}

#[test]
fn experience_renders_skill_lists_in_order() {
    #[function_component(Harness)]
    fn harness() -> Html {
        html! { <LanguageProvider locale={AttrValue::from("it")}><ExperienceSection /></LanguageProvider> }
    }
    let html = block_on(LocalServerRenderer::<Harness>::new().render());
    assert_eq!(html.matches("class=\"timeline-entry").count(), 3);
    let first = html.find("Algoritmi JavaScript").expect("first skill");
    let second = html.find("Strutture Dati").expect("second skill");
    assert!(first < second);
    assert!(html.contains("Gen 2024 - Giu 2024"));
}

#[test]
fn hero_and_footer_follow_the_provider_language() {
    #[function_component(Harness)]
    fn harness() -> Html {
        html! {
            <LanguageProvider locale={AttrValue::from("en-US")}>
                <HeroSection />
                <Footer />
            </LanguageProvider>
        }
    }
    let html = block_on(LocalServerRenderer::<Harness>::new().render());
    assert!(html.contains("Discover my work"));
    assert!(html.contains("Download CV"));
    assert!(html.contains("Quick Links"));
    assert!(html.contains("Back to top"));
}

#[test]
fn contact_button_reflects_status() {
    #[function_component(Harness)]
    fn harness() -> Html {
        html! {
            <LanguageProvider locale={AttrValue::from("it")}>
                <ContactSection status={FormStatus::Sent} />
            </LanguageProvider>
        }
    }
    let html = block_on(LocalServerRenderer::<Harness>::new().render());
    assert!(html.contains("Messaggio inviato con successo!"));
    assert!(html.contains("data-status=\"sent\""));

    let idle = ContactProps::default();
    assert_eq!(idle.status, FormStatus::Idle);
}

#[test]
fn loading_screen_hides_when_not_visible() {
    let hidden = block_on(
        LocalServerRenderer::<LoadingScreen>::with_props(LoadingProps { visible: false }).render(),
    );
    assert!(!hidden.contains("loading-screen"));
}

#[test]
fn components_without_provider_fall_back_to_english() {
    let html = block_on(LocalServerRenderer::<HeroSection>::new().render());
    assert!(html.contains("Discover my work"));
}
