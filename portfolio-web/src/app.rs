use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::HeroSection;
use crate::components::loading_screen::LoadingScreen;
use crate::components::projects::ProjectsSection;
use crate::i18n::LanguageProvider;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    /// Locale tag overriding `navigator.language`, e.g. from a server render.
    #[prop_or_default]
    pub locale: Option<AttrValue>,
}

#[function_component(App)]
pub fn app(p: &AppProps) -> Html {
    html! {
        <LanguageProvider locale={p.locale.clone()}>
            <Page />
        </LanguageProvider>
    }
}

#[function_component(Page)]
fn page() -> Html {
    let loading = use_state(|| true);
    {
        let loading = loading.clone();
        use_effect_with((), move |()| {
            loading.set(false);
            || {}
        });
    }

    html! {
        <>
            <LoadingScreen visible={*loading} />
            <Header />
            <main id="main" role="main">
                <HeroSection />
                <AboutSection />
                <ProjectsSection />
                <ExperienceSection />
                <ContactSection />
            </main>
            <Footer />
        </>
    }
}
