use crate::i18n::use_translation;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl FormStatus {
    /// Catalog key for the submit button label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Idle => "contact.send",
            Self::Sending => "contact.sending",
            Self::Sent => "contact.success",
            Self::Failed => "contact.error",
        }
    }
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub status: FormStatus,
}

/// Contact form. Submitting only flips the form to `Sent`; nothing leaves the page.
#[function_component(ContactSection)]
pub fn contact_section(p: &Props) -> Html {
    let i18n = use_translation();
    let status = use_state(|| p.status);

    let on_submit = {
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("contact form submitted locally");
            status.set(FormStatus::Sent);
        })
    };

    html! {
        <section id="contact" class="contact">
            <h2>{ i18n.t("contact.title") }</h2>
            <p class="subtitle">{ i18n.t("contact.subtitle") }</p>
            <p class="availability">{ i18n.t("contact.availability") }</p>
            <form class="contact-form" onsubmit={on_submit}>
                <label for="contact-name">{ i18n.t("contact.name") }</label>
                <input id="contact-name" name="name" type="text" required={true} />
                <label for="contact-email">{ i18n.t("contact.email") }</label>
                <input id="contact-email" name="email" type="email" required={true} />
                <label for="contact-message">{ i18n.t("contact.message") }</label>
                <textarea id="contact-message" name="message" rows="5" required={true} />
                <button type="submit" disabled={*status == FormStatus::Sending}
                    data-status={format!("{:?}", *status).to_lowercase()}>
                    { i18n.t(status.label_key()) }
                </button>
            </form>
        </section>
    }
}
