//! Contact form with inline submission status.

use leptos::prelude::*;

use crate::content::EMAIL;
use crate::state::contact::{ContactField, ContactState, SubmitStatus};
use crate::util::liveness::Liveness;

fn status_class(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Idle => "contact__status",
        SubmitStatus::Loading => "contact__status contact__status--loading",
        SubmitStatus::Success => "contact__status contact__status--success",
        SubmitStatus::Error => "contact__status contact__status--error",
    }
}

#[component]
pub fn ContactForm(contact: RwSignal<ContactState>) -> impl IntoView {
    let live = Liveness::new();
    {
        let live = live.clone();
        on_cleanup(move || live.retire());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(message) = contact.try_update(ContactState::begin_submit).flatten() else {
            return;
        };
        let live = live.clone();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_contact(message).await;
            if live.is_alive() {
                contact.update(|c| c.finish(&outcome));
            }
        });
    };

    let busy = move || contact.get().status == SubmitStatus::Loading;

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Contact"</h2>
            <p class="contact__intro">
                "Have a project in mind or just want to say hi? Send a message or write to "
                <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                "."
            </p>
            <form class="contact__form" on:submit=on_submit novalidate=true>
                <label class="contact__field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        name="name"
                        autocomplete="name"
                        prop:value=move || contact.get().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            contact.update(|c| c.edit(ContactField::Name, value));
                        }
                    />
                </label>
                <label class="contact__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        name="email"
                        autocomplete="email"
                        prop:value=move || contact.get().email
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            contact.update(|c| c.edit(ContactField::Email, value));
                        }
                    />
                </label>
                <label class="contact__field">
                    <span>"Message"</span>
                    <textarea
                        name="message"
                        rows="5"
                        prop:value=move || contact.get().message
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            contact.update(|c| c.edit(ContactField::Message, value));
                        }
                    ></textarea>
                </label>
                <button class="btn btn--primary contact__submit" type="submit" disabled=busy>
                    {move || if busy() { "Sending..." } else { "Send message" }}
                </button>
                {move || {
                    let status = contact.get().status;
                    status
                        .message()
                        .map(|text| view! { <p class=status_class(status) role="status">{text}</p> })
                }}
            </form>
        </section>
    }
}
