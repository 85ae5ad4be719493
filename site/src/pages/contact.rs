//! Contact form with simulated submission.
//!
//! The form state is created with the page, so leaving the page drops any
//! draft and confirmation.

use leptos::prelude::*;

use crate::content::{EMAIL, mailto};
use crate::state::contact::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            if let Err(e) = f.submit() {
                leptos::logging::log!("contact submission blocked: {e}");
            }
        });
    };

    view! {
        <main class="page page--narrow">
            <section>
                <h2 class="page__title">"Formulaire de contact"</h2>
                <p class="page__subtitle">"Nous vous répondrons dès que possible."</p>
                <form class="contact-form" on:submit=on_submit>
                    <div>
                        <label class="contact-form__label" for="contact-name">"Nom"</label>
                        <input
                            id="contact-name"
                            class="contact-form__input"
                            type="text"
                            name="name"
                            required=true
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="contact-form__label" for="contact-email">"Email"</label>
                        <input
                            id="contact-email"
                            class="contact-form__input"
                            type="email"
                            name="email"
                            required=true
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="contact-form__label" for="contact-message">"Message"</label>
                        <textarea
                            id="contact-message"
                            class="contact-form__input"
                            name="message"
                            rows="5"
                            required=true
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="contact-form__actions">
                        <button type="submit" class="btn btn--primary">"Envoyer"</button>
                        <span class="contact-form__hint">
                            "Ou écrivez-nous à "
                            <a class="contact-form__mail" href=mailto()>{EMAIL}</a>
                        </span>
                    </div>
                    <Show when=move || form.with(|f| f.status.is_some())>
                        <div class="contact-form__status" role="status">
                            {move || form.with(|f| f.status.clone().unwrap_or_default())}
                        </div>
                    </Show>
                </form>
            </section>
        </main>
    }
}
