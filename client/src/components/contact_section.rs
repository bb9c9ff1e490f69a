//! Lead-capture contact form.
//!
//! Delivery is simulated: a submission waits `SUBMIT_DELAY_MS` and then shows
//! the success panel. The payload is only logged to the browser console.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::contact::{ContactForm, ContactState, ContactStatus, package_options};

type FieldGetter = fn(&ContactForm) -> &String;
type FieldSetter = fn(&mut ContactForm, String);

/// Two-way binding between a form field and an input's `value`.
fn bind_field(
    contact: RwSignal<ContactState>,
    get: FieldGetter,
    set: FieldSetter,
) -> (impl Fn() -> String + Copy + Send + Sync + 'static, impl Fn(leptos::ev::Event) + Copy + 'static) {
    let value = move || contact.with(|c| get(&c.form).clone());
    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        contact.update(|c| set(&mut c.form, raw));
    };
    (value, on_input)
}

fn start_submission(contact: RwSignal<ContactState>) {
    let Some(result) = contact.try_update(ContactState::begin_submit) else {
        return;
    };
    let submission = match result {
        Ok(submission) => submission,
        Err(e) => {
            leptos::logging::warn!("contact form rejected: {e}");
            return;
        }
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::state::contact::SUBMIT_DELAY_MS;

        match serde_json::to_string(&submission.payload) {
            Ok(body) => log::info!("contact submission #{}: {body}", submission.seq),
            Err(e) => log::warn!("contact payload not serializable: {e}"),
        }
        let seq = submission.seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SUBMIT_DELAY_MS)).await;
            let outcome = contact.try_update(|c| c.complete(seq));
            if let Some(Err(e)) = outcome {
                log::debug!("dropping simulated completion: {e}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = submission;
}

#[component]
fn ContactSuccess(contact: RwSignal<ContactState>) -> impl IntoView {
    view! {
        <div class="contact-success" role="status">
            <Icon kind=IconKind::CircleCheck class="contact-success__icon"/>
            <h3 class="contact-success__title">"Request received."</h3>
            <p class="contact-success__text">
                "A production lead will reply within one business day with a sample turnaround for your listing."
            </p>
            <button type="button" class="button button--ghost" on:click=move |_| contact.update(ContactState::reset)>
                "Submit another"
            </button>
        </div>
    }
}

#[component]
fn ContactFormView(contact: RwSignal<ContactState>) -> impl IntoView {
    let (name, on_name) = bind_field(contact, |f| &f.name, |f, v| f.name = v);
    let (email, on_email) = bind_field(contact, |f| &f.email, |f, v| f.email = v);
    let (company, on_company) = bind_field(contact, |f| &f.company, |f, v| f.company = v);
    let (package, on_package) = bind_field(contact, |f| &f.package, |f, v| f.package = v);
    let (message, on_message) = bind_field(contact, |f| &f.message, |f, v| f.message = v);

    let busy = move || contact.with(ContactState::is_busy);
    let error = move || contact.with(|c| c.error.as_ref().map(ToString::to_string));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        start_submission(contact);
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="contact-form__row">
                <label class="field">
                    <span class="field__label">"Name"</span>
                    <input
                        class="field__input"
                        type="text"
                        name="name"
                        required=true
                        autocomplete="name"
                        prop:value=name
                        on:input=on_name
                        disabled=busy
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        class="field__input"
                        type="email"
                        name="email"
                        required=true
                        autocomplete="email"
                        placeholder="you@brokerage.com"
                        prop:value=email
                        on:input=on_email
                        disabled=busy
                    />
                </label>
            </div>
            <div class="contact-form__row">
                <label class="field">
                    <span class="field__label">"Brokerage / Dealer"</span>
                    <input
                        class="field__input"
                        type="text"
                        name="company"
                        autocomplete="organization"
                        prop:value=company
                        on:input=on_company
                        disabled=busy
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Package"</span>
                    <select class="field__input" name="package" prop:value=package on:change=on_package disabled=busy>
                        {package_options()
                            .into_iter()
                            .map(|opt| view! { <option value=opt>{opt}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <label class="field">
                <span class="field__label">"Tell us about the listing"</span>
                <textarea
                    class="field__input field__input--area"
                    name="message"
                    rows="4"
                    prop:value=message
                    on:input=on_message
                    disabled=busy
                ></textarea>
            </label>

            <Show when=move || error().is_some()>
                <p class="contact-form__error" role="alert">{move || error().unwrap_or_default()}</p>
            </Show>

            <button type="submit" class="button button--primary" disabled=busy>
                {move || if busy() { "Sending..." } else { "Request a Transformation" }}
                <Icon kind=IconKind::Send class="button__icon"/>
            </button>
        </form>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());
    let succeeded = move || contact.with(|c| c.status == ContactStatus::Success);

    view! {
        <section id="contact" class="section section--contact">
            <div class="container container--narrow">
                <header class="section-header">
                    <span class="eyebrow">"Start Your First Listing"</span>
                    <h2 class="section-title">"Let's Stage Your Fleet."</h2>
                    <p class="section-lede">
                        "Send us a listing link or a short note. We reply with a free sample transformation."
                    </p>
                </header>
                <Show when=succeeded fallback=move || view! { <ContactFormView contact=contact/> }>
                    <ContactSuccess contact=contact/>
                </Show>
            </div>
        </section>
    }
}
