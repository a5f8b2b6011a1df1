use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animations::{rise, slide, Ease, Pose, Reveal, Transition};
use crate::components::toast::{ToastAction, ToastQueue, Toaster};
use crate::config;
use crate::content::{contact, SOCIAL_LINKS};
use crate::hooks::in_view::{use_in_view, SECTION_MARGIN};
use crate::models::{ContactDraft, ContactPayload, ContactResponse, Field};
use crate::sections::heading::SectionHeading;

const SUCCESS_BANNER_MS: u32 = 5_000;
const SENT_DESCRIPTION: &str = "Thank you! Your message has been sent successfully.";
const NETWORK_ERROR: &str = "Could not reach the server. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Sent,
    Rejected(String),
    Failed,
}

/// Maps the server's answer to what the form shows.
pub fn interpret(status: u16, body: Option<ContactResponse>) -> SubmitOutcome {
    match (status, body) {
        (200..=299, Some(body)) if !body.success => SubmitOutcome::Rejected(body.message),
        (200..=299, _) => SubmitOutcome::Sent,
        (400, Some(body)) => SubmitOutcome::Rejected(body.message),
        _ => SubmitOutcome::Failed,
    }
}

/// Form state after the server has answered.
#[derive(Debug, PartialEq)]
pub struct AfterSubmit {
    pub draft: ContactDraft,
    pub show_banner: bool,
    pub toast: ToastAction,
}

/// A delivered message clears the draft and raises the banner; any failure
/// keeps what the user typed so they can retry.
pub fn apply_outcome(draft: &ContactDraft, outcome: SubmitOutcome) -> AfterSubmit {
    match outcome {
        SubmitOutcome::Sent => AfterSubmit {
            draft: ContactDraft::default(),
            show_banner: true,
            toast: ToastAction::success("Message Sent", SENT_DESCRIPTION),
        },
        SubmitOutcome::Rejected(message) => AfterSubmit {
            draft: draft.clone(),
            show_banner: false,
            toast: ToastAction::error("Form Error", message),
        },
        SubmitOutcome::Failed => AfterSubmit {
            draft: draft.clone(),
            show_banner: false,
            toast: ToastAction::error("Something went wrong", NETWORK_ERROR),
        },
    }
}

async fn send(payload: ContactPayload) -> SubmitOutcome {
    let url = format!("{}/api/contact", config::get_backend_url());
    let request = match Request::post(&url).json(&payload) {
        Ok(request) => request,
        Err(e) => {
            log::error!("could not encode contact form: {:?}", e);
            return SubmitOutcome::Failed;
        }
    };
    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let body = response.json::<ContactResponse>().await.ok();
            interpret(status, body)
        }
        Err(e) => {
            log::error!("contact request failed: {:?}", e);
            SubmitOutcome::Failed
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_node_ref();
    let shown = use_in_view(section.clone(), SECTION_MARGIN);

    let draft = use_state(ContactDraft::default);
    let submitting = use_state_eq(|| false);
    let submitted = use_state_eq(|| false);
    let toasts = use_reducer(ToastQueue::default);

    {
        let is_submitted = *submitted;
        let submitted = submitted.clone();
        use_effect_with_deps(
            move |&is_submitted: &bool| {
                let timeout = is_submitted.then(|| {
                    let submitted = submitted.clone();
                    Timeout::new(SUCCESS_BANNER_MS, move || submitted.set(false))
                });
                move || drop(timeout)
            },
            is_submitted,
        );
    }

    let update = |field: Field| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        }
    };
    let on_name = {
        let update = update(Field::Name);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let update = update(Field::Email);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_subject = {
        let update = update(Field::Subject);
        Callback::from(move |e: Event| update(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let update = update(Field::Message);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let toasts = toasts.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let payload = match draft.validate() {
                Ok(payload) => payload,
                Err(err) => {
                    log::info!("contact form rejected locally: {:?}", err);
                    toasts.dispatch(ToastAction::error("Form Error", "Please fill in all required fields"));
                    return;
                }
            };

            submitting.set(true);
            let draft = draft.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let outcome = send(payload).await;
                let after = apply_outcome(&draft, outcome);
                draft.set(after.draft);
                if after.show_banner {
                    submitted.set(true);
                }
                toasts.dispatch(after.toast);
                submitting.set(false);
            });
        })
    };

    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let banner = Reveal::new(Pose::offset(0.0, 10.0), Transition::new(0.3, 0.0, Ease::EaseOut));

    html! {
        <section ref={section} id="contact" class="section bg-white">
            <div class="container">
                <SectionHeading title="Get in" highlight="Touch" intro={contact::INTRO} {shown} />

                <div class="contact-grid">
                    <div class="contact-info" style={slide(-50.0, 0.6, 0.2).style(shown)}>
                        <div class="card">
                            <h3>{"Contact Information"}</h3>
                            <ul class="info-list">
                                { for contact::INFO.iter().enumerate().map(|(i, item)| html! {
                                    <li style={rise(20.0, 0.5, 0.4 + 0.1 * i as f64).style(shown)}>
                                        <div class="feature-icon"><i class={classes!("fas", item.icon)}></i></div>
                                        <div>
                                            <h4>{ item.title }</h4>
                                            <p>{ item.description }</p>
                                        </div>
                                    </li>
                                }) }
                            </ul>
                            <div class="socials">
                                <h4>{"Follow Us"}</h4>
                                <div class="social-row">
                                    { for SOCIAL_LINKS.iter().map(|link| html! {
                                        <a href={link.href} class="social-link hover-pop"><i class={classes!("fab", link.icon)}></i></a>
                                    }) }
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="contact-form-wrap" style={slide(50.0, 0.6, 0.3).style(shown)}>
                        <div class="card hover-shadow">
                            <h3>{"Send Us a Message"}</h3>
                            <form class="contact-form" {onsubmit}>
                                <div class="form-row">
                                    <div class="form-group">
                                        <input type="text" id="name" name="name" placeholder=" " value={draft.name.clone()} oninput={on_name} />
                                        <label for="name">{"Your Name"}</label>
                                    </div>
                                    <div class="form-group">
                                        <input type="email" id="email" name="email" placeholder=" " value={draft.email.clone()} oninput={on_email} />
                                        <label for="email">{"Your Email"}</label>
                                    </div>
                                </div>
                                <div class="form-group">
                                    <select id="subject" name="subject" onchange={on_subject}>
                                        <option value="" disabled=true selected={draft.subject.is_empty()}>{"Select Subject"}</option>
                                        { for contact::SUBJECTS.iter().map(|option| html! {
                                            <option value={option.value} selected={draft.subject == option.value}>{ option.label }</option>
                                        }) }
                                    </select>
                                    <div class="select-chevron"><i class="fas fa-chevron-down"></i></div>
                                </div>
                                <div class="form-group">
                                    <textarea id="message" name="message" rows="5" placeholder=" " value={draft.message.clone()} oninput={on_message}></textarea>
                                    <label for="message">{"Your Message"}</label>
                                </div>
                                <button type="submit" class="btn btn-primary btn-block btn-press" disabled={*submitting}>
                                    { if *submitting { "Sending..." } else { "Send Message" } }
                                </button>
                                if *submitted {
                                    <div class="form-success" style={banner.style(true)}>
                                        <i class="fas fa-check-circle"></i>
                                        {" Your message has been sent successfully! We'll get back to you soon."}
                                    </div>
                                }
                            </form>
                        </div>
                    </div>
                </div>
            </div>
            <Toaster queue={(*toasts).clone()} {on_dismiss} />
        </section>
    }
}
