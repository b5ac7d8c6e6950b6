use crate::analytics::{track_event, CONTACT_SUBMITTED};
use crate::components::{BackNav, SiteFooter};
use crate::config::SiteConfig;
use crate::contact::{BrowserScheduler, ContactForm, ContactState, InquiryType, SimulatedDelivery};
use crate::storage::{clear_draft, load_draft, persist_draft};
use leptos::*;

#[component]
pub fn ContactPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let delivery = SimulatedDelivery::from_config(&config);

    let state = create_rw_signal(ContactState::new(load_draft()));
    let (error, set_error) = create_signal(None::<String>);

    // Draft follows the form while idle and is gone once sending starts
    create_effect(move |_| {
        state.with(persist_draft);
    });

    let edit = move |apply: fn(&mut ContactForm, String)| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            state.update(|s| apply(&mut s.form, value));
            set_error.set(None);
        }
    };

    let field = move |read: fn(&ContactForm) -> String| move || state.with(|s| read(&s.form));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = state.get_untracked();
        match next.begin_submit() {
            Ok(()) => {
                state.set(next);
                clear_draft();
                track_event(CONTACT_SUBMITTED);
                delivery.run(&BrowserScheduler, move |step| state.update(|s| s.apply(step)));
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let loading = move || state.with(|s| s.is_loading());
    let submitted = move || state.with(|s| s.is_submitted());

    view! {
        <main class="container contact-page">
            <header>
                <h1>"Contact Us"</h1>
                <p class="tagline">"Questions, feedback or partnership ideas? We'd love to hear from you."</p>
            </header>

            <BackNav on_back=on_back/>

            <div class="contact-layout">
                <section class="contact-channels">
                    <div class="card">
                        <h3>"Support"</h3>
                        <p>"Trouble with a trip or your account?"</p>
                        <a href=format!("mailto:{}", config.support_email)>{config.support_email.clone()}</a>
                    </div>
                    <div class="card">
                        <h3>"Press"</h3>
                        <p>"Media kits, interviews and announcements."</p>
                        <a href=format!("mailto:{}", config.press_email)>{config.press_email.clone()}</a>
                    </div>
                    <div class="card">
                        <h3>"Response time"</h3>
                        <p>"We usually reply within one business day."</p>
                    </div>
                </section>

                <section class="contact-form-section">
                    <Show
                        when=submitted
                        fallback=move || view! {
                            <form class="contact-form" on:submit=on_submit>
                                <div class="form-row">
                                    <div class="control-group">
                                        <label for="contact-name">"Name"</label>
                                        <input
                                            id="contact-name"
                                            type="text"
                                            required
                                            prop:value=field(|f| f.name.clone())
                                            on:input=edit(|f, v| f.name = v)
                                        />
                                    </div>
                                    <div class="control-group">
                                        <label for="contact-email">"Email"</label>
                                        <input
                                            id="contact-email"
                                            type="email"
                                            required
                                            prop:value=field(|f| f.email.clone())
                                            on:input=edit(|f, v| f.email = v)
                                        />
                                    </div>
                                </div>

                                <div class="control-group">
                                    <label for="contact-type">"Inquiry type"</label>
                                    <select
                                        id="contact-type"
                                        on:change=edit(|f, v| f.inquiry_type = InquiryType::from_value(&v))
                                    >
                                        {InquiryType::ALL
                                            .into_iter()
                                            .map(move |t| view! {
                                                <option
                                                    value=t.value()
                                                    selected=move || state.with(|s| s.form.inquiry_type == t)
                                                >
                                                    {t.label()}
                                                </option>
                                            })
                                            .collect_view()}
                                    </select>
                                </div>

                                <div class="control-group">
                                    <label for="contact-subject">"Subject"</label>
                                    <input
                                        id="contact-subject"
                                        type="text"
                                        required
                                        prop:value=field(|f| f.subject.clone())
                                        on:input=edit(|f, v| f.subject = v)
                                    />
                                </div>

                                <div class="control-group">
                                    <label for="contact-message">"Message"</label>
                                    <textarea
                                        id="contact-message"
                                        rows="6"
                                        required
                                        prop:value=field(|f| f.message.clone())
                                        on:input=edit(|f, v| f.message = v)
                                    ></textarea>
                                </div>

                                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                                <button type="submit" class="primary-button" disabled=loading>
                                    {move || if loading() { "Sending..." } else { "Send Message" }}
                                </button>
                            </form>
                        }
                    >
                        <div class="form-success">
                            <h3>"Message sent!"</h3>
                            <p>"Thanks for reaching out. We'll get back to you soon."</p>
                        </div>
                    </Show>
                </section>
            </div>

            <BackNav on_back=on_back bottom=true/>
            <SiteFooter/>
        </main>
    }
}
