use crate::components::{BackNav, SiteFooter};
use crate::config::SiteConfig;
use leptos::*;

const LAST_UPDATED: &str = "January 15, 2025";

const SECTIONS: [(&str, &[&str]); 5] = [
    (
        "Information We Collect",
        &[
            "Account details you give us: your name, email address and profile photo.",
            "Trip content you create: itineraries, notes, bookings and expenses.",
            "Basic usage data such as pages visited and features used, collected without cookies.",
        ],
    ),
    (
        "How We Use It",
        &[
            "To run the service and keep your trips in sync across devices and with your group.",
            "To suggest places and activities. You can turn recommendations off at any time.",
            "To let you know about changes to trips you are part of.",
        ],
    ),
    (
        "Sharing",
        &[
            "Trip content is visible to the people you invite to that trip.",
            "We never sell personal data. Service providers process data only on our behalf.",
        ],
    ),
    (
        "Retention",
        &[
            "Your data is kept while your account is active.",
            "Deleting your account removes your trips within 30 days, except where the law requires us to keep records.",
        ],
    ),
    (
        "Your Rights",
        &[
            "You can access, export, correct or delete your data from account settings.",
            "You can object to processing or ask us questions at any time by email.",
        ],
    ),
];

#[component]
pub fn PrivacyPolicyPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <main class="container legal-page">
            <header>
                <h1>"Privacy Policy"</h1>
                <p class="tagline">{format!("Last updated {}", LAST_UPDATED)}</p>
            </header>

            <BackNav on_back=on_back/>

            <section class="legal-section">
                <p>
                    {format!(
                        "This policy explains what {} collects, why, and the choices you have.",
                        config.app_name
                    )}
                </p>
            </section>

            {SECTIONS
                .into_iter()
                .map(|(heading, paragraphs)| view! {
                    <section class="legal-section">
                        <h2>{heading}</h2>
                        <ul>
                            {paragraphs.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                        </ul>
                    </section>
                })
                .collect_view()}

            <section class="legal-section">
                <h2>"Contact"</h2>
                <p>
                    "Privacy questions can be sent to "
                    <a href=format!("mailto:{}", config.support_email)>{config.support_email.clone()}</a>
                    "."
                </p>
            </section>

            <BackNav on_back=on_back bottom=true/>
            <SiteFooter/>
        </main>
    }
}
