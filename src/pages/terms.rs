use crate::components::{BackNav, SiteFooter};
use leptos::*;

const EFFECTIVE: &str = "January 15, 2025";

const SECTIONS: [(&str, &str); 7] = [
    (
        "1. Acceptance of Terms",
        "By creating an account or using Tripmate you agree to these terms. If you do not agree, please do not use the service.",
    ),
    (
        "2. Your Account",
        "You are responsible for keeping your login details safe and for everything that happens under your account.",
    ),
    (
        "3. Your Content",
        "You own the trips, notes and photos you add. You give us permission to store and display them to the people you share them with.",
    ),
    (
        "4. Acceptable Use",
        "Do not use the service to break the law, harass others, or interfere with how the service runs.",
    ),
    (
        "5. Third-party Bookings",
        "Bookings made through partners are contracts between you and that partner. We are not responsible for their services.",
    ),
    (
        "6. Availability",
        "We work hard to keep Tripmate running but cannot promise it will always be available or error free.",
    ),
    (
        "7. Changes",
        "We may update these terms. If the changes are significant we will tell you before they take effect.",
    ),
];

#[component]
pub fn TermsOfServicePage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <main class="container legal-page">
            <header>
                <h1>"Terms of Service"</h1>
                <p class="tagline">{format!("Effective {}", EFFECTIVE)}</p>
            </header>

            <BackNav on_back=on_back/>

            {SECTIONS
                .into_iter()
                .map(|(heading, body)| view! {
                    <section class="legal-section">
                        <h2>{heading}</h2>
                        <p>{body}</p>
                    </section>
                })
                .collect_view()}

            <BackNav on_back=on_back bottom=true/>
            <SiteFooter/>
        </main>
    }
}
