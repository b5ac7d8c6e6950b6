use crate::analytics::{track_event, GET_STARTED};
use crate::components::{BackNav, SiteFooter};
use leptos::*;

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Offline itineraries", "Your plans and bookings are on your phone, even without signal."),
    ("Trip notifications", "Get told when plans change or someone adds a new idea."),
    ("Quick expenses", "Snap a receipt and split it in seconds."),
    ("Nearby suggestions", "Find something good to do around the corner."),
];

#[component]
pub fn MobileAppPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <main class="container mobile-page">
            <header>
                <h1>"Tripmate on the go"</h1>
                <p class="tagline">"The whole trip in your pocket, on iOS and Android"</p>
            </header>

            <BackNav on_back=on_back/>

            <section class="store-links">
                <a class="store-badge" href="https://apps.apple.com/" target="_blank" rel="noopener">
                    "Download on the App Store"
                </a>
                <a class="store-badge" href="https://play.google.com/store" target="_blank" rel="noopener">
                    "Get it on Google Play"
                </a>
            </section>

            <section class="mobile-highlights">
                {HIGHLIGHTS
                    .into_iter()
                    .map(|(title, detail)| view! {
                        <div class="card">
                            <h3>{title}</h3>
                            <p>{detail}</p>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="cta">
                <p>"Prefer the browser? Everything works on the web too."</p>
                <button
                    class="primary-button"
                    on:click=move |_| {
                        track_event(GET_STARTED);
                        on_back.call(());
                    }
                >
                    "Get Started"
                </button>
            </section>

            <BackNav on_back=on_back bottom=true/>
            <SiteFooter/>
        </main>
    }
}
