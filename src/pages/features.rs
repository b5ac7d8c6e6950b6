use crate::analytics::{track_event, GET_STARTED};
use crate::components::{BackNav, SiteFooter};
use leptos::*;

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
pub fn FeaturesPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <main class="container features-page">
            <header>
                <h1>"Features"</h1>
                <p class="tagline">"Everything your group needs from first idea to last photo"</p>
            </header>

            <BackNav on_back=on_back/>

            <section class="feature-grid">
                <FeatureCard
                    title="Shared Itineraries"
                    description="One day-by-day plan the whole group can see and edit, with changes synced instantly."
                />
                <FeatureCard
                    title="Real-time Collaboration"
                    description="Comment on plans, vote on activities and see who's editing what, live."
                />
                <FeatureCard
                    title="Smart Recommendations"
                    description="Suggestions for places to stay, eat and explore, tuned to what your group enjoys."
                />
                <FeatureCard
                    title="Budget Tracking"
                    description="Log expenses as you go and see who owes whom at the end of the trip."
                />
                <FeatureCard
                    title="Booking Wallet"
                    description="Flights, hotels and tickets in one place, available offline on your phone."
                />
                <FeatureCard
                    title="Maps & Routes"
                    description="Every stop on a map, with travel times between them."
                />
            </section>

            <section class="cta">
                <h2>"Start planning together"</h2>
                <p>"Free for trips of up to four people."</p>
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
