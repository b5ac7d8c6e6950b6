use crate::components::{SiteFooter, TripCard};
use crate::config::SiteConfig;
use crate::trips::sample_trips;
use leptos::*;
use leptos_router::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <main class="container home-page">
            <header>
                <h1>{config.app_name.clone()}</h1>
                <p class="tagline">"Plan trips together, without the group-chat chaos"</p>
            </header>

            <section class="intro">
                <p>
                    "Shared itineraries, live collaboration and suggestions your whole group will like. "
                    <A href="/features">"See what it can do"</A>
                    " or "
                    <A href="/mobile">"get the app"</A>
                    "."
                </p>
            </section>

            <section class="trips">
                <h2>"Example trips"</h2>
                <div class="trip-grid">
                    {sample_trips()
                        .into_iter()
                        .map(|trip| view! { <TripCard trip=trip/> })
                        .collect_view()}
                </div>
            </section>

            <SiteFooter/>
        </main>
    }
}
