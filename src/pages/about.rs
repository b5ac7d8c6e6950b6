use crate::analytics::{track_event, GET_STARTED};
use crate::components::{BackNav, SiteFooter};
use leptos::*;

struct Milestone {
    year: &'static str,
    title: &'static str,
    detail: &'static str,
}

const TIMELINE: [Milestone; 4] = [
    Milestone {
        year: "2021",
        title: "The idea",
        detail: "Planning a friends' trip across three group chats and two spreadsheets. There had to be a better way.",
    },
    Milestone {
        year: "2022",
        title: "First itinerary shared",
        detail: "A private beta with shared itineraries and a single source of truth for bookings.",
    },
    Milestone {
        year: "2023",
        title: "Real-time collaboration",
        detail: "Everyone on the trip can edit at once, with comments and voting on plans.",
    },
    Milestone {
        year: "2024",
        title: "Smarter suggestions",
        detail: "Recommendations that learn from what your group actually likes.",
    },
];

struct Member {
    name: &'static str,
    role: &'static str,
}

const TEAM: [Member; 4] = [
    Member { name: "Maya Okafor", role: "Co-founder & CEO" },
    Member { name: "Jonas Lindqvist", role: "Co-founder & CTO" },
    Member { name: "Priya Raman", role: "Head of Design" },
    Member { name: "Diego Alvarez", role: "Head of Community" },
];

#[component]
pub fn AboutPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <main class="container about-page">
            <header>
                <h1>"About Tripmate"</h1>
                <p class="tagline">"Travel planning that works the way groups do"</p>
            </header>

            <BackNav on_back=on_back/>

            <section class="about-section">
                <h2>"Our Mission"</h2>
                <p>
                    "Group trips should be about the trip, not the logistics. Tripmate brings "
                    "itineraries, bookings, budgets and ideas into one place that everyone can "
                    "see and shape together."
                </p>
            </section>

            <section class="about-section">
                <h2>"Our Story"</h2>
                <dl class="timeline">
                    {TIMELINE
                        .iter()
                        .map(|m| view! {
                            <dt>{m.year} " \u{2014} " {m.title}</dt>
                            <dd>{m.detail}</dd>
                        })
                        .collect_view()}
                </dl>
            </section>

            <section class="about-section">
                <h2>"The Team"</h2>
                <ul class="team-grid">
                    {TEAM
                        .iter()
                        .map(|m| view! {
                            <li class="card">
                                <h3>{m.name}</h3>
                                <p>{m.role}</p>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="cta">
                <h2>"Ready for your next trip?"</h2>
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
