use crate::analytics::{track_event, INCIDENT_OPENED};
use crate::components::{BackNav, SiteFooter};
use crate::logging::log_warning;
use crate::status::{
    compute_overall_status, seed_incidents, seed_services, Incident, ServiceStatus, StatusView, View,
};
use leptos::*;

#[component]
fn ServiceRow(service: ServiceStatus) -> impl IntoView {
    view! {
        <li class="service-row">
            <div class="service-info">
                <h3>{service.name}</h3>
                <p>{service.description}</p>
            </div>
            <div class="service-health">
                <span class=format!("status-badge {}", service.status.css_class())>
                    {service.status.label()}
                </span>
                <span class="last-checked">{format!("Checked {}", service.last_checked)}</span>
            </div>
        </li>
    }
}

#[component]
fn IncidentDetail(incident: Incident, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let date = incident.display_date();

    view! {
        <section class="incident-detail">
            <button class="link-button" on:click=move |_| on_close.call(())>
                "< All incidents"
            </button>
            <div class="incident-heading">
                <h2>{incident.title}</h2>
                <span class=format!("status-badge {}", incident.status.css_class())>
                    {incident.status.label()}
                </span>
            </div>
            <p class="incident-date">{date}</p>
            <p>{incident.description}</p>

            <h3>"Updates"</h3>
            <ol class="incident-timeline">
                {incident
                    .updates
                    .into_iter()
                    .map(|update| view! {
                        <li class="timeline-entry">
                            <div class="timeline-meta">
                                <span class=format!("status-badge {}", update.status.css_class())>
                                    {update.status.label()}
                                </span>
                                <time>{update.time}</time>
                            </div>
                            <p>{update.message}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn StatusPage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let services = seed_services();
    let incidents = store_value(seed_incidents());
    let view_state = create_rw_signal(StatusView::new());

    let overall = compute_overall_status(&services);

    let open_incident = move |id: String| {
        let mut next = view_state.get_untracked();
        match incidents.with_value(|all| next.select_by_id(all, &id)) {
            Ok(()) => {
                view_state.set(next);
                track_event(INCIDENT_OPENED);
            }
            Err(e) => log_warning(&e.to_string()),
        }
    };

    let incident_list = move || {
        incidents.with_value(|all| {
            all.iter()
                .map(move |incident| {
                    let id = incident.id.clone();
                    let latest = incident
                        .latest_update()
                        .map(|u| u.message.clone())
                        .unwrap_or_default();
                    view! {
                        <li class="incident-row" class:resolved=incident.is_resolved()>
                            <button class="incident-summary" on:click=move |_| open_incident(id.clone())>
                                <div class="incident-heading">
                                    <h3>{incident.title.clone()}</h3>
                                    <span class=format!("status-badge {}", incident.status.css_class())>
                                        {incident.status.label()}
                                    </span>
                                </div>
                                <p class="incident-date">{incident.display_date()}</p>
                                <p class="incident-latest">{latest}</p>
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <main class="container status-page" class:detail-view=move || view_state.with(StatusView::is_detail)>
            <header>
                <h1>"System Status"</h1>
                <p class="tagline">"Current health of every part of the service"</p>
            </header>

            <BackNav on_back=on_back/>

            {move || view_state.with(|v| match v.current() {
                View::Detail(incident) => view! {
                    <IncidentDetail
                        incident=incident.clone()
                        on_close=move |_| view_state.update(|v| v.clear_selection())
                    />
                }
                .into_view(),
                View::List => view! {
                    <section class=format!("overall-status {}", overall.css_class())>
                        <h2>{overall.label()}</h2>
                    </section>

                    <section class="services">
                        <h2>"Services"</h2>
                        <ul class="service-list">
                            {services
                                .iter()
                                .cloned()
                                .map(|service| view! { <ServiceRow service=service/> })
                                .collect_view()}
                        </ul>
                    </section>

                    <section class="incidents">
                        <h2>"Past Incidents"</h2>
                        <ul class="incident-list">{incident_list}</ul>
                    </section>
                }
                .into_view(),
            })}

            <BackNav on_back=on_back bottom=true/>
            <SiteFooter/>
        </main>
    }
}
