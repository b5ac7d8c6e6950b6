use crate::trips::Trip;
use leptos::*;

/// Summary card for one trip.
#[component]
pub fn TripCard(trip: Trip) -> impl IntoView {
    let date_range = trip.date_range_label();
    let length = trip.length_label();
    let travelers = trip.travelers_label();
    let status = trip.status;

    view! {
        <article class="trip-card">
            {trip.cover_image.map(|src| view! {
                <img class="trip-cover" src=src alt=trip.destination.clone()/>
            })}
            <div class="trip-body">
                <div class="trip-heading">
                    <h3>{trip.title}</h3>
                    <span class=format!("trip-status {}", status.css_class())>{status.label()}</span>
                </div>
                <p class="trip-destination">{trip.destination}</p>
                <p class="trip-dates">
                    {date_range}
                    {length.map(|l| view! { <span class="trip-length">{format!(" · {}", l)}</span> })}
                </p>
                <p class="trip-travelers">{travelers}</p>
            </div>
        </article>
    }
}
