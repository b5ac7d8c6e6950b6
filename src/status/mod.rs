mod incident;
mod seed;
mod service;
mod view_state;

pub use incident::{find_incident, Incident, IncidentStatus, IncidentUpdate};
pub use seed::{seed_incidents, seed_services};
pub use service::{compute_overall_status, OverallStatus, ServiceHealth, ServiceStatus};
pub use view_state::{StatusView, View};
