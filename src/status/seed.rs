//! Static status data shown until a live health feed exists.

use super::incident::{Incident, IncidentStatus, IncidentUpdate};
use super::service::{ServiceHealth, ServiceStatus};

fn service(name: &str, status: ServiceHealth, description: &str, last_checked: &str) -> ServiceStatus {
    ServiceStatus {
        name: name.to_string(),
        status,
        description: description.to_string(),
        last_checked: last_checked.to_string(),
    }
}

fn update(time: &str, status: IncidentStatus, message: &str) -> IncidentUpdate {
    IncidentUpdate {
        time: time.to_string(),
        message: message.to_string(),
        status,
    }
}

pub fn seed_services() -> Vec<ServiceStatus> {
    vec![
        service(
            "Web Application",
            ServiceHealth::Operational,
            "Trip planner, itineraries and account settings",
            "1 minute ago",
        ),
        service(
            "API",
            ServiceHealth::Operational,
            "Public and mobile API endpoints",
            "1 minute ago",
        ),
        service(
            "Real-time Collaboration",
            ServiceHealth::Operational,
            "Live editing and sync between trip members",
            "2 minutes ago",
        ),
        service(
            "AI Recommendations",
            ServiceHealth::Degraded,
            "Destination and activity suggestions",
            "2 minutes ago",
        ),
        service(
            "Notifications",
            ServiceHealth::Operational,
            "Email and push notifications",
            "3 minutes ago",
        ),
        service(
            "Mobile Apps",
            ServiceHealth::Operational,
            "iOS and Android app backend",
            "3 minutes ago",
        ),
    ]
}

pub fn seed_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "inc-2024-031".to_string(),
            title: "Slow AI recommendations".to_string(),
            status: IncidentStatus::Monitoring,
            description: "Recommendation requests are taking longer than usual to complete."
                .to_string(),
            date: "2024-03-18".to_string(),
            updates: vec![
                update(
                    "14:20 UTC",
                    IncidentStatus::Monitoring,
                    "Additional capacity is online and response times are recovering. We are monitoring.",
                ),
                update(
                    "13:45 UTC",
                    IncidentStatus::Identified,
                    "Traced to a saturated inference cluster after a traffic spike.",
                ),
                update(
                    "13:10 UTC",
                    IncidentStatus::Investigating,
                    "We are investigating reports of slow recommendations.",
                ),
            ],
        },
        Incident {
            id: "inc-2024-027".to_string(),
            title: "Delayed push notifications".to_string(),
            status: IncidentStatus::Resolved,
            description: "Some push notifications for trip updates arrived late.".to_string(),
            date: "2024-03-09".to_string(),
            updates: vec![
                update(
                    "09:55 UTC",
                    IncidentStatus::Resolved,
                    "The notification backlog has cleared. All notifications are delivered on time.",
                ),
                update(
                    "09:30 UTC",
                    IncidentStatus::Monitoring,
                    "The queue worker has been restarted and the backlog is draining.",
                ),
                update(
                    "08:50 UTC",
                    IncidentStatus::Investigating,
                    "We are looking into delayed push notifications on iOS and Android.",
                ),
            ],
        },
        Incident {
            id: "inc-2024-019".to_string(),
            title: "Trip sync interruption".to_string(),
            status: IncidentStatus::Resolved,
            description: "Changes made by trip members were not syncing for about 25 minutes."
                .to_string(),
            date: "2024-02-21".to_string(),
            updates: vec![
                update(
                    "17:40 UTC",
                    IncidentStatus::Resolved,
                    "Sync is fully restored and all pending edits have been applied.",
                ),
                update(
                    "17:25 UTC",
                    IncidentStatus::Identified,
                    "A failed database failover left the sync service pointing at a read replica.",
                ),
                update(
                    "17:15 UTC",
                    IncidentStatus::Investigating,
                    "Trip edits are not appearing for other members. Investigating.",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{compute_overall_status, OverallStatus};

    #[test]
    fn test_seed_services_aggregate() {
        // One degraded service, no outages
        assert_eq!(compute_overall_status(&seed_services()), OverallStatus::Degraded);
    }

    #[test]
    fn test_every_seed_incident_has_a_timeline() {
        for incident in seed_incidents() {
            assert!(!incident.updates.is_empty(), "{} has no updates", incident.id);
            assert_eq!(
                incident.latest_update().map(|u| u.status),
                Some(incident.status),
                "{} headline status should match its newest update",
                incident.id
            );
        }
    }
}
