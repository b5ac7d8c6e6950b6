use crate::dates::display_date;
use crate::error::SiteError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
}

impl IncidentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Identified => "Identified",
            IncidentStatus::Monitoring => "Monitoring",
            IncidentStatus::Resolved => "Resolved",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            IncidentStatus::Investigating => "incident-investigating",
            IncidentStatus::Identified => "incident-identified",
            IncidentStatus::Monitoring => "incident-monitoring",
            IncidentStatus::Resolved => "incident-resolved",
        }
    }
}

/// One entry on an incident's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentUpdate {
    pub time: String,
    pub message: String,
    pub status: IncidentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub status: IncidentStatus,
    pub description: String,
    /// ISO date the incident started
    pub date: String,
    /// Timeline entries in the order they were published (newest first).
    /// The order is kept as given and never re-sorted.
    pub updates: Vec<IncidentUpdate>,
}

impl Incident {
    pub fn is_resolved(&self) -> bool {
        self.status == IncidentStatus::Resolved
    }

    /// The most recent update, i.e. the head of the timeline.
    pub fn latest_update(&self) -> Option<&IncidentUpdate> {
        self.updates.first()
    }

    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }
}

/// Look an incident up by id.
pub fn find_incident<'a>(incidents: &'a [Incident], id: &str) -> Result<&'a Incident, SiteError> {
    incidents
        .iter()
        .find(|incident| incident.id == id)
        .ok_or_else(|| SiteError::IncidentNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::seed_incidents;

    #[test]
    fn test_find_incident_by_id() {
        let incidents = seed_incidents();
        let first_id = incidents[0].id.clone();
        let found = find_incident(&incidents, &first_id).unwrap();
        assert_eq!(found.id, first_id);
    }

    #[test]
    fn test_find_unknown_incident() {
        let incidents = seed_incidents();
        match find_incident(&incidents, "does-not-exist") {
            Err(SiteError::IncidentNotFound(id)) => assert_eq!(id, "does-not-exist"),
            other => panic!("expected IncidentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_latest_update_is_head_of_timeline() {
        let incidents = seed_incidents();
        for incident in &incidents {
            assert_eq!(incident.latest_update(), incident.updates.first());
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let incidents = seed_incidents();
        let mut ids: Vec<_> = incidents.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), incidents.len());
    }

    #[test]
    fn test_resolved_incidents_end_resolved() {
        // A resolved incident's newest update should say so
        for incident in seed_incidents().iter().filter(|i| i.is_resolved()) {
            let latest = incident.latest_update().expect("resolved incidents have updates");
            assert_eq!(latest.status, IncidentStatus::Resolved, "{}", incident.id);
        }
    }

    #[test]
    fn test_incident_parses_from_json() {
        let json = r#"{
            "id": "inc-9",
            "title": "Map tiles missing",
            "status": "monitoring",
            "description": "Some map tiles failed to load.",
            "date": "2024-05-02",
            "updates": [
                { "time": "10:40 UTC", "message": "Fix deployed.", "status": "monitoring" },
                { "time": "10:05 UTC", "message": "Looking into it.", "status": "investigating" }
            ]
        }"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.status, IncidentStatus::Monitoring);
        assert_eq!(incident.updates.len(), 2);
        assert_eq!(incident.updates[1].status, IncidentStatus::Investigating);
        assert_eq!(incident.display_date(), "May 2, 2024");
    }
}
