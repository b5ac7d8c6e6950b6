use serde::{Deserialize, Serialize};

/// Health of a single service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceHealth {
    Operational,
    Degraded,
    Outage,
}

impl ServiceHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceHealth::Operational => "Operational",
            ServiceHealth::Degraded => "Degraded",
            ServiceHealth::Outage => "Outage",
        }
    }

    /// CSS modifier used by the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            ServiceHealth::Operational => "status-operational",
            ServiceHealth::Degraded => "status-degraded",
            ServiceHealth::Outage => "status-outage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub status: ServiceHealth,
    pub description: String,
    pub last_checked: String,
}

/// Aggregate health of all services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallStatus {
    AllOperational,
    Degraded,
    Disruption,
    /// No services reported at all.
    Unavailable,
}

impl OverallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OverallStatus::AllOperational => "All Systems Operational",
            OverallStatus::Degraded => "Degraded Performance",
            OverallStatus::Disruption => "Service Disruption",
            OverallStatus::Unavailable => "Status Unavailable",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OverallStatus::AllOperational => "overall-operational",
            OverallStatus::Degraded => "overall-degraded",
            OverallStatus::Disruption => "overall-outage",
            OverallStatus::Unavailable => "overall-unknown",
        }
    }
}

/// Fold service health into one aggregate status.
///
/// Any outage wins over degradation; the result does not depend on order.
/// An empty slice has nothing to vouch for, so it reports
/// [`OverallStatus::Unavailable`] rather than "all operational".
pub fn compute_overall_status(services: &[ServiceStatus]) -> OverallStatus {
    if services.is_empty() {
        return OverallStatus::Unavailable;
    }
    if services.iter().all(|s| s.status == ServiceHealth::Operational) {
        OverallStatus::AllOperational
    } else if services.iter().any(|s| s.status == ServiceHealth::Outage) {
        OverallStatus::Disruption
    } else {
        OverallStatus::Degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(status: ServiceHealth) -> ServiceStatus {
        ServiceStatus {
            name: "Trip Sync".to_string(),
            status,
            description: "Real-time itinerary sync".to_string(),
            last_checked: "2 minutes ago".to_string(),
        }
    }

    fn overall(statuses: &[ServiceHealth]) -> OverallStatus {
        let services: Vec<_> = statuses.iter().copied().map(service).collect();
        compute_overall_status(&services)
    }

    #[test]
    fn test_all_operational() {
        use ServiceHealth::*;
        assert_eq!(overall(&[Operational]), OverallStatus::AllOperational);
        assert_eq!(
            overall(&[Operational, Operational]).label(),
            "All Systems Operational"
        );
    }

    #[test]
    fn test_any_outage_is_disruption() {
        use ServiceHealth::*;
        assert_eq!(
            overall(&[Operational, Outage]).label(),
            "Service Disruption"
        );
        // Outage dominates degradation regardless of position
        assert_eq!(overall(&[Degraded, Outage, Operational]), OverallStatus::Disruption);
        assert_eq!(overall(&[Outage, Degraded]), OverallStatus::Disruption);
        assert_eq!(overall(&[Outage]), OverallStatus::Disruption);
    }

    #[test]
    fn test_degraded_without_outage() {
        use ServiceHealth::*;
        assert_eq!(
            overall(&[Operational, Degraded]).label(),
            "Degraded Performance"
        );
        assert_eq!(overall(&[Degraded, Degraded]), OverallStatus::Degraded);
    }

    #[test]
    fn test_order_independent() {
        use ServiceHealth::*;
        let mixed = [Operational, Degraded, Operational, Degraded];
        let mut reversed = mixed;
        reversed.reverse();
        assert_eq!(overall(&mixed), overall(&reversed));
    }

    #[test]
    fn test_empty_is_unavailable() {
        assert_eq!(compute_overall_status(&[]), OverallStatus::Unavailable);
        assert_eq!(OverallStatus::Unavailable.label(), "Status Unavailable");
    }

    #[test]
    fn test_health_deserializes_snake_case() {
        let parsed: ServiceHealth = serde_json::from_str("\"outage\"").unwrap();
        assert_eq!(parsed, ServiceHealth::Outage);
    }
}
