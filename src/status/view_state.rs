use super::incident::{find_incident, Incident};
use crate::error::SiteError;

/// Which screen of the status page is showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    List,
    Detail(&'a Incident),
}

/// Local view state for the status page: either the incident list or the
/// timeline of one selected incident.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusView {
    selected: Option<Incident>,
}

impl StatusView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View<'_> {
        match &self.selected {
            Some(incident) => View::Detail(incident),
            None => View::List,
        }
    }

    pub fn selected(&self) -> Option<&Incident> {
        self.selected.as_ref()
    }

    pub fn is_detail(&self) -> bool {
        self.selected.is_some()
    }

    /// Show the given incident's timeline. Any incident is accepted, and
    /// selecting while already in detail view simply switches incidents.
    pub fn select_incident(&mut self, incident: Incident) {
        self.selected = Some(incident);
    }

    /// Select by id; an unknown id leaves the view untouched.
    pub fn select_by_id(&mut self, incidents: &[Incident], id: &str) -> Result<(), SiteError> {
        let incident = find_incident(incidents, id)?;
        self.selected = Some(incident.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
