use thiserror::Error;

/// Everything that can go wrong on the site's client side.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email address looks invalid")]
    InvalidEmail,

    #[error("a message is already being sent")]
    SubmissionInFlight,

    #[error("no incident with id {0:?}")]
    IncidentNotFound(String),

    #[error("site configuration is malformed: {0}")]
    Config(#[source] serde_json::Error),

    #[error("stored contact draft is malformed: {0}")]
    Draft(#[source] serde_json::Error),
}
