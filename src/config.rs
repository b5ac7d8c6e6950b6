use crate::error::SiteError;
use crate::logging::log_warning;
use serde::Deserialize;
use std::time::Duration;

const EMBEDDED_CONFIG: &str = include_str!("../site.json");

/// Site-wide settings, read once at startup and shared through context.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_support_email")]
    pub support_email: String,
    #[serde(default = "default_press_email")]
    pub press_email: String,
    #[serde(default = "default_contact_latency_ms")]
    pub contact_latency_ms: u64,
    #[serde(default = "default_contact_confirmation_ms")]
    pub contact_confirmation_ms: u64,
}

fn default_app_name() -> String {
    "Tripmate".to_string()
}

fn default_support_email() -> String {
    "support@tripmate.app".to_string()
}

fn default_press_email() -> String {
    "press@tripmate.app".to_string()
}

fn default_contact_latency_ms() -> u64 {
    1500
}

fn default_contact_confirmation_ms() -> u64 {
    3000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            support_email: default_support_email(),
            press_email: default_press_email(),
            contact_latency_ms: default_contact_latency_ms(),
            contact_confirmation_ms: default_contact_confirmation_ms(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        serde_json::from_str(json).map_err(SiteError::Config)
    }

    /// Load the configuration compiled into the binary.
    ///
    /// A malformed file is not fatal: the site renders with defaults and
    /// a console warning.
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            log_warning(&format!("{} (using defaults)", e));
            Self::default()
        })
    }

    pub fn contact_latency(&self) -> Duration {
        Duration::from_millis(self.contact_latency_ms)
    }

    pub fn contact_confirmation(&self) -> Duration {
        Duration::from_millis(self.contact_confirmation_ms)
    }
}
