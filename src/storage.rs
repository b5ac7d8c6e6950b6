use crate::contact::{ContactForm, ContactState};
use crate::error::SiteError;
use crate::logging::log_warning;
use wasm_bindgen::prelude::*;

const DRAFT_KEY: &str = "tripmate_contact_draft";
const SCROLL_KEY: &str = "tripmate_scroll";

/// Attempts to get the browser's localStorage.
///
/// Returns `None` outside a browser, when storage is disabled (private
/// browsing) or when access raises a SecurityError.
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Parse a stored draft. Fields missing from older drafts default to empty.
pub fn parse_draft(json: &str) -> Result<ContactForm, SiteError> {
    serde_json::from_str(json).map_err(SiteError::Draft)
}

/// Load the unsent contact form, if one was saved.
///
/// # Fallback Behavior
///
/// Returns an empty form if storage is unavailable, nothing was saved, or
/// the saved JSON is corrupt. The contact page always works without
/// persistence.
pub fn load_draft() -> ContactForm {
    let Some(storage) = get_storage() else {
        // Expected in private browsing, so no warning
        return ContactForm::default();
    };

    match storage.get_item(DRAFT_KEY) {
        Ok(Some(json)) => parse_draft(&json).unwrap_or_else(|e| {
            log_warning(&format!("{} (starting with an empty form)", e));
            ContactForm::default()
        }),
        Ok(None) => ContactForm::default(),
        Err(_) => {
            log_warning("Could not read contact draft from localStorage");
            ContactForm::default()
        }
    }
}

/// Keep localStorage in step with the contact page: save the draft while
/// the form is being edited, remove it otherwise (blank form, submission
/// under way, or sent).
///
/// Silently skips (with a console warning) if storage is unavailable or
/// full.
pub fn persist_draft(state: &ContactState) {
    let Some(form) = state.draft_to_persist() else {
        clear_draft();
        return;
    };
    let Some(storage) = get_storage() else {
        return;
    };

    let json = match serde_json::to_string(form) {
        Ok(j) => j,
        Err(e) => {
            log_warning(&format!("Failed to serialize contact draft: {}", e));
            return;
        }
    };

    if storage.set_item(DRAFT_KEY, &json).is_err() {
        log_warning(
            "Could not save contact draft to localStorage. \
             You may be in private browsing mode or storage quota exceeded.",
        );
    }
}

pub fn clear_draft() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(DRAFT_KEY);
    }
}

/// Drop every key this site stores. Used by the error fallback.
pub fn clear_all() {
    clear_draft();
    if let Some(session) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
        let _ = session.remove_item(SCROLL_KEY);
    }
}

/// Set up scroll restoration - call this once on app init
pub fn setup_scroll_restoration() {
    let Some(window) = web_sys::window() else {
        return;
    };

    // Take over from the browser's automatic restoration
    if let Ok(history) = window.history() {
        let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
    }

    let closure = Closure::wrap(Box::new(move || {
        if let Some(win) = web_sys::window() {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            if let Some(session) = win.session_storage().ok().flatten() {
                let _ = session.set_item(SCROLL_KEY, &scroll_y.to_string());
            }
        }
    }) as Box<dyn Fn()>);

    let _ = window.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn restore_scroll_position() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let saved = window
        .session_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(SCROLL_KEY).ok().flatten())
        .and_then(|v| v.parse::<f64>().ok());
    if let Some(scroll_y) = saved {
        window.scroll_to_with_x_and_y(0.0, scroll_y);
    }
}

/// Restore scroll position once the first render has landed.
pub fn restore_scroll_after_delay(delay_ms: u64) {
    leptos::set_timeout(
        restore_scroll_position,
        std::time::Duration::from_millis(delay_ms),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::InquiryType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_draft() {
        let json = r#"{
            "name": "Noor",
            "email": "noor@example.com",
            "subject": "Partnership",
            "message": "Hello!",
            "inquiry_type": "business"
        }"#;
        let form = parse_draft(json).unwrap();
        assert_eq!(form.name, "Noor");
        assert_eq!(form.inquiry_type, InquiryType::Business);
    }

    #[test]
    fn test_parse_partial_draft_uses_defaults() {
        // A draft saved before the subject field existed
        let form = parse_draft(r#"{ "name": "Noor", "message": "Hi" }"#).unwrap();
        assert_eq!(form.subject, "");
        assert_eq!(form.email, "");
        assert_eq!(form.inquiry_type, InquiryType::General);
    }

    #[test]
    fn test_parse_corrupt_draft() {
        assert!(matches!(parse_draft("{\"name\": 7"), Err(SiteError::Draft(_))));
        assert!(matches!(
            parse_draft(r#"{ "inquiry_type": "spam" }"#),
            Err(SiteError::Draft(_))
        ));
    }

    #[test]
    fn test_draft_serializes_to_parseable_json() {
        let form = ContactForm {
            name: "Noor".to_string(),
            message: "Line one\nLine \"two\"".to_string(),
            inquiry_type: InquiryType::Feedback,
            ..Default::default()
        };
        let json = serde_json::to_string(&form).unwrap();
        assert_eq!(parse_draft(&json).unwrap(), form);
    }
}
