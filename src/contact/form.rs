use crate::error::SiteError;
use serde::{Deserialize, Serialize};

/// What the message is about; routes it to the right inbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    #[default]
    General,
    Support,
    Business,
    Press,
    Feedback,
}

impl InquiryType {
    pub const ALL: [InquiryType; 5] = [
        InquiryType::General,
        InquiryType::Support,
        InquiryType::Business,
        InquiryType::Press,
        InquiryType::Feedback,
    ];

    /// Value used in the `<select>` element
    pub fn value(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Support => "support",
            InquiryType::Business => "business",
            InquiryType::Press => "press",
            InquiryType::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Support => "Technical Support",
            InquiryType::Business => "Business & Partnerships",
            InquiryType::Press => "Press & Media",
            InquiryType::Feedback => "Product Feedback",
        }
    }

    /// Unknown values fall back to a general inquiry.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.value() == value)
            .unwrap_or_default()
    }
}

/// Contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub inquiry_type: InquiryType,
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}

impl ContactForm {
    /// True when nothing has been typed yet.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Every text field is required; the email only has to look like one.
    pub fn validate(&self) -> Result<(), SiteError> {
        let required = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SiteError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(SiteError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada Traveler".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Group trip to Lisbon".to_string(),
            message: "Can six of us edit the same itinerary?".to_string(),
            inquiry_type: InquiryType::Support,
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_each_required_field() {
        let cases: [(&str, fn(&mut ContactForm)); 4] = [
            ("Name", |f| f.name.clear()),
            ("Email", |f| f.email.clear()),
            ("Subject", |f| f.subject = "   ".to_string()),
            ("Message", |f| f.message.clear()),
        ];
        for (field, blank) in cases {
            let mut form = filled_form();
            blank(&mut form);
            match form.validate() {
                Err(SiteError::MissingField(missing)) => assert_eq!(missing, field),
                other => panic!("{}: expected MissingField, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "@example.com", "ada@", "ada@@example.com", "ada lovelace@example.com"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..filled_form()
            };
            assert!(
                matches!(form.validate(), Err(SiteError::InvalidEmail)),
                "{:?} should be rejected",
                bad
            );
        }
        // Surrounding whitespace is tolerated
        let form = ContactForm {
            email: " ada@example.com ".to_string(),
            ..filled_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_inquiry_type_values() {
        for t in InquiryType::ALL {
            assert_eq!(InquiryType::from_value(t.value()), t);
        }
        assert_eq!(InquiryType::from_value("sales"), InquiryType::General);
        assert_eq!(InquiryType::default(), InquiryType::General);
    }

    #[test]
    fn test_default_form_is_blank() {
        assert!(ContactForm::default().is_blank());
        assert!(!filled_form().is_blank());
    }
}
