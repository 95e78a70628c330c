use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::FormEndpoint;

pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 10;

// No leading, trailing or doubled dots in the local part; dotted domain with
// an alphabetic TLD of two or more letters.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*",
        r"@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    ))
    .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Validation result per field; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// The raw strings currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Length as a browser reports it, in UTF-16 code units, so an emoji
/// outside the basic plane counts twice.
fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

impl InquiryDraft {
    /// Checks every field at once. Values are measured untrimmed.
    pub fn validate(&self) -> Result<ContactInquiry, FieldErrors> {
        let errors = FieldErrors {
            name: (input_length(&self.name) < NAME_MIN_LEN).then_some(FieldError::NameTooShort),
            email: (!is_valid_email(&self.email)).then_some(FieldError::InvalidEmail),
            message: (input_length(&self.message) < MESSAGE_MIN_LEN)
                .then_some(FieldError::MessageTooShort),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let phone = (!self.phone.trim().is_empty()).then(|| self.phone.clone());
        Ok(ContactInquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            phone,
            message: self.message.clone(),
        })
    }
}

/// Ordered `(entry id, value)` pairs sent as the form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload(pub Vec<(String, String)>);

#[cfg(test)]
impl FormPayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl ContactInquiry {
    pub fn encode(&self, endpoint: &FormEndpoint) -> FormPayload {
        let mut pairs = vec![
            (endpoint.name_field.clone(), self.name.clone()),
            (endpoint.email_field.clone(), self.email.clone()),
        ];
        if let Some(phone) = &self.phone {
            pairs.push((endpoint.phone_field.clone(), phone.clone()));
        }
        pairs.push((endpoint.message_field.clone(), self.message.clone()));
        FormPayload(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> FormEndpoint {
        FormEndpoint {
            action_url: "https://forms.example.com/formResponse".to_string(),
            name_field: "entry.1".to_string(),
            email_field: "entry.2".to_string(),
            phone_field: "entry.3".to_string(),
            message_field: "entry.4".to_string(),
        }
    }

    fn jane() -> InquiryDraft {
        InquiryDraft {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            message: "Please give me a quote for a new roof".to_string(),
        }
    }

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "jane@example.com",
            "j.doe+roof@mail.example.co.uk",
            "o'neil@roofs.io",
            "a_b-c@x-y.org",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "jane",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@example.c",
            ".jane@example.com",
            "jane.@example.com",
            "ja..ne@example.com",
            "jane doe@example.com",
            "jane@-example.com",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn valid_draft_drops_blank_phone() {
        let inquiry = jane().validate().unwrap();
        assert_eq!(inquiry.phone, None);

        let payload = inquiry.encode(&endpoint());
        assert_eq!(payload.len(), 3);
        assert_eq!(payload.get("entry.1"), Some("Jane Doe"));
        assert_eq!(payload.get("entry.2"), Some("jane@example.com"));
        assert_eq!(payload.get("entry.3"), None);
        assert_eq!(payload.get("entry.4"), Some("Please give me a quote for a new roof"));
    }

    #[test]
    fn whitespace_phone_counts_as_blank() {
        let draft = InquiryDraft { phone: "   ".to_string(), ..jane() };
        assert_eq!(draft.validate().unwrap().phone, None);
    }

    #[test]
    fn phone_is_sent_verbatim_when_present() {
        let draft = InquiryDraft { phone: "(123) 456-7890".to_string(), ..jane() };
        let payload = draft.validate().unwrap().encode(&endpoint());
        let keys: Vec<&str> = payload.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["entry.1", "entry.2", "entry.3", "entry.4"]);
        assert_eq!(payload.get("entry.3"), Some("(123) 456-7890"));
    }

    #[test]
    fn each_short_field_gets_its_own_error() {
        let draft = InquiryDraft {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            phone: String::new(),
            message: "Too short".to_string(),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameTooShort));
        assert_eq!(errors.email, Some(FieldError::InvalidEmail));
        assert_eq!(errors.message, Some(FieldError::MessageTooShort));
        assert_eq!(errors.name.unwrap().to_string(), "Name must be at least 2 characters");
    }

    #[test]
    fn boundaries_are_inclusive() {
        let draft = InquiryDraft {
            name: "Jo".to_string(),
            message: "0123456789".to_string(),
            ..jane()
        };
        assert!(draft.validate().is_ok());

        let draft = InquiryDraft { message: "012345678".to_string(), ..jane() };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors,
            FieldErrors { message: Some(FieldError::MessageTooShort), ..Default::default() }
        );
    }

    #[test]
    fn lengths_count_utf16_units_not_bytes() {
        let draft = InquiryDraft { name: "Ø".to_string(), ..jane() };
        assert_eq!(draft.validate().unwrap_err().name, Some(FieldError::NameTooShort));

        let draft = InquiryDraft { name: "Åsa".to_string(), ..jane() };
        assert!(draft.validate().is_ok());

        // a supplementary-plane emoji is two code units
        let draft = InquiryDraft { name: "😀".to_string(), ..jane() };
        assert!(draft.validate().is_ok());

        let draft = InquiryDraft { message: "😀😀😀😀😀".to_string(), ..jane() };
        assert!(draft.validate().is_ok());
    }
}
