//! Contact form message and its validated wire shape.

use crate::domain::{EmailAddress, ValidationError};
use serde::Serialize;

/// One contact form submission, captured from live form state.
///
/// Fields hold the raw values as typed by the visitor; nothing is trimmed
/// or checked until [`ContactMessage::validate`] runs. The value is never
/// persisted and is discarded once the request resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    /// Visitor's name (required)
    pub name: String,

    /// Visitor's email address (required)
    pub email: String,

    /// Phone number (optional, no format constraint)
    pub phone: String,

    /// Message subject (optional)
    pub subject: String,

    /// The message body (required)
    pub message: String,

    /// Hidden-field value. Humans never see this field, so a non-empty
    /// value marks the submission as automated.
    pub honeypot: String,
}

impl ContactMessage {
    /// True when the hidden honeypot field was filled in.
    pub fn is_trap(&self) -> bool {
        !self.honeypot.trim().is_empty()
    }

    /// Validate the required fields and produce the wire payload.
    ///
    /// `name` and `message` must be non-empty after trimming and `email`
    /// must match the basic email shape. The honeypot value does not
    /// carry over into the payload.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's `ValidationError`, with wording
    /// suitable for showing to the visitor directly.
    pub fn validate(&self) -> Result<ContactPayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyField("email"));
        }
        let email = EmailAddress::new(email)?;

        let message = self.message.trim();
        if message.is_empty() {
            return Err(ValidationError::EmptyField("message"));
        }

        Ok(ContactPayload {
            name: name.to_string(),
            email,
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: message.to_string(),
        })
    }
}

/// Validated contact message in the shape of the `/api/contact` wire body.
///
/// Built only through [`ContactMessage::validate`], so the email is known
/// to be well-formed and the honeypot field is excluded by construction.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPayload {
    /// Visitor's name, trimmed
    pub name: String,

    /// Validated email address
    pub email: EmailAddress,

    /// Phone number, trimmed (may be empty)
    pub phone: String,

    /// Subject, trimmed (may be empty)
    pub subject: String,

    /// Message body, trimmed
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_message() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            subject: "Analytical engines".to_string(),
            message: "I have a proposal for you.".to_string(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn test_validate_accepts_filled_message() {
        let payload = filled_message().validate().unwrap();
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email.as_str(), "ada@example.com");
        assert_eq!(payload.message, "I have a proposal for you.");
    }

    #[test]
    fn test_validate_trims_fields() {
        let mut message = filled_message();
        message.name = "  Ada Lovelace \n".to_string();
        message.email = " ada@example.com ".to_string();
        message.message = "\tHello.  ".to_string();

        let payload = message.validate().unwrap();
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email.as_str(), "ada@example.com");
        assert_eq!(payload.message, "Hello.");
    }

    #[test]
    fn test_validate_rejects_missing_required_fields() {
        for field in ["name", "email", "message"] {
            for value in ["", "   ", "\t\n"] {
                let mut message = filled_message();
                match field {
                    "name" => message.name = value.to_string(),
                    "email" => message.email = value.to_string(),
                    _ => message.message = value.to_string(),
                }

                let err = message.validate().unwrap_err();
                assert_eq!(
                    err,
                    ValidationError::EmptyField(field),
                    "expected {} to be reported missing for value {:?}",
                    field,
                    value
                );
            }
        }
    }

    #[test]
    fn test_validate_rejects_bad_email_even_with_valid_rest() {
        for bad in ["plainaddress", "user@domain", "user @example.com", "a@b"] {
            let mut message = filled_message();
            message.email = bad.to_string();

            let err = message.validate().unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidEmail(_)),
                "expected {:?} to be rejected as invalid email",
                bad
            );
        }
    }

    #[test]
    fn test_validate_allows_empty_optional_fields() {
        let mut message = filled_message();
        message.phone = String::new();
        message.subject = String::new();

        let payload = message.validate().unwrap();
        assert_eq!(payload.phone, "");
        assert_eq!(payload.subject, "");
    }

    #[test]
    fn test_trap_detection() {
        let mut message = filled_message();
        assert!(!message.is_trap());

        message.honeypot = "https://spam.example".to_string();
        assert!(message.is_trap());

        // Whitespace alone is not a trap signal
        message.honeypot = "   ".to_string();
        assert!(!message.is_trap());
    }

    #[test]
    fn test_payload_serializes_wire_fields_only() {
        let payload = filled_message().validate().unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["email", "message", "name", "phone", "subject"]);
        assert_eq!(object["email"], "ada@example.com");
    }
}
