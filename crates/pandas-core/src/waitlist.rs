//! # Waitlist Signups
//!
//! Contact capture for prospective platform users (importers, agents,
//! suppliers). A signup needs a name and a well-formed email; everything
//! else is optional free text and is echoed back as submitted. Numbers and
//! booleans in the optional fields are kept as their text form.

use serde::{Deserialize, Deserializer, Serialize};

use crate::email::Email;
use crate::error::ValidationError;

/// `user_type` reported when the submitter did not give one.
pub const DEFAULT_USER_TYPE: &str = "unknown";

/// Raw waitlist submission as it arrives over the wire.
///
/// Every field is optional so that a missing name or email surfaces as
/// [`ValidationError::MissingContact`] instead of a deserializer error.
/// The optional fields also accept JSON numbers and booleans.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaitlistForm {
    /// Full name of the person signing up.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number, any format.
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: Option<String>,
    /// Company or trading name.
    #[serde(default, deserialize_with = "scalar_text")]
    pub company: Option<String>,
    /// Self-declared role, e.g. `importer` or `agent`.
    #[serde(default, deserialize_with = "scalar_text")]
    pub user_type: Option<String>,
    /// Region of operation.
    #[serde(default, deserialize_with = "scalar_text")]
    pub region: Option<String>,
}

impl WaitlistForm {
    /// Check required fields and the email format.
    ///
    /// Name and email are checked for presence first, so a submission that
    /// lacks a name is reported as missing even if its email is malformed.
    /// Only an absent or empty value counts as missing; whitespace is kept
    /// and, for the email, left to the format check.
    pub fn validate(self) -> Result<WaitlistSignup, ValidationError> {
        let name = present(self.name).ok_or(ValidationError::MissingContact)?;
        let email = present(self.email).ok_or(ValidationError::MissingContact)?;
        let email = Email::parse(email)?;

        Ok(WaitlistSignup {
            name,
            email,
            phone: self.phone,
            company: self.company,
            user_type: self.user_type,
            region: self.region,
        })
    }
}

/// A validated waitlist signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistSignup {
    /// Full name, as submitted.
    pub name: String,
    /// Validated contact email.
    pub email: Email,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional company.
    pub company: Option<String>,
    /// Optional self-declared role.
    pub user_type: Option<String>,
    /// Optional region.
    pub region: Option<String>,
}

impl WaitlistSignup {
    /// The submitted `user_type`, or [`DEFAULT_USER_TYPE`].
    pub fn user_type_or_default(&self) -> &str {
        self.user_type.as_deref().unwrap_or(DEFAULT_USER_TYPE)
    }
}

/// Treat empty strings the same as absent ones.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A scalar JSON value accepted in a free-text field.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Text(text) => text,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, email: Option<&str>) -> WaitlistForm {
        WaitlistForm {
            name: name.map(String::from),
            email: email.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn valid_signup_keeps_fields_unchanged() {
        let signup = WaitlistForm {
            name: Some("Amina Juma".into()),
            email: Some("amina@example.co.tz".into()),
            phone: Some("+255 700 000 000".into()),
            company: Some("Juma Imports".into()),
            user_type: Some("importer".into()),
            region: Some("East Africa".into()),
        }
        .validate()
        .unwrap();

        assert_eq!(signup.name, "Amina Juma");
        assert_eq!(signup.email.as_str(), "amina@example.co.tz");
        assert_eq!(signup.phone.as_deref(), Some("+255 700 000 000"));
        assert_eq!(signup.company.as_deref(), Some("Juma Imports"));
        assert_eq!(signup.user_type_or_default(), "importer");
        assert_eq!(signup.region.as_deref(), Some("East Africa"));
    }

    #[test]
    fn missing_name_or_email_is_rejected() {
        assert_eq!(
            form(None, Some("a@b.co")).validate(),
            Err(ValidationError::MissingContact)
        );
        assert_eq!(
            form(Some("A"), None).validate(),
            Err(ValidationError::MissingContact)
        );
        assert_eq!(
            form(Some(""), Some("a@b.co")).validate(),
            Err(ValidationError::MissingContact)
        );
        assert_eq!(
            form(Some("A"), Some("")).validate(),
            Err(ValidationError::MissingContact)
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        let signup = form(Some("   "), Some("a@b.co")).validate().unwrap();
        assert_eq!(signup.name, "   ");

        let err = form(Some("A"), Some("   ")).validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmail(_)));
    }

    #[test]
    fn missing_name_wins_over_bad_email() {
        assert_eq!(
            form(None, Some("not-an-email")).validate(),
            Err(ValidationError::MissingContact)
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = form(Some("A"), Some("a.example.com")).validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmail(_)));
    }

    #[test]
    fn user_type_defaults_to_unknown() {
        let signup = form(Some("A"), Some("a@b.co")).validate().unwrap();
        assert_eq!(signup.user_type_or_default(), DEFAULT_USER_TYPE);
        assert!(signup.user_type.is_none());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let form: WaitlistForm = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(form.name.as_deref(), Some("A"));
        assert!(form.email.is_none());
        assert!(form.region.is_none());
    }

    #[test]
    fn optional_fields_take_numbers_and_booleans_as_text() {
        let raw = r#"{"name":"A","email":"a@b.co","phone":255700,
            "company":false,"region":1.5,"user_type":null}"#;
        let form: WaitlistForm = serde_json::from_str(raw).unwrap();
        assert_eq!(form.phone.as_deref(), Some("255700"));
        assert_eq!(form.company.as_deref(), Some("false"));
        assert_eq!(form.region.as_deref(), Some("1.5"));
        assert!(form.user_type.is_none());
    }

    #[test]
    fn optional_fields_reject_nested_values() {
        let result: Result<WaitlistForm, _> =
            serde_json::from_str(r#"{"name":"A","email":"a@b.co","phone":[1,2]}"#);
        assert!(result.is_err());
    }
}
