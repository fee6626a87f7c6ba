//! Validation schema for the verification form. Rules run in declaration order
//! and only the first failure per field is reported, so an empty passcode says
//! "required" rather than "must be only digits".

use super::types::VerificationRequest;
use regex::Regex;
use thiserror::Error;

/// Number of digits in a one-time passcode.
pub const OTP_LENGTH: usize = 6;

// WHATWG `input[type=email]` grammar.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
const DIGITS_PATTERN: &str = r"^[0-9]+$";

/// Form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Otp,
}

impl Field {
    pub const ALL: [Self; 2] = [Self::Email, Self::Otp];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Otp => "otp",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required")]
    EmailRequired,
    #[error("Invalid Email Format")]
    InvalidEmailFormat,
    #[error("otp is a required field")]
    OtpRequired,
    #[error("Must be only digits")]
    OtpNotDigits,
    #[error("Must be exactly 6 digits")]
    OtpWrongLength,
}

/// First validation failure of each field, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub otp: Option<ValidationError>,
}

impl FieldErrors {
    #[must_use]
    pub const fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Email => self.email,
            Field::Otp => self.otp,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.otp.is_none()
    }
}

/// Validates the whole request.
#[must_use]
pub fn validate(request: &VerificationRequest) -> FieldErrors {
    FieldErrors {
        email: validate_email(&request.email).err(),
        otp: validate_otp(&request.otp).err(),
    }
}

/// # Errors
/// Returns the first failing rule for the email field.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !matches_pattern(EMAIL_PATTERN, email) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

/// # Errors
/// Returns the first failing rule for the passcode field.
pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if otp.is_empty() {
        return Err(ValidationError::OtpRequired);
    }
    if !matches_pattern(DIGITS_PATTERN, otp) {
        return Err(ValidationError::OtpNotDigits);
    }
    if otp.chars().count() != OTP_LENGTH {
        return Err(ValidationError::OtpWrongLength);
    }
    Ok(())
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, otp: &str) -> VerificationRequest {
        VerificationRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(validate(&request("user@example.com", "123456")).is_empty());
        assert!(validate(&request("first.last+tag@sub.example.co", "000000")).is_empty());
    }

    #[test]
    fn empty_email_is_required() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(ValidationError::EmailRequired.to_string(), "Required");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "us er@example.com",
            "user@exa mple.com",
            "user@-example.com",
            " user@example.com",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmailFormat),
                "{email} should be rejected"
            );
        }
        assert_eq!(
            ValidationError::InvalidEmailFormat.to_string(),
            "Invalid Email Format"
        );
    }

    #[test]
    fn empty_otp_reports_required_first() {
        assert_eq!(validate_otp(""), Err(ValidationError::OtpRequired));
    }

    #[test]
    fn non_numeric_otp_reports_digits_before_length() {
        assert_eq!(validate_otp("12a456"), Err(ValidationError::OtpNotDigits));
        assert_eq!(validate_otp("abc"), Err(ValidationError::OtpNotDigits));
        assert_eq!(validate_otp("12 456"), Err(ValidationError::OtpNotDigits));
        assert_eq!(
            ValidationError::OtpNotDigits.to_string(),
            "Must be only digits"
        );
    }

    #[test]
    fn otp_must_be_exactly_six_digits() {
        assert_eq!(validate_otp("12345"), Err(ValidationError::OtpWrongLength));
        assert_eq!(validate_otp("1234567"), Err(ValidationError::OtpWrongLength));
        assert_eq!(validate_otp("123456"), Ok(()));
        assert_eq!(
            ValidationError::OtpWrongLength.to_string(),
            "Must be exactly 6 digits"
        );
    }

    #[test]
    fn field_errors_lookup_by_field() {
        let errors = validate(&request("nope", "12"));
        assert_eq!(
            errors.get(Field::Email),
            Some(ValidationError::InvalidEmailFormat)
        );
        assert_eq!(errors.get(Field::Otp), Some(ValidationError::OtpWrongLength));
        assert!(!errors.is_empty());
    }
}
