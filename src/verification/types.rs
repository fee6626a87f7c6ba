//! Request and response payloads for the verify-email endpoint. The request
//! carries the one-time passcode, so its `Debug` output is redacted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body posted to the verify-email endpoint.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub email: String,
    pub otp: String,
}

impl fmt::Debug for VerificationRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VerificationRequest")
            .field("email", &self.email)
            .field("otp", &"[REDACTED]")
            .finish()
    }
}

/// `{ "message": .. }` body returned by the backend on success and on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_as_flat_json() -> Result<(), serde_json::Error> {
        let request = VerificationRequest {
            email: "user@example.com".to_string(),
            otp: "123456".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({ "email": "user@example.com", "otp": "123456" })
        );
        Ok(())
    }

    #[test]
    fn request_debug_redacts_otp() {
        let request = VerificationRequest {
            email: "user@example.com".to_string(),
            otp: "987654".to_string(),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("987654"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn message_body_tolerates_missing_field() -> Result<(), serde_json::Error> {
        let body: MessageBody = serde_json::from_str("{}")?;
        assert!(body.message.is_empty());
        Ok(())
    }
}
