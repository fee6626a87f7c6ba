//! Email verification form workflow.
//!
//! Flow overview: the user types an email and a six digit passcode; the
//! [`schema`] is re-evaluated on every change and errors show only for touched
//! fields. A submit attempt touches every field and, when the form is valid,
//! moves to `Pending` and posts `{email, otp}` to `/expressapi/verifyemail`.
//! The response (or any failure) is decoded into a message shown as a three
//! second notification. Dismissing a success notification redirects to
//! `/login`; dismissing a failure leaves the form ready for another attempt.
//!
//! The passcode is a credential and must never be logged.

pub mod client;
pub mod form;
pub mod navigation;
pub mod notification;
pub mod schema;
pub mod state;
pub mod types;

pub use client::{
    ClientConfig, HttpTransport, SubmissionError, SubmissionErrorKind, TransportBuildError,
    VerificationTransport,
};
pub use form::{SubmitBlocked, SubmitLabel, VerificationForm};
pub use navigation::{Navigator, RecordingNavigator, TerminalNavigator, LOGIN_ROUTE};
pub use notification::{Notification, NOTIFICATION_LIFE};
pub use schema::{Field, FieldErrors, ValidationError};
pub use state::SubmissionState;
pub use types::{MessageBody, VerificationRequest};
