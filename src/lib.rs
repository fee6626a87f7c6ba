//! # Verimail (email ownership verification)
//!
//! `verimail` holds both halves of the email verification step that follows
//! signup:
//!
//! - [`verification`]: a headless form model that collects an email address
//!   and a six digit one-time passcode, validates them, submits them to the
//!   backend and reports the outcome through a transient notification. A
//!   confirmed success redirects to the login view through an injected
//!   [`verification::Navigator`].
//! - [`errors`]: the backend error type. Every kind carries a fixed HTTP
//!   status and is translated into a JSON `{ "message": .. }` response in one
//!   place.
//!
//! The `verimail` binary drives one form submission from the terminal.
//!
//! ## Secrets
//!
//! The one-time passcode is a credential. It is redacted from `Debug` output
//! and must never be logged.

pub mod cli;
pub mod errors;
pub mod verification;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
