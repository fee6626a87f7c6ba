//! Headless verification form. It owns the input values, touched flags, the
//! submission state and the outcome notification; a renderer reads them and
//! forwards user events. Navigation happens only when a success notification
//! is dismissed, through the injected [`Navigator`].

use super::{
    client::{SubmissionError, VerificationTransport},
    navigation::Navigator,
    notification::Notification,
    schema::{self, Field, FieldErrors, ValidationError},
    state::SubmissionState,
    types::VerificationRequest,
};
use std::{collections::HashSet, time::Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// What the submit control shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitLabel {
    Spinner,
    Text(&'static str),
}

/// Reasons a submit attempt never reached the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("form has validation errors")]
    Invalid(FieldErrors),
    #[error("a submission is already in progress")]
    InFlight,
}

pub struct VerificationForm<T, N> {
    values: VerificationRequest,
    touched: HashSet<Field>,
    state: SubmissionState,
    notification: Option<Notification>,
    transport: T,
    navigator: N,
}

impl<T, N> VerificationForm<T, N>
where
    T: VerificationTransport,
    N: Navigator,
{
    pub fn new(transport: T, navigator: N) -> Self {
        Self {
            values: VerificationRequest::default(),
            touched: HashSet::new(),
            state: SubmissionState::Idle,
            notification: None,
            transport,
            navigator,
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.values.email = value.into();
    }

    pub fn set_otp(&mut self, value: impl Into<String>) {
        self.values.otp = value.into();
    }

    /// Marks a field as interacted with, so its error becomes visible.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        schema::validate(&self.values)
    }

    /// Error to render under a field; hidden until the field is touched.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<ValidationError> {
        if self.is_touched(field) {
            self.errors().get(field)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    #[must_use]
    pub const fn submit_label(&self) -> SubmitLabel {
        if self.state.is_busy() {
            SubmitLabel::Spinner
        } else {
            SubmitLabel::Text("Submit")
        }
    }

    #[must_use]
    pub const fn is_submit_disabled(&self) -> bool {
        !self.state.accepts_submit()
    }

    /// Starts an attempt: touches every field, validates, and moves to `Pending`.
    ///
    /// # Errors
    /// Returns [`SubmitBlocked::InFlight`] while an attempt is running or a
    /// success is awaiting its redirect, and [`SubmitBlocked::Invalid`] when
    /// any field fails validation.
    pub fn begin_submit(&mut self) -> Result<VerificationRequest, SubmitBlocked> {
        for field in Field::ALL {
            self.touch(field);
        }

        if !self.state.accepts_submit() {
            debug!("submit ignored, attempt already in flight");
            return Err(SubmitBlocked::InFlight);
        }

        let errors = self.errors();
        if !errors.is_empty() {
            debug!(?errors, "submit blocked by validation");
            return Err(SubmitBlocked::Invalid(errors));
        }

        // A retry replaces the previous outcome's notification.
        self.notification = None;
        self.state = SubmissionState::Pending;
        Ok(self.values.clone())
    }

    /// Applies the outcome of the pending attempt and shows it as a notification.
    /// Outcomes arriving outside `Pending` are ignored.
    pub fn complete(&mut self, result: Result<String, SubmissionError>) {
        self.complete_at(result, Instant::now());
    }

    fn complete_at(&mut self, result: Result<String, SubmissionError>, now: Instant) {
        if self.state != SubmissionState::Pending {
            warn!("ignoring verification outcome outside of a pending attempt");
            return;
        }

        self.state = match result {
            Ok(message) => {
                info!("email verification succeeded");
                SubmissionState::Succeeded { message }
            }
            Err(err) => {
                info!(kind = ?err.kind, "email verification failed");
                SubmissionState::Failed {
                    message: err.message,
                }
            }
        };

        self.notification = self
            .state
            .message()
            .map(|message| Notification::new(message, now));
    }

    /// Runs a full attempt against the transport.
    ///
    /// # Errors
    /// Returns [`SubmitBlocked`] when the attempt never reached the network.
    pub async fn submit(&mut self) -> Result<&SubmissionState, SubmitBlocked> {
        let request = self.begin_submit()?;
        let result = self.transport.verify(&request).await;
        self.complete(result);
        Ok(&self.state)
    }

    /// Dismisses the current notification, by timeout or user action. After a
    /// success the navigator is sent to the login route. Returns the route
    /// followed, if any. Only a terminal state returns to `Idle`; a pending
    /// attempt is left untouched.
    pub fn dismiss_notification(&mut self) -> Option<&'static str> {
        self.notification.take()?;

        match self.state {
            SubmissionState::Succeeded { .. } | SubmissionState::Failed { .. } => {
                let target = self.state.redirect_target();
                if let Some(path) = target {
                    self.navigator.navigate_to(path);
                }
                self.state = SubmissionState::Idle;
                target
            }
            SubmissionState::Idle | SubmissionState::Pending => None,
        }
    }

    /// Dismisses the notification once its life has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<&'static str> {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.is_expired(now))
        {
            self.dismiss_notification()
        } else {
            None
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    #[must_use]
    pub const fn values(&self) -> &VerificationRequest {
        &self.values
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}
