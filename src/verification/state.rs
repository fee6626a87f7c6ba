use super::navigation::LOGIN_ROUTE;

/// Lifecycle of one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded {
        message: String,
    },
    Failed {
        message: String,
    },
}

impl SubmissionState {
    /// True while the submit control shows the spinner.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Pending | Self::Succeeded { .. })
    }

    /// A new attempt may start from `Idle` or after a failure.
    #[must_use]
    pub const fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }

    /// Route to follow once the outcome notification goes away.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Succeeded { .. } => Some(LOGIN_ROUTE),
            Self::Idle | Self::Pending | Self::Failed { .. } => None,
        }
    }

    /// Message attached to a terminal state.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded { message } | Self::Failed { message } => Some(message),
            Self::Idle | Self::Pending => None,
        }
    }
}
