// SPDX-License-Identifier: Apache-2.0

mod backend;
mod cancel;
mod gate;

use onlyfounders_funding::InvestmentRejection;
use onlyfounders_model::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub use backend::{InvestmentOrder, LaunchpadBackend, SimulatedBackend};
pub use cancel::{CancelSource, CancelToken};
pub use gate::{ActionGate, GateGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    InvestmentConfirmed,
    ProjectSubmitted,
    ProjectApproved,
    ProjectRejected,
    UserModerated,
}

/// Outcome message shown once a simulated action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ActionError {
    /// Amount outside the campaign's investment bounds.
    Rejected(InvestmentRejection),
    Validation(ValidationError),
    Cancelled,
    /// Another action from the same control is still in flight.
    Busy,
}

impl ActionError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Rejected(r) => r.code(),
            Self::Validation(_) => "validation",
            Self::Cancelled => "cancelled",
            Self::Busy => "busy",
        }
    }
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(r) => write!(f, "{r}"),
            Self::Validation(e) => write!(f, "{e}"),
            Self::Cancelled => write!(f, "action cancelled"),
            Self::Busy => write!(f, "another request is already in flight"),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<InvestmentRejection> for ActionError {
    fn from(value: InvestmentRejection) -> Self {
        Self::Rejected(value)
    }
}

impl From<ValidationError> for ActionError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
