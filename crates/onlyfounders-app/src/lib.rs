// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Launchpad session layer: navigation, the submission wizard, simulated
//! backend actions and per-page view models.

pub mod actions;
mod router;
mod session;
pub mod views;
mod wizard;

pub use actions::{
    ActionError, ActionGate, CancelSource, CancelToken, GateGuard, InvestmentOrder,
    LaunchpadBackend, Notification, NotificationKind, SimulatedBackend,
};
pub use router::{resolve_project_page, Navigator, Page};
pub use session::Launchpad;
pub use views::PageView;
pub use wizard::{FormNavigator, WizardStep, DESCRIPTION_MAX_CHARS};

pub const CRATE_NAME: &str = "onlyfounders-app";
