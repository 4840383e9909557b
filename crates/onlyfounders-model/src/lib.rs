// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Launchpad model SSOT: one record type per concept, shared by every page.

mod admin;
mod catalog;
mod detail;
mod draft;
mod investment;
mod project;

pub use admin::{PendingProject, PlatformStats, PlatformUser, UserAction, UserStatus};
pub use catalog::Catalog;
pub use detail::{ProjectDetail, ProjectLinks};
pub use draft::{DraftField, FieldGroup, FormDraft};
pub use investment::{Investment, LaunchState, LaunchedProject};
pub use project::{
    Category, Project, ProjectId, ProjectStatus, RiskLevel, ValidationError,
    PROJECT_ID_MAX_LEN, TICKER_MAX_LEN,
};

pub const CRATE_NAME: &str = "onlyfounders-model";
