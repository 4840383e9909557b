// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::project::{Category, ProjectId};

/// A holding in the user's portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Investment {
    pub project_id: ProjectId,
    pub invested_amount: f64,
    pub token_quantity: f64,
    pub current_value: f64,
    pub acquired_date: String,
}

impl Investment {
    #[must_use]
    pub fn pnl(&self) -> f64 {
        self.current_value - self.invested_amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum LaunchState {
    Approved {
        launched: String,
        raised: f64,
        target: f64,
        contributors: u32,
    },
    InReview {
        submitted: String,
    },
}

/// A project the current user submitted to the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchedProject {
    pub id: ProjectId,
    pub name: String,
    pub ticker: String,
    pub category: Category,
    #[serde(flatten)]
    pub state: LaunchState,
}
