// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::project::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectLinks {
    pub website: String,
    pub docs: String,
    pub twitter: String,
    pub discord: String,
    pub github: String,
}

/// Long-form information shown on the project funding page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDetail {
    pub project_id: ProjectId,
    pub monthly_allowance: f64,
    pub overview: String,
    pub token_address: String,
    pub expected_tokens: f64,
    pub links: ProjectLinks,
}
