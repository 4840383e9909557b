// SPDX-License-Identifier: Apache-2.0

use onlyfounders_core::sha256_hex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::admin::{PendingProject, PlatformStats, PlatformUser};
use crate::detail::ProjectDetail;
use crate::investment::{Investment, LaunchedProject};
use crate::project::{Category, Project, ProjectId, ValidationError};

const BUILTIN_CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

/// The single source of mock records shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub details: Vec<ProjectDetail>,
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub launched: Vec<LaunchedProject>,
    #[serde(default)]
    pub pending: Vec<PendingProject>,
    #[serde(default)]
    pub users: Vec<PlatformUser>,
    pub stats: PlatformStats,
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Result<Self, ValidationError> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ValidationError> {
        let catalog: Self = serde_json::from_str(raw)
            .map_err(|e| ValidationError(format!("catalog decode failed: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = BTreeSet::new();
        for project in &self.projects {
            ProjectId::parse(project.id.as_str())?;
            project.validate()?;
            if !seen.insert(project.id.as_str()) {
                return Err(ValidationError(format!(
                    "duplicate project id `{}`",
                    project.id
                )));
            }
        }
        for detail in &self.details {
            if !seen.contains(detail.project_id.as_str()) {
                return Err(ValidationError(format!(
                    "detail references unknown project `{}`",
                    detail.project_id
                )));
            }
        }
        for inv in &self.investments {
            if !seen.contains(inv.project_id.as_str()) {
                return Err(ValidationError(format!(
                    "investment references unknown project `{}`",
                    inv.project_id
                )));
            }
            if !inv.invested_amount.is_finite() || inv.invested_amount < 0.0 {
                return Err(ValidationError(format!(
                    "investment in `{}` has a negative amount",
                    inv.project_id
                )));
            }
        }
        let mut pending_ids = BTreeSet::new();
        for p in &self.pending {
            if !pending_ids.insert(p.id.as_str()) {
                return Err(ValidationError(format!("duplicate pending id `{}`", p.id)));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id.as_str() == id)
    }

    #[must_use]
    pub fn detail(&self, id: &str) -> Option<&ProjectDetail> {
        self.details.iter().find(|d| d.project_id.as_str() == id)
    }

    #[must_use]
    pub fn pending_project(&self, id: &str) -> Option<&PendingProject> {
        self.pending.iter().find(|p| p.id.as_str() == id)
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&PlatformUser> {
        self.users.iter().find(|u| u.id == id)
    }

    /// First project flagged as featured.
    #[must_use]
    pub fn featured(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.featured)
    }

    /// Projects that went through review, in catalog order.
    pub fn approved(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.approved_date.is_some())
    }

    /// Distinct categories present in the listing, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for p in &self.projects {
            if !out.contains(&p.category) {
                out.push(p.category);
            }
        }
        out
    }

    /// Content hash used as the catalog etag.
    pub fn fingerprint(&self) -> Result<String, ValidationError> {
        let bytes = serde_json::to_vec(self)
            .map_err(|e| ValidationError(format!("catalog encode failed: {e}")))?;
        Ok(sha256_hex(&bytes))
    }
}
