// SPDX-License-Identifier: Apache-2.0

use onlyfounders_model::{Catalog, Project, ProjectDetail, ProjectId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Discover,
    Create,
    Portfolio,
    Admin,
    Project,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Self::Home,
        Self::Discover,
        Self::Create,
        Self::Portfolio,
        Self::Admin,
        Self::Project,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Discover => "discover",
            Self::Create => "create",
            Self::Portfolio => "portfolio",
            Self::Admin => "admin",
            Self::Project => "project",
        }
    }

    /// Unknown names land on the home page.
    #[must_use]
    pub fn from_name(input: &str) -> Self {
        let wanted = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .unwrap_or_default()
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which page is showing and, on the project page, which project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Navigator {
    page: Page,
    selected_project: Option<ProjectId>,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&ProjectId> {
        self.selected_project.as_ref()
    }

    pub fn navigate(&mut self, page: Page) {
        if page != Page::Project {
            self.selected_project = None;
        }
        tracing::debug!(from = %self.page, to = %page, "navigate");
        self.page = page;
    }

    pub fn open_project(&mut self, id: ProjectId) {
        tracing::debug!(project = %id, "open project");
        self.selected_project = Some(id);
        self.page = Page::Project;
    }
}

/// Resolves the project shown on the funding page. Projects without a
/// detail record, and unknown or missing ids, fall back to `default_id`.
#[must_use]
pub fn resolve_project_page<'a>(
    catalog: &'a Catalog,
    selected: Option<&ProjectId>,
    default_id: &str,
) -> Option<(&'a Project, &'a ProjectDetail)> {
    let lookup = |id: &str| Some((catalog.project(id)?, catalog.detail(id)?));
    selected
        .and_then(|id| lookup(id.as_str()))
        .or_else(|| lookup(default_id))
}
