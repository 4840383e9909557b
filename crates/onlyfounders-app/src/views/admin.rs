// SPDX-License-Identifier: Apache-2.0

use onlyfounders_funding::FundingProgress;
use onlyfounders_model::{
    Catalog, PendingProject, PlatformStats, PlatformUser, ProjectId, UserAction, UserStatus,
};
use onlyfounders_query::{filter_listings, CatalogFilter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminTab {
    #[default]
    Pending,
    Users,
    Analytics,
    Approved,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [Self::Pending, Self::Users, Self::Analytics, Self::Approved];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Users => "users",
            Self::Analytics => "analytics",
            Self::Approved => "approved",
        }
    }

    /// Unknown names select the review queue.
    #[must_use]
    pub fn from_name(input: &str) -> Self {
        let wanted = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    #[serde(flatten)]
    pub user: PlatformUser,
    pub actions: Vec<UserAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovedRow {
    pub id: ProjectId,
    pub name: String,
    pub ticker: String,
    pub approved_date: String,
    pub raised: f64,
    pub target: f64,
    pub contributors: u32,
    pub status: String,
    pub progress: FundingProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminView {
    pub tab: AdminTab,
    pub pending_total: usize,
    pub pending: Vec<PendingProject>,
    pub users: Vec<UserRow>,
    pub analytics: PlatformStats,
    pub approved: Vec<ApprovedRow>,
}

fn available_actions(status: UserStatus) -> Vec<UserAction> {
    UserAction::ALL
        .into_iter()
        .filter(|a| a.resulting_status() != status)
        .collect()
}

#[must_use]
pub fn admin_view(catalog: &Catalog, tab: AdminTab, pending_filter: &CatalogFilter) -> AdminView {
    let pending = filter_listings(&catalog.pending, pending_filter)
        .into_iter()
        .cloned()
        .collect();
    let users = catalog
        .users
        .iter()
        .map(|u| UserRow {
            user: u.clone(),
            actions: available_actions(u.status),
        })
        .collect();
    let approved = catalog
        .approved()
        .map(|p| ApprovedRow {
            id: p.id.clone(),
            name: p.name.clone(),
            ticker: p.ticker.clone(),
            approved_date: p.approved_date.clone().unwrap_or_default(),
            raised: p.committed,
            target: p.min_raise,
            contributors: p.contributors,
            status: p.status.as_str().to_string(),
            progress: FundingProgress::complete(p.committed, p.min_raise),
        })
        .collect();
    AdminView {
        tab,
        pending_total: catalog.pending.len(),
        pending,
        users,
        analytics: catalog.stats.clone(),
        approved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_queue_filters_by_category_and_risk() {
        let catalog = Catalog::builtin().expect("catalog");
        let filter = CatalogFilter::from_params(Some(""), Some("AI"), None, Some("low"))
            .expect("filter");
        let view = admin_view(&catalog, AdminTab::Pending, &filter);
        assert_eq!(view.pending_total, 3);
        assert_eq!(view.pending.len(), 1);
        assert_eq!(view.pending[0].ticker, "AION");
    }

    #[test]
    fn users_offer_only_actions_that_change_status() {
        let catalog = Catalog::builtin().expect("catalog");
        let view = admin_view(&catalog, AdminTab::Users, &CatalogFilter::default());
        assert_eq!(view.users[0].actions, vec![UserAction::Ban]);
        assert_eq!(view.users[2].actions, vec![UserAction::Verify, UserAction::Ban]);
    }

    #[test]
    fn approved_tab_lists_reviewed_projects() {
        let catalog = Catalog::builtin().expect("catalog");
        let view = admin_view(&catalog, AdminTab::from_name("APPROVED"), &CatalogFilter::default());
        assert_eq!(view.tab, AdminTab::Approved);
        let names: Vec<&str> = view.approved.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["LiquidBridge", "Omnipair"]);
        assert_eq!(view.approved[0].approved_date, "2024-11-01");
        assert_eq!(view.analytics.total_users, 15_432);
    }
}
