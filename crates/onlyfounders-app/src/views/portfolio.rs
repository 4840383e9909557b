// SPDX-License-Identifier: Apache-2.0

use onlyfounders_funding::{summarize, PortfolioSummary};
use onlyfounders_model::{Catalog, Category, LaunchState, ProjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioTab {
    #[default]
    Investments,
    Launched,
}

impl PortfolioTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Investments => "investments",
            Self::Launched => "launched",
        }
    }

    /// Unknown names select the investments tab.
    #[must_use]
    pub fn from_name(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "launched" | "projects" => Self::Launched,
            _ => Self::Investments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingRow {
    pub project_id: ProjectId,
    pub name: String,
    pub ticker: String,
    pub invested: f64,
    pub current_value: f64,
    pub token_quantity: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
    pub acquired_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchedRow {
    pub id: ProjectId,
    pub name: String,
    pub ticker: String,
    pub category: Category,
    #[serde(flatten)]
    pub state: LaunchState,
    /// Raised over target as a whole percent; `"0%"` without a target.
    pub success_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    pub tab: PortfolioTab,
    pub total_invested: f64,
    pub total_current_value: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
    pub holdings: Vec<HoldingRow>,
    pub launched: Vec<LaunchedRow>,
}

#[must_use]
pub fn portfolio_view(catalog: &Catalog, tab: PortfolioTab) -> PortfolioView {
    let PortfolioSummary {
        total_invested,
        total_current_value,
        total_pnl,
        total_pnl_percent,
        holdings,
    } = summarize(&catalog.investments);

    let holdings = holdings
        .into_iter()
        .zip(&catalog.investments)
        .map(|(h, inv)| {
            let project = catalog.project(h.project_id.as_str());
            HoldingRow {
                name: project.map_or_else(|| h.project_id.to_string(), |p| p.name.clone()),
                ticker: project.map(|p| p.ticker.clone()).unwrap_or_default(),
                project_id: h.project_id,
                invested: h.invested,
                current_value: h.current_value,
                token_quantity: h.token_quantity,
                pnl: h.pnl,
                pnl_percent: h.pnl_percent,
                acquired_date: inv.acquired_date.clone(),
            }
        })
        .collect();

    let launched = catalog
        .launched
        .iter()
        .map(|l| LaunchedRow {
            id: l.id.clone(),
            name: l.name.clone(),
            ticker: l.ticker.clone(),
            category: l.category,
            success_rate: match &l.state {
                LaunchState::Approved { raised, target, .. } if *target > 0.0 => {
                    Some(format!("{:.0}%", raised / target * 100.0))
                }
                LaunchState::Approved { .. } => Some("0%".to_string()),
                LaunchState::InReview { .. } => None,
            },
            state: l.state.clone(),
        })
        .collect();

    PortfolioView {
        tab,
        total_invested,
        total_current_value,
        total_pnl,
        total_pnl_percent,
        holdings,
        launched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn investments_tab_totals_and_names() {
        let catalog = Catalog::builtin().expect("catalog");
        let view = portfolio_view(&catalog, PortfolioTab::from_name("bogus"));
        assert_eq!(view.tab, PortfolioTab::Investments);
        assert_eq!(view.total_invested, 8_500.0);
        assert_eq!(view.total_pnl, 350.0);
        assert_eq!(view.holdings[0].name, "LiquidBridge");
        assert_eq!(view.holdings[2].pnl, -800.0);
    }

    #[test]
    fn launched_tab_reports_success_rate_for_approved_only() {
        let catalog = Catalog::builtin().expect("catalog");
        let view = portfolio_view(&catalog, PortfolioTab::Launched);
        assert_eq!(view.launched[0].success_rate.as_deref(), Some("170%"));
        assert_eq!(view.launched[1].success_rate, None);
        let json = serde_json::to_value(&view.launched[1]).expect("encode");
        assert_eq!(json["status"], "in-review");
        assert_eq!(json["submitted"], "2024-11-22");
    }
}
