// SPDX-License-Identifier: Apache-2.0

use onlyfounders_model::{Investment, ProjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingSummary {
    pub project_id: ProjectId,
    pub invested: f64,
    pub current_value: f64,
    pub token_quantity: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_invested: f64,
    pub total_current_value: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
    pub holdings: Vec<HoldingSummary>,
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Totals and per-holding profit for a list of investments. An empty or
/// zero-cost portfolio reports a 0% return.
#[must_use]
pub fn summarize(investments: &[Investment]) -> PortfolioSummary {
    let holdings: Vec<HoldingSummary> = investments
        .iter()
        .map(|inv| HoldingSummary {
            project_id: inv.project_id.clone(),
            invested: inv.invested_amount,
            current_value: inv.current_value,
            token_quantity: inv.token_quantity,
            pnl: inv.pnl(),
            pnl_percent: percent_of(inv.pnl(), inv.invested_amount),
        })
        .collect();
    let total_invested: f64 = holdings.iter().map(|h| h.invested).sum();
    let total_current_value: f64 = holdings.iter().map(|h| h.current_value).sum();
    let total_pnl = total_current_value - total_invested;
    PortfolioSummary {
        total_invested,
        total_current_value,
        total_pnl,
        total_pnl_percent: percent_of(total_pnl, total_invested),
        holdings,
    }
}
