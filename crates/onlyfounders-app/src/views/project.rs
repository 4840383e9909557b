// SPDX-License-Identifier: Apache-2.0

use onlyfounders_funding::{
    format_millions, format_percent, invest_enabled, parse_amount, quote, FundingProgress,
    InvestmentLimits, InvestmentRejection, Quote,
};
use onlyfounders_model::{
    Category, Project, ProjectDetail, ProjectId, ProjectLinks, ProjectStatus,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentPanel {
    pub amount_text: String,
    pub amount: f64,
    pub quick_amounts: Vec<f64>,
    pub min_investment: f64,
    pub max_investment: f64,
    pub token_price: f64,
    pub quote: Quote,
    /// Ownership share rounded for display, e.g. `0.084%`.
    pub ownership: String,
    pub rejection: Option<InvestmentRejection>,
    pub invest_enabled: bool,
    pub in_flight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPageView {
    pub id: ProjectId,
    pub name: String,
    pub ticker: String,
    pub category: Category,
    pub status_line: String,
    pub overview: String,
    pub committed: f64,
    pub minimum_target: f64,
    pub monthly_allowance: f64,
    pub progress: FundingProgress,
    pub token_address: String,
    pub links: ProjectLinks,
    pub token_supply: f64,
    /// Supply times price, in millions.
    pub valuation: String,
    pub investment: InvestmentPanel,
}

fn status_line(project: &Project) -> String {
    match project.status {
        ProjectStatus::Active => {
            format!("Active Launch - {} days remaining", project.days_left)
        }
        ProjectStatus::Upcoming => {
            format!("Upcoming Launch - opens in {} days", project.days_left)
        }
        ProjectStatus::Completed => "Launch Closed".to_string(),
    }
}

#[must_use]
pub fn project_view(
    project: &Project,
    detail: &ProjectDetail,
    quick_amounts: &[f64],
    amount_text: &str,
    in_flight: bool,
) -> ProjectPageView {
    let amount = parse_amount(amount_text);
    let limits = InvestmentLimits::for_project(project);
    let rejection = if amount_text.trim().is_empty() {
        None
    } else {
        limits.check(amount).err()
    };
    let q = quote(amount, project.token_price, project.committed);
    let investment = InvestmentPanel {
        amount_text: amount_text.to_string(),
        amount,
        quick_amounts: quick_amounts.to_vec(),
        min_investment: limits.min,
        max_investment: limits.max,
        token_price: project.token_price,
        ownership: format_percent(q.ownership_percent, 3),
        quote: q,
        rejection,
        invest_enabled: invest_enabled(amount, &limits, in_flight),
        in_flight,
    };
    ProjectPageView {
        id: project.id.clone(),
        name: project.name.clone(),
        ticker: project.ticker.clone(),
        category: project.category,
        status_line: status_line(project),
        overview: detail.overview.clone(),
        committed: project.committed,
        minimum_target: project.min_raise,
        monthly_allowance: detail.monthly_allowance,
        progress: FundingProgress::against_minimum(project.committed, project.min_raise),
        token_address: detail.token_address.clone(),
        links: detail.links.clone(),
        token_supply: detail.expected_tokens,
        valuation: format!(
            "${}M",
            format_millions(detail.expected_tokens * project.token_price)
        ),
        investment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onlyfounders_model::Catalog;

    fn liquidbridge(catalog: &Catalog) -> (&Project, &ProjectDetail) {
        (
            catalog.project("liquidbridge").expect("project"),
            catalog.detail("liquidbridge").expect("detail"),
        )
    }

    #[test]
    fn funding_page_header() {
        let catalog = Catalog::builtin().expect("catalog");
        let (p, d) = liquidbridge(&catalog);
        let view = project_view(p, d, &[250.0, 500.0, 1_000.0], "", false);
        assert_eq!(view.status_line, "Active Launch - 14 days remaining");
        assert_eq!(view.progress.label, "148% of $800,000 minimum");
        assert_eq!(view.valuation, "$4.0M");
        assert!(view.investment.rejection.is_none());
        assert!(!view.investment.invest_enabled);
        assert_eq!(view.investment.ownership, "0.000%");
    }

    #[test]
    fn quote_follows_the_typed_amount() {
        let catalog = Catalog::builtin().expect("catalog");
        let (p, d) = liquidbridge(&catalog);
        let view = project_view(p, d, &[], "1000", false);
        assert!((view.investment.quote.token_quantity - 2_500.0).abs() < 1e-9);
        assert_eq!(view.investment.ownership, "0.084%");
        assert!(view.investment.invest_enabled);

        let busy = project_view(p, d, &[], "1000", true);
        assert!(!busy.investment.invest_enabled);
    }

    #[test]
    fn out_of_range_amounts_are_flagged() {
        let catalog = Catalog::builtin().expect("catalog");
        let (p, d) = liquidbridge(&catalog);
        let low = project_view(p, d, &[], "49", false);
        assert_eq!(
            low.investment.rejection.as_ref().map(InvestmentRejection::code),
            Some("below_minimum")
        );
        let junk = project_view(p, d, &[], "abc", false);
        assert_eq!(junk.investment.amount, 0.0);
        assert!(!junk.investment.invest_enabled);
    }

    #[test]
    fn fund_without_minimum_reads_no_minimum_target() {
        let catalog = Catalog::builtin().expect("catalog");
        let p = catalog.project("mtncapital").expect("project");
        let d = catalog.detail("mtncapital").expect("detail");
        let view = project_view(p, d, &[], "", false);
        assert_eq!(view.progress.label, "No minimum target");
        assert_eq!(view.progress.width, 100.0);
    }
}
