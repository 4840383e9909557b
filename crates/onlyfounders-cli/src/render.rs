// SPDX-License-Identifier: Apache-2.0

use onlyfounders_app::views::{
    AdminTab, AdminView, CreateView, DiscoverView, HomeView, PortfolioTab, PortfolioView,
    ProjectCard, ProjectPageView,
};
use onlyfounders_app::PageView;
use onlyfounders_funding::{format_percent, format_usd};
use onlyfounders_model::LaunchState;
use std::fmt::Write;

fn signed_usd(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${}", format_usd(-amount))
    } else {
        format!("+${}", format_usd(amount))
    }
}

fn card_line(out: &mut String, card: &ProjectCard) {
    let mut badges = String::new();
    if card.hot {
        badges.push_str(" [hot]");
    }
    if card.featured {
        badges.push_str(" [featured]");
    }
    let _ = writeln!(
        out,
        "  {} ({}) {}{}",
        card.name, card.ticker, card.category, badges
    );
    let _ = writeln!(
        out,
        "    {} raised, {} | {} investors | {}d left | ${} per token | min ${} | expected {}",
        card.committed_short,
        card.progress.label,
        card.contributors,
        card.days_left,
        card.token_price,
        format_usd(card.min_investment),
        card.expected_return.as_deref().unwrap_or("n/a"),
    );
}

fn home(out: &mut String, view: &HomeView) {
    for stat in &view.stats {
        let _ = writeln!(out, "{}: {}", stat.label, stat.value);
    }
    if let Some(f) = &view.featured {
        let _ = writeln!(out, "\nFeatured: {} ({})", f.name, f.id);
        let _ = writeln!(out, "  {}", f.description);
        let _ = writeln!(
            out,
            "  Raised {} | Token ${} | {} investors | {} days left | ROI {}",
            f.raised,
            f.token_price,
            f.contributors,
            f.days_left,
            f.expected_return.as_deref().unwrap_or("n/a")
        );
    }
    let _ = writeln!(out, "\nTrending:");
    for card in &view.trending {
        card_line(out, card);
    }
}

fn discover(out: &mut String, view: &DiscoverView) {
    let _ = writeln!(
        out,
        "search={:?} category={} status={} sort={}",
        view.search, view.category, view.status, view.sort
    );
    let _ = writeln!(out, "{} projects found", view.result_count);
    for card in &view.cards {
        card_line(out, card);
    }
}

fn project(out: &mut String, view: &ProjectPageView) {
    let _ = writeln!(out, "{} ({}) {}", view.name, view.ticker, view.category);
    let _ = writeln!(out, "{}", view.status_line);
    let _ = writeln!(
        out,
        "${} committed | {} | ${} monthly",
        format_usd(view.committed),
        view.progress.label,
        format_usd(view.monthly_allowance)
    );
    let _ = writeln!(out, "\n{}\n", view.overview);
    let _ = writeln!(out, "Token address: {}", view.token_address);
    let _ = writeln!(
        out,
        "Token supply: {} | Price ${} | Valuation {}",
        format_usd(view.token_supply),
        view.investment.token_price,
        view.valuation
    );
    let links = &view.links;
    for (label, url) in [
        ("website", &links.website),
        ("docs", &links.docs),
        ("twitter", &links.twitter),
        ("discord", &links.discord),
        ("github", &links.github),
    ] {
        if !url.is_empty() {
            let _ = writeln!(out, "  {label}: {url}");
        }
    }
    let inv = &view.investment;
    let quick: Vec<String> = inv.quick_amounts.iter().map(|a| format!("${}", format_usd(*a))).collect();
    let _ = writeln!(
        out,
        "\nInvest between ${} and ${} (quick: {})",
        format_usd(inv.min_investment),
        format_usd(inv.max_investment),
        quick.join(", ")
    );
    if !inv.amount_text.trim().is_empty() {
        let _ = writeln!(
            out,
            "Amount ${} -> {} {} tokens, {} ownership",
            format_usd(inv.amount),
            format_usd(inv.quote.token_quantity),
            view.ticker,
            inv.ownership
        );
        if let Some(r) = &inv.rejection {
            let _ = writeln!(out, "Cannot invest: {r}");
        }
    }
}

fn create(out: &mut String, view: &CreateView) {
    let _ = writeln!(out, "Step {}/4: {}", view.step, view.step_title);
    for field in &view.fields {
        let marker = if field.required { "*" } else { "" };
        let missing = if field.missing { " (missing)" } else { "" };
        let _ = writeln!(out, "  {}{marker} = {:?}{missing}", field.key, field.value);
    }
    if view.step == 1 {
        let _ = writeln!(out, "  categories: {}", view.categories.join(", "));
        let _ = writeln!(out, "  description: {}", view.description_counter);
    }
    if let Some(r) = &view.review {
        let _ = writeln!(out, "  {} ({}) {}", r.project_name, r.ticker, r.category);
        let _ = writeln!(out, "  Token price: {}", r.token_price);
        let _ = writeln!(out, "  Total supply: {}", r.total_supply);
        let _ = writeln!(out, "  Minimum raise: {}", r.min_raise);
        let _ = writeln!(out, "  Monthly allowance: {}", r.monthly_allowance);
    }
    if !view.missing_required.is_empty() {
        let _ = writeln!(out, "Required fields still blank: {}", view.missing_required.join(", "));
    }
}

fn portfolio(out: &mut String, view: &PortfolioView) {
    match view.tab {
        PortfolioTab::Investments => {
            let _ = writeln!(
                out,
                "Portfolio value ${} ({} / {})",
                format_usd(view.total_current_value),
                signed_usd(view.total_pnl),
                format_percent(view.total_pnl_percent, 1)
            );
            let _ = writeln!(out, "Total invested ${}", format_usd(view.total_invested));
            for h in &view.holdings {
                let _ = writeln!(
                    out,
                    "  {} ({}): invested ${} now ${} | {} tokens | {} ({})",
                    h.name,
                    h.ticker,
                    format_usd(h.invested),
                    format_usd(h.current_value),
                    format_usd(h.token_quantity),
                    signed_usd(h.pnl),
                    format_percent(h.pnl_percent, 1)
                );
            }
        }
        PortfolioTab::Launched => {
            for l in &view.launched {
                match &l.state {
                    LaunchState::Approved {
                        launched,
                        raised,
                        target,
                        contributors,
                    } => {
                        let _ = writeln!(
                            out,
                            "  {} ({}) approved, launched {launched}: ${} of ${} | {contributors} contributors | success {}",
                            l.name,
                            l.ticker,
                            format_usd(*raised),
                            format_usd(*target),
                            l.success_rate.as_deref().unwrap_or("0%")
                        );
                    }
                    LaunchState::InReview { submitted } => {
                        let _ = writeln!(
                            out,
                            "  {} ({}) in review, submitted {submitted}",
                            l.name, l.ticker
                        );
                    }
                }
            }
        }
    }
}

fn admin(out: &mut String, view: &AdminView) {
    match view.tab {
        AdminTab::Pending => {
            let _ = writeln!(
                out,
                "{} of {} pending submissions",
                view.pending.len(),
                view.pending_total
            );
            for p in &view.pending {
                let _ = writeln!(
                    out,
                    "  {} {} ({}) {} risk={} requested ${} by {} on {}",
                    p.id,
                    p.name,
                    p.ticker,
                    p.category,
                    p.risk_level,
                    format_usd(p.requested_amount),
                    p.submitted_by,
                    p.submitted_date
                );
            }
        }
        AdminTab::Users => {
            for row in &view.users {
                let u = &row.user;
                let actions: Vec<&str> = row.actions.iter().map(|a| a.as_str()).collect();
                let _ = writeln!(
                    out,
                    "  {} {} {} invested ${} in {} projects, launched {} | risk {} | actions: {}",
                    u.id,
                    u.address,
                    u.status,
                    format_usd(u.total_invested),
                    u.projects_invested,
                    u.projects_launched,
                    u.risk_score,
                    actions.join(", ")
                );
            }
        }
        AdminTab::Analytics => {
            let s = &view.analytics;
            let _ = writeln!(out, "Total projects: {}", s.total_projects);
            let _ = writeln!(out, "Total funded: ${}", format_usd(s.total_funded));
            let _ = writeln!(out, "Total investors: {}", s.total_investors);
            let _ = writeln!(out, "Success rate: {}", format_percent(s.success_rate, 0));
            let _ = writeln!(out, "Active projects: {}", s.active_projects);
            let _ = writeln!(out, "Average return: {}x", s.avg_return);
            let _ = writeln!(out, "Total users: {}", s.total_users);
            let _ = writeln!(out, "Monthly revenue: ${}", format_usd(s.monthly_revenue));
            let _ = writeln!(out, "Average project value: ${}", format_usd(s.avg_project_value));
        }
        AdminTab::Approved => {
            for a in &view.approved {
                let _ = writeln!(
                    out,
                    "  {} ({}) approved {}: ${} raised, {} | {} contributors",
                    a.name,
                    a.ticker,
                    a.approved_date,
                    format_usd(a.raised),
                    a.progress.label,
                    a.contributors
                );
            }
        }
    }
}

/// Human-readable rendering of a page.
#[must_use]
pub(crate) fn page_text(view: &PageView) -> String {
    let mut out = String::new();
    match view {
        PageView::Home(v) => home(&mut out, v),
        PageView::Discover(v) => discover(&mut out, v),
        PageView::Create(v) => create(&mut out, v),
        PageView::Portfolio(v) => portfolio(&mut out, v),
        PageView::Admin(v) => admin(&mut out, v),
        PageView::Project(v) => project(&mut out, v),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_amounts_carry_sign_before_currency() {
        assert_eq!(signed_usd(350.0), "+$350");
        assert_eq!(signed_usd(-800.0), "-$800");
    }
}
