// SPDX-License-Identifier: Apache-2.0

use onlyfounders_funding::{format_thousands_k, FundingProgress};
use onlyfounders_model::{Catalog, Category, Project, ProjectId, ProjectStatus, RiskLevel};
use onlyfounders_query::{discover, FilterState, SortKey, ALL_FILTER};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub name: String,
    pub ticker: String,
    pub category: Category,
    pub description: String,
    pub risk_level: RiskLevel,
    pub progress: FundingProgress,
    pub committed_short: String,
    pub contributors: u32,
    pub days_left: u32,
    pub token_price: f64,
    pub min_investment: f64,
    pub expected_return: Option<String>,
    pub hot: bool,
    pub featured: bool,
}

#[must_use]
pub fn project_card(project: &Project) -> ProjectCard {
    ProjectCard {
        id: project.id.clone(),
        name: project.name.clone(),
        ticker: project.ticker.clone(),
        category: project.category,
        description: project.description.clone(),
        risk_level: project.risk_level,
        progress: FundingProgress::complete(project.committed, project.min_raise),
        committed_short: format!("${}", format_thousands_k(project.committed)),
        contributors: project.contributors,
        days_left: project.days_left,
        token_price: project.token_price,
        min_investment: project.min_investment,
        expected_return: project.expected_return.clone(),
        hot: project.hot,
        featured: project.featured,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoverView {
    pub search: String,
    pub category: String,
    pub status: String,
    pub sort: SortKey,
    pub category_options: Vec<FilterOption>,
    pub status_options: Vec<FilterOption>,
    pub sort_options: Vec<FilterOption>,
    pub result_count: usize,
    pub cards: Vec<ProjectCard>,
}

fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "Open",
        ProjectStatus::Upcoming => "Upcoming",
        ProjectStatus::Completed => "Closed",
    }
}

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Trending => "Trending",
        SortKey::Newest => "Newest",
        SortKey::EndingSoon => "Ending Soon",
        SortKey::MostFunded => "Most Funded",
    }
}

#[must_use]
pub fn discover_view(catalog: &Catalog, state: &FilterState) -> DiscoverView {
    let cards: Vec<ProjectCard> = discover(&catalog.projects, state)
        .into_iter()
        .map(project_card)
        .collect();

    let mut category_options = vec![FilterOption::new(ALL_FILTER, "All Categories")];
    category_options.extend(
        catalog
            .categories()
            .into_iter()
            .map(|c| FilterOption::new(c.as_str(), c.as_str())),
    );
    let mut status_options = vec![FilterOption::new(ALL_FILTER, "All Status")];
    status_options.extend(
        ProjectStatus::ALL
            .into_iter()
            .map(|s| FilterOption::new(s.as_str(), status_label(s))),
    );
    let sort_options = SortKey::ALL
        .into_iter()
        .map(|k| FilterOption::new(k.as_str(), sort_label(k)))
        .collect();

    DiscoverView {
        search: state.filter.search.clone(),
        category: state
            .filter
            .category
            .map_or(ALL_FILTER, Category::as_str)
            .to_string(),
        status: state
            .filter
            .status
            .map_or(ALL_FILTER, ProjectStatus::as_str)
            .to_string(),
        sort: state.sort,
        category_options,
        status_options,
        sort_options,
        result_count: cards.len(),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_lists_everything_trending_first() {
        let catalog = Catalog::builtin().expect("catalog");
        let view = discover_view(&catalog, &FilterState::default());
        assert_eq!(view.result_count, catalog.projects.len());
        assert_eq!(view.cards[0].name, "Omnipair");
        assert_eq!(view.category, "all");
        assert_eq!(view.category_options[0].label, "All Categories");
        assert_eq!(view.status_options.len(), 4);
        assert_eq!(view.status_options[1].label, "Open");
        assert_eq!(view.sort_options[2].value, "ending-soon");
    }

    #[test]
    fn cards_carry_clamped_bar_and_unclamped_label() {
        let catalog = Catalog::builtin().expect("catalog");
        let omni = catalog.project("omnipair").expect("omnipair");
        let card = project_card(omni);
        assert_eq!(card.progress.width, 100.0);
        assert_eq!(card.progress.label, "373% complete");
        assert_eq!(card.committed_short, "$1118k");
    }

    #[test]
    fn filters_are_echoed_back() {
        let catalog = Catalog::builtin().expect("catalog");
        let state = FilterState::from_params(Some("ai"), Some("AI"), Some("active"), Some("newest"))
            .expect("state");
        let view = discover_view(&catalog, &state);
        assert_eq!(view.category, "AI");
        assert_eq!(view.status, "active");
        assert_eq!(view.sort, SortKey::Newest);
        assert!(view.cards.iter().all(|c| c.category == Category::AI));
    }
}
