// SPDX-License-Identifier: Apache-2.0

use onlyfounders_model::{Category, PendingProject, Project, ProjectStatus, RiskLevel};
use serde::{Deserialize, Serialize};

use crate::normalize::{contains_normalized, normalize_search_term};
use crate::query_error::{QueryError, QueryErrorCode};

/// Sentinel accepted by every facet to mean "no constraint".
pub const ALL_FILTER: &str = "all";

/// Anything that can appear in a filterable list.
pub trait Listing {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn ticker(&self) -> &str;
    fn category(&self) -> Category;
    /// `None` for records that have no campaign status yet.
    fn status(&self) -> Option<ProjectStatus>;
    fn risk_level(&self) -> RiskLevel;

    /// Text the search term is matched against.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name(), self.description(), self.ticker()]
    }
}

impl Listing for Project {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn ticker(&self) -> &str {
        &self.ticker
    }
    fn category(&self) -> Category {
        self.category
    }
    fn status(&self) -> Option<ProjectStatus> {
        Some(self.status)
    }
    fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
}

impl Listing for PendingProject {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn ticker(&self) -> &str {
        &self.ticker
    }
    fn category(&self) -> Category {
        self.category
    }
    fn status(&self) -> Option<ProjectStatus> {
        None
    }
    fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
    // Review queue search covers name and ticker only.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name(), self.ticker()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub search: String,
    pub category: Option<Category>,
    pub status: Option<ProjectStatus>,
    pub risk: Option<RiskLevel>,
}

fn facet<T>(
    raw: Option<&str>,
    code: QueryErrorCode,
    parse: impl Fn(&str) -> Result<T, onlyfounders_model::ValidationError>,
) -> Result<Option<T>, QueryError> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some(v) if v.is_empty() || v.eq_ignore_ascii_case(ALL_FILTER) => Ok(None),
        Some(v) => parse(v)
            .map(Some)
            .map_err(|e| QueryError::from_validation(code, e)),
    }
}

impl CatalogFilter {
    /// Builds a filter from raw control values; `"all"` or empty disables a
    /// facet.
    pub fn from_params(
        search: Option<&str>,
        category: Option<&str>,
        status: Option<&str>,
        risk: Option<&str>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            search: search.unwrap_or_default().to_string(),
            category: facet(category, QueryErrorCode::UnknownCategory, Category::parse)?,
            status: facet(status, QueryErrorCode::UnknownStatus, ProjectStatus::parse)?,
            risk: facet(risk, QueryErrorCode::UnknownRisk, RiskLevel::parse)?,
        })
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && self.status.is_none()
            && self.risk.is_none()
    }

    #[must_use]
    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        self.matches_normalized(item, &normalize_search_term(&self.search))
    }

    fn matches_normalized<T: Listing>(&self, item: &T, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || item
                .search_fields()
                .into_iter()
                .any(|field| contains_normalized(field, needle));
        let matches_category = self.category.map_or(true, |c| item.category() == c);
        let matches_status = self.status.map_or(true, |s| item.status() == Some(s));
        let matches_risk = self.risk.map_or(true, |r| item.risk_level() == r);
        matches_search && matches_category && matches_status && matches_risk
    }
}

/// Order-preserving subsequence of `items` satisfying every active facet.
#[must_use]
pub fn filter_listings<'a, T: Listing>(items: &'a [T], filter: &CatalogFilter) -> Vec<&'a T> {
    let needle = normalize_search_term(&filter.search);
    let out: Vec<&T> = items
        .iter()
        .filter(|item| filter.matches_normalized(*item, &needle))
        .collect();
    tracing::debug!(
        total = items.len(),
        matched = out.len(),
        search = %filter.search,
        "catalog filter applied"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use onlyfounders_model::Catalog;

    fn ids<T: Listing>(items: &[&T]) -> Vec<String> {
        items.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn search_matches_name_description_or_ticker() {
        let catalog = Catalog::builtin().expect("catalog");
        let by_ticker = CatalogFilter {
            search: "omfg".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_listings(&catalog.projects, &by_ticker)), vec!["Omnipair"]);

        let by_description = CatalogFilter {
            search: "ZERO-KNOWLEDGE".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_listings(&catalog.projects, &by_description)),
            vec!["QuantumVault"]
        );
    }

    #[test]
    fn facets_combine_with_and() {
        let catalog = Catalog::builtin().expect("catalog");
        let filter =
            CatalogFilter::from_params(Some("protocol"), Some("DeFi"), Some("all"), Some("low"))
                .expect("params");
        assert_eq!(
            ids(&filter_listings(&catalog.projects, &filter)),
            vec!["ShieldProtocol"]
        );
    }

    #[test]
    fn pending_projects_never_match_a_status_facet() {
        let catalog = Catalog::builtin().expect("catalog");
        let filter = CatalogFilter {
            status: Some(ProjectStatus::Active),
            ..Default::default()
        };
        assert!(filter_listings(&catalog.pending, &filter).is_empty());

        let risk = CatalogFilter::from_params(None, Some("all"), None, Some("high"))
            .expect("params");
        assert_eq!(ids(&filter_listings(&catalog.pending, &risk)), vec!["SocialDAO"]);
    }

    #[test]
    fn pending_search_covers_name_and_ticker_only() {
        let catalog = Catalog::builtin().expect("catalog");
        let by_description = CatalogFilter {
            search: "smart contracts".to_string(),
            ..Default::default()
        };
        assert!(filter_listings(&catalog.pending, &by_description).is_empty());
        let by_name = CatalogFilter {
            search: "oracle".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_listings(&catalog.pending, &by_name).len(), 1);
    }

    #[test]
    fn unknown_facet_values_are_reported() {
        let err = CatalogFilter::from_params(None, Some("Memes"), None, None)
            .expect_err("unknown category");
        assert_eq!(err.code, QueryErrorCode::UnknownCategory);
        let err = CatalogFilter::from_params(None, None, Some("paused"), None)
            .expect_err("unknown status");
        assert_eq!(err.code, QueryErrorCode::UnknownStatus);
        assert!(CatalogFilter::from_params(Some(""), Some(" ALL "), Some(""), None)
            .expect("all")
            .is_unconstrained());
    }
}
