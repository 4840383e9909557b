// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod filters;
mod normalize;
mod query_error;
mod sort;

use onlyfounders_model::Project;
use serde::{Deserialize, Serialize};

pub use filters::{filter_listings, CatalogFilter, Listing, ALL_FILTER};
pub use normalize::{contains_normalized, normalize_search_term};
pub use query_error::{QueryError, QueryErrorCode};
pub use sort::{sort_projects, SortKey};

pub const CRATE_NAME: &str = "onlyfounders-query";

/// Transient discovery controls: the filter facets plus the sort key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub filter: CatalogFilter,
    pub sort: SortKey,
}

impl FilterState {
    pub fn from_params(
        search: Option<&str>,
        category: Option<&str>,
        status: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            filter: CatalogFilter::from_params(search, category, status, None)?,
            sort: sort.map(SortKey::from_key).unwrap_or_default(),
        })
    }
}

/// Filter then sort, as the discover page does.
#[must_use]
pub fn discover<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    let filtered = filter_listings(projects, &state.filter);
    let sorted = sort_projects(&filtered, state.sort);
    tracing::debug!(sort = %state.sort, results = sorted.len(), "discover evaluated");
    sorted
}
