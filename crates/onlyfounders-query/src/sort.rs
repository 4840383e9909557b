// SPDX-License-Identifier: Apache-2.0

use onlyfounders_model::Project;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Trending,
    Newest,
    EndingSoon,
    MostFunded,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        Self::Trending,
        Self::Newest,
        Self::EndingSoon,
        Self::MostFunded,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Newest => "newest",
            Self::EndingSoon => "ending-soon",
            Self::MostFunded => "most-funded",
        }
    }

    /// Unknown keys fall back to trending.
    #[must_use]
    pub fn from_key(input: &str) -> Self {
        let wanted = input.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .unwrap_or_default()
    }

    fn compare(self, a: &Project, b: &Project) -> Ordering {
        match self {
            Self::Trending => b
                .hot
                .cmp(&a.hot)
                .then_with(|| b.contributors.cmp(&a.contributors)),
            Self::Newest => b.days_left.cmp(&a.days_left),
            Self::EndingSoon => a.days_left.cmp(&b.days_left),
            Self::MostFunded => b.committed.total_cmp(&a.committed),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable sort into a new vector; ties keep their input order.
#[must_use]
pub fn sort_projects<'a>(projects: &[&'a Project], key: SortKey) -> Vec<&'a Project> {
    let mut out = projects.to_vec();
    out.sort_by(|a, b| key.compare(a, b));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use onlyfounders_model::Catalog;

    fn names(list: &[&Project]) -> Vec<String> {
        list.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn unknown_key_falls_back_to_trending() {
        assert_eq!(SortKey::from_key("bogus"), SortKey::Trending);
        assert_eq!(SortKey::from_key("Ending_Soon"), SortKey::EndingSoon);
        assert_eq!(SortKey::from_key(" most-funded "), SortKey::MostFunded);
    }

    #[test]
    fn trending_puts_hot_first_then_contributors() {
        let catalog = Catalog::builtin().expect("catalog");
        let all: Vec<&Project> = catalog.projects.iter().collect();
        let sorted = sort_projects(&all, SortKey::Trending);
        assert_eq!(
            names(&sorted[..4]),
            vec!["Omnipair", "LiquidBridge", "mtnCapital", "SocialFi Network"]
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let catalog = Catalog::builtin().expect("catalog");
        let all: Vec<&Project> = catalog.projects.iter().collect();
        let before = names(&all);
        let _ = sort_projects(&all, SortKey::EndingSoon);
        assert_eq!(names(&all), before);
    }
}
