// SPDX-License-Identifier: Apache-2.0

mod support;

use onlyfounders_model::{Category, Project, ProjectStatus, RiskLevel};
use onlyfounders_query::{filter_listings, sort_projects, CatalogFilter, Listing, SortKey};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn arb_project() -> impl Strategy<Value = Project> {
    (
        "[a-z]{1,8}",
        "[A-Za-z ]{0,24}",
        0_usize..Category::ALL.len(),
        0_usize..ProjectStatus::ALL.len(),
        0_usize..RiskLevel::ALL.len(),
        0_u32..5_000,
        0_u32..60,
        0.0_f64..10_000_000.0,
        any::<bool>(),
    )
        .prop_map(|(id, description, cat, status, risk, contributors, days, committed, hot)| {
            let mut p = support::project(&id, committed, days);
            p.name = id.clone();
            p.description = description;
            p.category = Category::ALL[cat];
            p.status = ProjectStatus::ALL[status];
            p.risk_level = RiskLevel::ALL[risk];
            p.contributors = contributors;
            p.hot = hot;
            p
        })
}

fn arb_filter() -> impl Strategy<Value = CatalogFilter> {
    (
        "[a-z]{0,2}",
        proptest::option::of(0_usize..Category::ALL.len()),
        proptest::option::of(0_usize..ProjectStatus::ALL.len()),
        proptest::option::of(0_usize..RiskLevel::ALL.len()),
    )
        .prop_map(|(search, cat, status, risk)| CatalogFilter {
            search,
            category: cat.map(|i| Category::ALL[i]),
            status: status.map(|i| ProjectStatus::ALL[i]),
            risk: risk.map(|i| RiskLevel::ALL[i]),
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn filtered_list_is_an_ordered_subset_satisfying_the_filter(
        projects in proptest::collection::vec(arb_project(), 0..16),
        filter in arb_filter(),
    ) {
        let out = filter_listings(&projects, &filter);
        let mut cursor = 0_usize;
        for item in &out {
            prop_assert!(filter.matches(*item));
            let pos = projects[cursor..]
                .iter()
                .position(|p| std::ptr::eq(p, *item))
                .map(|off| cursor + off);
            prop_assert!(pos.is_some(), "item out of order or not from input");
            cursor = pos.unwrap_or(cursor) + 1;
        }
        let expected = projects.iter().filter(|p| filter.matches(*p)).count();
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn unconstrained_filter_returns_input_unchanged(
        projects in proptest::collection::vec(arb_project(), 0..16),
    ) {
        let out = filter_listings(&projects, &CatalogFilter::default());
        prop_assert_eq!(out.len(), projects.len());
        for (a, b) in out.iter().zip(projects.iter()) {
            prop_assert!(std::ptr::eq(*a, b));
        }
    }

    #[test]
    fn sorting_is_idempotent(
        projects in proptest::collection::vec(arb_project(), 0..16),
        key_idx in 0_usize..SortKey::ALL.len(),
    ) {
        let key = SortKey::ALL[key_idx];
        let refs: Vec<&Project> = projects.iter().collect();
        let once = sort_projects(&refs, key);
        let twice = sort_projects(&once, key);
        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert!(std::ptr::eq(*a, *b));
        }
    }

    #[test]
    fn search_is_case_insensitive(projects in proptest::collection::vec(arb_project(), 1..8)) {
        let needle = projects[0].name().to_uppercase();
        let filter = CatalogFilter { search: needle, ..Default::default() };
        let out = filter_listings(&projects, &filter);
        prop_assert!(out.iter().any(|p| std::ptr::eq(*p, &projects[0])));
    }
}
