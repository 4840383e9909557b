// SPDX-License-Identifier: Apache-2.0

mod support;

use onlyfounders_model::Project;
use onlyfounders_query::{discover, sort_projects, FilterState, SortKey};
use support::project;

#[test]
fn ending_soon_orders_by_fewest_days_left() {
    let projects = vec![project("a", 0.0, 14), project("b", 0.0, 8), project("c", 0.0, 22)];
    let refs: Vec<&Project> = projects.iter().collect();
    let days: Vec<u32> = sort_projects(&refs, SortKey::EndingSoon)
        .iter()
        .map(|p| p.days_left)
        .collect();
    assert_eq!(days, vec![8, 14, 22]);
}

#[test]
fn newest_orders_by_most_days_left() {
    let projects = vec![project("a", 0.0, 14), project("b", 0.0, 8), project("c", 0.0, 22)];
    let refs: Vec<&Project> = projects.iter().collect();
    let days: Vec<u32> = sort_projects(&refs, SortKey::Newest)
        .iter()
        .map(|p| p.days_left)
        .collect();
    assert_eq!(days, vec![22, 14, 8]);
}

#[test]
fn most_funded_orders_by_committed_descending() {
    let projects = vec![
        project("a", 1_185_420.0, 1),
        project("b", 1_118_102.0, 1),
        project("c", 5_758_964.0, 1),
    ];
    let refs: Vec<&Project> = projects.iter().collect();
    let committed: Vec<f64> = sort_projects(&refs, SortKey::MostFunded)
        .iter()
        .map(|p| p.committed)
        .collect();
    assert_eq!(committed, vec![5_758_964.0, 1_185_420.0, 1_118_102.0]);
}

#[test]
fn ties_keep_input_order() {
    let projects = vec![project("first", 0.0, 5), project("second", 0.0, 5), project("third", 0.0, 1)];
    let refs: Vec<&Project> = projects.iter().collect();
    let ids: Vec<&str> = sort_projects(&refs, SortKey::Newest)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn discover_filters_then_sorts() {
    let mut projects = vec![project("alpha", 10.0, 3), project("beta", 30.0, 9), project("alpine", 20.0, 1)];
    projects[2].hot = true;
    let state = FilterState::from_params(Some("AL"), Some("all"), Some("all"), Some("unknown"))
        .expect("params");
    assert_eq!(state.sort, SortKey::Trending);
    let ids: Vec<&str> = discover(&projects, &state).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["alpine", "alpha"]);
}
