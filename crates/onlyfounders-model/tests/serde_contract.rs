// SPDX-License-Identifier: Apache-2.0

use onlyfounders_model::{Catalog, LaunchState, Project};

#[test]
fn launched_projects_decode_by_status_tag() {
    let catalog = Catalog::builtin().expect("catalog");
    match &catalog.launched[0].state {
        LaunchState::Approved { raised, target, contributors, .. } => {
            assert_eq!(*raised, 850_000.0);
            assert_eq!(*target, 500_000.0);
            assert_eq!(*contributors, 142);
        }
        other => panic!("unexpected state {other:?}"),
    }
    assert!(matches!(
        &catalog.launched[1].state,
        LaunchState::InReview { submitted } if submitted == "2024-11-22"
    ));
}

#[test]
fn project_rejects_unknown_fields() {
    let raw = r#"{
        "id": "x", "name": "X", "ticker": "X", "category": "DeFi",
        "description": "", "committed": 0.0, "min_raise": 0.0, "contributors": 0,
        "days_left": 1, "status": "active", "risk_level": "low", "token_price": 1.0,
        "min_investment": 1.0, "max_investment": 2.0, "gradient": "from-blue-400"
    }"#;
    assert!(serde_json::from_str::<Project>(raw).is_err());
}

#[test]
fn catalog_reencodes_to_an_equal_catalog() {
    let catalog = Catalog::builtin().expect("catalog");
    let json = serde_json::to_string(&catalog).expect("encode");
    let back = Catalog::from_json_str(&json).expect("decode");
    assert_eq!(back, catalog);
}

#[test]
fn invalid_amounts_fail_catalog_validation() {
    let mut catalog = Catalog::builtin().expect("catalog");
    catalog.projects[1].min_investment = 60_000.0;
    let err = catalog.validate().expect_err("min above max");
    assert!(err.to_string().contains("min_investment exceeds max_investment"));

    let mut catalog = Catalog::builtin().expect("catalog");
    catalog.projects[2].token_price = 0.0;
    assert!(catalog.validate().is_err());
}
