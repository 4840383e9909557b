// SPDX-License-Identifier: Apache-2.0

use onlyfounders_model::{Category, ProjectId};
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn well_formed_ids_parse_and_display_unchanged(id in "[a-z0-9][a-z0-9-]{0,40}") {
        let parsed = ProjectId::parse(&id).expect("valid id");
        prop_assert_eq!(parsed.to_string(), id);
    }

    #[test]
    fn ids_with_uppercase_are_rejected(id in "[a-z]{0,8}[A-Z][a-z]{0,8}") {
        prop_assert!(ProjectId::parse(&id).is_err());
    }

    #[test]
    fn category_labels_parse_back(idx in 0_usize..Category::ALL.len()) {
        let cat = Category::ALL[idx];
        prop_assert_eq!(Category::parse(cat.as_str()).expect("label"), cat);
        prop_assert_eq!(Category::parse(&cat.as_str().to_uppercase()).expect("upper"), cat);
    }
}
