// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use onlyfounders_model::{Category, Project, ProjectId, ProjectStatus, RiskLevel};

pub fn project(id: &str, committed: f64, days_left: u32) -> Project {
    Project {
        id: ProjectId::parse(id).expect("id"),
        name: id.to_string(),
        ticker: id.to_ascii_uppercase().replace('-', ""),
        category: Category::DeFi,
        description: String::new(),
        committed,
        min_raise: 0.0,
        contributors: 0,
        days_left,
        status: ProjectStatus::Active,
        risk_level: RiskLevel::Low,
        token_price: 1.0,
        min_investment: 1.0,
        max_investment: 10.0,
        expected_return: None,
        hot: false,
        featured: false,
        approved_date: None,
    }
}
