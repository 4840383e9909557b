// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::project::{Category, ProjectId, RiskLevel, ValidationError};

/// A submission waiting for admin review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PendingProject {
    pub id: ProjectId,
    pub name: String,
    pub ticker: String,
    pub category: Category,
    pub submitted_by: String,
    pub submitted_date: String,
    pub requested_amount: f64,
    pub token_price: f64,
    pub team_size: u32,
    pub description: String,
    pub website: String,
    pub whitepaper: String,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Verified,
    Flagged,
    Banned,
}

impl UserStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Flagged => "flagged",
            Self::Banned => "banned",
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Moderation actions available on the admin users tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    Verify,
    Ban,
}

impl UserAction {
    pub const ALL: [UserAction; 2] = [Self::Verify, Self::Ban];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Ban => "ban",
        }
    }

    /// Status the user ends up in, also used as the past-tense verb in
    /// notifications.
    #[must_use]
    pub const fn resulting_status(self) -> UserStatus {
        match self {
            Self::Verify => UserStatus::Verified,
            Self::Ban => UserStatus::Banned,
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "verify" | "verified" => Ok(Self::Verify),
            "ban" | "banned" => Ok(Self::Ban),
            other => Err(ValidationError(format!("unknown user action `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformUser {
    pub id: String,
    pub address: String,
    pub total_invested: f64,
    pub projects_invested: u32,
    pub projects_launched: u32,
    pub status: UserStatus,
    pub join_date: String,
    pub risk_score: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformStats {
    pub total_projects: u32,
    pub total_funded: f64,
    pub total_investors: u32,
    pub success_rate: f64,
    pub pending_reviews: u32,
    pub active_projects: u32,
    pub avg_return: f64,
    pub total_users: u32,
    pub monthly_revenue: f64,
    pub avg_project_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_parses_imperative_and_past_tense() {
        assert_eq!(UserAction::parse("verify").expect("verify"), UserAction::Verify);
        assert_eq!(UserAction::parse("Banned").expect("ban"), UserAction::Ban);
        assert!(UserAction::parse("promote").is_err());
        assert_eq!(UserAction::Ban.resulting_status().as_str(), "banned");
    }
}
