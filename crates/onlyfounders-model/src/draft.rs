// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::project::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    BasicInfo,
    Tokenomics,
    TeamAndLinks,
    CampaignDetails,
}

impl FieldGroup {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Tokenomics => "Tokenomics",
            Self::TeamAndLinks => "Team & Links",
            Self::CampaignDetails => "Campaign Details",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    ProjectName,
    Ticker,
    Description,
    Category,
    TotalSupply,
    TokenPrice,
    MinRaise,
    MaxRaise,
    VestingPeriod,
    UseOfFunds,
    TeamSize,
    Website,
    Twitter,
    Discord,
    Github,
    Whitepaper,
    CampaignDuration,
    MonthlyAllowance,
}

impl DraftField {
    pub const ALL: [DraftField; 18] = [
        Self::ProjectName,
        Self::Ticker,
        Self::Description,
        Self::Category,
        Self::TotalSupply,
        Self::TokenPrice,
        Self::MinRaise,
        Self::MaxRaise,
        Self::VestingPeriod,
        Self::UseOfFunds,
        Self::TeamSize,
        Self::Website,
        Self::Twitter,
        Self::Discord,
        Self::Github,
        Self::Whitepaper,
        Self::CampaignDuration,
        Self::MonthlyAllowance,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ProjectName => "projectName",
            Self::Ticker => "ticker",
            Self::Description => "description",
            Self::Category => "category",
            Self::TotalSupply => "totalSupply",
            Self::TokenPrice => "tokenPrice",
            Self::MinRaise => "minRaise",
            Self::MaxRaise => "maxRaise",
            Self::VestingPeriod => "vestingPeriod",
            Self::UseOfFunds => "useOfFunds",
            Self::TeamSize => "teamSize",
            Self::Website => "website",
            Self::Twitter => "twitter",
            Self::Discord => "discord",
            Self::Github => "github",
            Self::Whitepaper => "whitepaper",
            Self::CampaignDuration => "campaignDuration",
            Self::MonthlyAllowance => "monthlyAllowance",
        }
    }

    #[must_use]
    pub const fn group(self) -> FieldGroup {
        match self {
            Self::ProjectName | Self::Ticker | Self::Description | Self::Category => {
                FieldGroup::BasicInfo
            }
            Self::TotalSupply
            | Self::TokenPrice
            | Self::MinRaise
            | Self::MaxRaise
            | Self::VestingPeriod
            | Self::UseOfFunds => FieldGroup::Tokenomics,
            Self::TeamSize
            | Self::Website
            | Self::Twitter
            | Self::Discord
            | Self::Github
            | Self::Whitepaper => FieldGroup::TeamAndLinks,
            Self::CampaignDuration | Self::MonthlyAllowance => FieldGroup::CampaignDetails,
        }
    }

    /// Fields carrying a required marker on the submission form.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::ProjectName
                | Self::Ticker
                | Self::Description
                | Self::Category
                | Self::TotalSupply
                | Self::TokenPrice
                | Self::MinRaise
        )
    }

    /// Accepts the camelCase key or a snake/kebab spelling of it.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let wanted: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ValidationError(format!("unknown form field `{}`", input.trim())))
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The in-progress project submission. Every field is free text exactly as
/// entered; nothing is parsed until review.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormDraft {
    pub project_name: String,
    pub ticker: String,
    pub description: String,
    pub category: String,
    pub total_supply: String,
    pub token_price: String,
    pub min_raise: String,
    pub max_raise: String,
    pub vesting_period: String,
    pub use_of_funds: String,
    pub team_size: String,
    pub website: String,
    pub twitter: String,
    pub discord: String,
    pub github: String,
    pub whitepaper: String,
    pub campaign_duration: String,
    pub monthly_allowance: String,
}

impl FormDraft {
    fn slot_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::ProjectName => &mut self.project_name,
            DraftField::Ticker => &mut self.ticker,
            DraftField::Description => &mut self.description,
            DraftField::Category => &mut self.category,
            DraftField::TotalSupply => &mut self.total_supply,
            DraftField::TokenPrice => &mut self.token_price,
            DraftField::MinRaise => &mut self.min_raise,
            DraftField::MaxRaise => &mut self.max_raise,
            DraftField::VestingPeriod => &mut self.vesting_period,
            DraftField::UseOfFunds => &mut self.use_of_funds,
            DraftField::TeamSize => &mut self.team_size,
            DraftField::Website => &mut self.website,
            DraftField::Twitter => &mut self.twitter,
            DraftField::Discord => &mut self.discord,
            DraftField::Github => &mut self.github,
            DraftField::Whitepaper => &mut self.whitepaper,
            DraftField::CampaignDuration => &mut self.campaign_duration,
            DraftField::MonthlyAllowance => &mut self.monthly_allowance,
        }
    }

    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::ProjectName => &self.project_name,
            DraftField::Ticker => &self.ticker,
            DraftField::Description => &self.description,
            DraftField::Category => &self.category,
            DraftField::TotalSupply => &self.total_supply,
            DraftField::TokenPrice => &self.token_price,
            DraftField::MinRaise => &self.min_raise,
            DraftField::MaxRaise => &self.max_raise,
            DraftField::VestingPeriod => &self.vesting_period,
            DraftField::UseOfFunds => &self.use_of_funds,
            DraftField::TeamSize => &self.team_size,
            DraftField::Website => &self.website,
            DraftField::Twitter => &self.twitter,
            DraftField::Discord => &self.discord,
            DraftField::Github => &self.github,
            DraftField::Whitepaper => &self.whitepaper,
            DraftField::CampaignDuration => &self.campaign_duration,
            DraftField::MonthlyAllowance => &self.monthly_allowance,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required fields that are still blank. Informational only.
    #[must_use]
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_and_clear_cover_every_field() {
        let mut draft = FormDraft::default();
        assert!(draft.is_empty());
        for (i, field) in DraftField::ALL.into_iter().enumerate() {
            draft.set(field, format!("v{i}"));
        }
        for (i, field) in DraftField::ALL.into_iter().enumerate() {
            assert_eq!(draft.get(field), format!("v{i}"));
        }
        assert!(draft.missing_required().is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, FormDraft::default());
    }

    #[test]
    fn missing_required_lists_blank_starred_fields() {
        let mut draft = FormDraft::default();
        draft.set(DraftField::ProjectName, "LiquidBridge");
        draft.set(DraftField::Ticker, "   ");
        let missing = draft.missing_required();
        assert!(!missing.contains(&DraftField::ProjectName));
        assert!(missing.contains(&DraftField::Ticker));
        assert!(!missing.contains(&DraftField::Website));
        assert_eq!(missing.len(), 6);
    }

    #[test]
    fn field_keys_parse_in_several_spellings() {
        assert_eq!(DraftField::parse("projectName").expect("key"), DraftField::ProjectName);
        assert_eq!(DraftField::parse("project_name").expect("key"), DraftField::ProjectName);
        assert_eq!(DraftField::parse("use-of-funds").expect("key"), DraftField::UseOfFunds);
        assert!(DraftField::parse("wallet").is_err());
    }

    #[test]
    fn serde_keys_match_field_keys() {
        let mut draft = FormDraft::default();
        draft.set(DraftField::MonthlyAllowance, "25000");
        let json = serde_json::to_value(&draft).expect("encode");
        assert_eq!(json["monthlyAllowance"], "25000");
        for field in DraftField::ALL {
            assert!(json.get(field.key()).is_some(), "missing {field}");
        }
    }

    #[test]
    fn groups_partition_the_form() {
        let total: usize = [
            FieldGroup::BasicInfo,
            FieldGroup::Tokenomics,
            FieldGroup::TeamAndLinks,
            FieldGroup::CampaignDetails,
        ]
        .into_iter()
        .map(|g| DraftField::ALL.iter().filter(|f| f.group() == g).count())
        .sum();
        assert_eq!(total, DraftField::ALL.len());
    }
}
