// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const PROJECT_ID_MAX_LEN: usize = 64;
pub const TICKER_MAX_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("project id must not be empty".to_string()));
        }
        if s.len() > PROJECT_ID_MAX_LEN {
            return Err(ValidationError(format!(
                "project id exceeds max length {PROJECT_ID_MAX_LEN}"
            )));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError(
                "project id must match [a-z0-9-]+".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
#[allow(clippy::upper_case_acronyms)]
pub enum Category {
    DeFi,
    AI,
    Gaming,
    Privacy,
    Social,
    Infrastructure,
    #[serde(rename = "Investment Fund")]
    InvestmentFund,
    NFT,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::DeFi,
        Self::AI,
        Self::Gaming,
        Self::Privacy,
        Self::Social,
        Self::Infrastructure,
        Self::InvestmentFund,
        Self::NFT,
    ];

    /// Choices offered by the project submission form.
    pub const SUBMITTABLE: [Category; 7] = [
        Self::DeFi,
        Self::AI,
        Self::Gaming,
        Self::Privacy,
        Self::Social,
        Self::Infrastructure,
        Self::InvestmentFund,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeFi => "DeFi",
            Self::AI => "AI",
            Self::Gaming => "Gaming",
            Self::Privacy => "Privacy",
            Self::Social => "Social",
            Self::Infrastructure => "Infrastructure",
            Self::InvestmentFund => "Investment Fund",
            Self::NFT => "NFT",
        }
    }

    /// Case-insensitive; accepts the display label or a kebab/snake form
    /// (`investment-fund`).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let wanted: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().replace(' ', "").to_ascii_lowercase() == wanted)
            .ok_or_else(|| ValidationError(format!("unknown category `{}`", input.trim())))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Upcoming,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::Upcoming, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let wanted = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == wanted)
            .ok_or_else(|| ValidationError(format!("unknown project status `{}`", input.trim())))
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let wanted = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == wanted)
            .ok_or_else(|| ValidationError(format!("unknown risk level `{}`", input.trim())))
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fundraising campaign listed in the catalog.
///
/// `min_raise` of zero means the campaign has no funding floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub ticker: String,
    pub category: Category,
    pub description: String,
    pub committed: f64,
    pub min_raise: f64,
    pub contributors: u32,
    pub days_left: u32,
    pub status: ProjectStatus,
    pub risk_level: RiskLevel,
    pub token_price: f64,
    pub min_investment: f64,
    pub max_investment: f64,
    #[serde(default)]
    pub expected_return: Option<String>,
    #[serde(default)]
    pub hot: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<String>,
}

impl Project {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let id = self.id.as_str();
        if self.name.trim().is_empty() {
            return Err(ValidationError(format!("project {id}: name must not be empty")));
        }
        if self.ticker.is_empty() || self.ticker.len() > TICKER_MAX_LEN {
            return Err(ValidationError(format!(
                "project {id}: ticker must be 1..={TICKER_MAX_LEN} characters"
            )));
        }
        if !self.ticker.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return Err(ValidationError(format!(
                "project {id}: ticker must match [A-Z0-9]+"
            )));
        }
        for (field, value) in [
            ("committed", self.committed),
            ("min_raise", self.min_raise),
            ("min_investment", self.min_investment),
            ("max_investment", self.max_investment),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError(format!(
                    "project {id}: {field} must be a non-negative amount"
                )));
            }
        }
        if !self.token_price.is_finite() || self.token_price <= 0.0 {
            return Err(ValidationError(format!(
                "project {id}: token_price must be positive"
            )));
        }
        if self.min_investment > self.max_investment {
            return Err(ValidationError(format!(
                "project {id}: min_investment exceeds max_investment"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_rejects_bad_shapes() {
        assert!(ProjectId::parse("liquidbridge").is_ok());
        assert!(ProjectId::parse(" defi-insurance ").is_ok());
        assert!(ProjectId::parse("").is_err());
        assert!(ProjectId::parse("Liquid Bridge").is_err());
        assert!(ProjectId::parse(&"a".repeat(PROJECT_ID_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn category_parse_accepts_label_and_slug_forms() {
        assert_eq!(Category::parse("DeFi").expect("defi"), Category::DeFi);
        assert_eq!(Category::parse("defi").expect("defi"), Category::DeFi);
        assert_eq!(
            Category::parse("Investment Fund").expect("fund"),
            Category::InvestmentFund
        );
        assert_eq!(
            Category::parse("investment-fund").expect("fund"),
            Category::InvestmentFund
        );
        assert!(Category::parse("memecoins").is_err());
    }

    #[test]
    fn enums_serialize_as_site_labels() {
        assert_eq!(
            serde_json::to_string(&Category::InvestmentFund).expect("encode"),
            "\"Investment Fund\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Upcoming).expect("encode"),
            "\"upcoming\""
        );
        assert_eq!(RiskLevel::parse("HIGH").expect("risk"), RiskLevel::High);
        assert!(ProjectStatus::parse("pending").is_err());
    }
}
