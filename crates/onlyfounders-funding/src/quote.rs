// SPDX-License-Identifier: Apache-2.0

use onlyfounders_model::Project;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::format::format_usd;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InvestmentRejection {
    BelowMinimum { amount: f64, minimum: f64 },
    AboveMaximum { amount: f64, maximum: f64 },
}

impl InvestmentRejection {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BelowMinimum { .. } => "below_minimum",
            Self::AboveMaximum { .. } => "above_maximum",
        }
    }
}

impl Display for InvestmentRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BelowMinimum { amount, minimum } => write!(
                f,
                "amount ${} is below the minimum investment of ${}",
                format_usd(*amount),
                format_usd(*minimum)
            ),
            Self::AboveMaximum { amount, maximum } => write!(
                f,
                "amount ${} exceeds the maximum investment of ${}",
                format_usd(*amount),
                format_usd(*maximum)
            ),
        }
    }
}

impl std::error::Error for InvestmentRejection {}

/// Inclusive per-investor bounds for a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentLimits {
    pub min: f64,
    pub max: f64,
}

impl InvestmentLimits {
    #[must_use]
    pub fn for_project(project: &Project) -> Self {
        Self {
            min: project.min_investment,
            max: project.max_investment,
        }
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn check(&self, amount: f64) -> Result<(), InvestmentRejection> {
        // NaN fails the first comparison and is reported as below minimum.
        if !(amount >= self.min) {
            return Err(InvestmentRejection::BelowMinimum {
                amount,
                minimum: self.min,
            });
        }
        if amount > self.max {
            return Err(InvestmentRejection::AboveMaximum {
                amount,
                maximum: self.max,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, amount: f64) -> bool {
        self.check(amount).is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub usd_amount: f64,
    pub token_quantity: f64,
    pub ownership_percent: f64,
}

/// Tokens received and share of the raise for `usd_amount`. Non-positive
/// amounts, prices or committed totals contribute zero instead of dividing.
#[must_use]
pub fn quote(usd_amount: f64, token_price: f64, total_committed: f64) -> Quote {
    let positive = usd_amount.is_finite() && usd_amount > 0.0;
    let token_quantity = if positive && token_price > 0.0 {
        usd_amount / token_price
    } else {
        0.0
    };
    let ownership_percent = if positive && total_committed > 0.0 {
        usd_amount / total_committed * 100.0
    } else {
        0.0
    };
    Quote {
        usd_amount,
        token_quantity,
        ownership_percent,
    }
}

/// Quote checked against the project's investment bounds.
pub fn quote_for(project: &Project, usd_amount: f64) -> Result<Quote, InvestmentRejection> {
    InvestmentLimits::for_project(project).check(usd_amount)?;
    Ok(quote(usd_amount, project.token_price, project.committed))
}

/// Reads a typed amount. Blank or unparsable input is zero; a leading `$`
/// and thousands separators are accepted.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Whether the invest control accepts a click.
#[must_use]
pub fn invest_enabled(amount: f64, limits: &InvestmentLimits, in_flight: bool) -> bool {
    !in_flight && limits.contains(amount)
}
