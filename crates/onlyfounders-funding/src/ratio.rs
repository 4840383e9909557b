// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::format::format_usd;

/// Percent of `target` reached by `committed`, unrounded and unclamped.
/// A campaign without a target (`target <= 0`) counts as fully funded.
#[must_use]
pub fn funding_ratio(committed: f64, target: f64) -> f64 {
    if target > 0.0 {
        committed / target * 100.0
    } else {
        100.0
    }
}

/// Clamps a ratio into the `[0, 100]` range a progress bar can draw.
#[must_use]
pub fn progress_width(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingProgress {
    pub ratio: f64,
    pub width: f64,
    pub label: String,
}

impl FundingProgress {
    /// Progress against a minimum raise, labelled the way the funding page
    /// shows it.
    #[must_use]
    pub fn against_minimum(committed: f64, minimum: f64) -> Self {
        let ratio = funding_ratio(committed, minimum);
        let label = if minimum > 0.0 {
            format!("{:.0}% of ${} minimum", ratio.round(), format_usd(minimum))
        } else {
            "No minimum target".to_string()
        };
        Self {
            ratio,
            width: progress_width(ratio),
            label,
        }
    }

    /// Progress labelled as a plain completion percentage.
    #[must_use]
    pub fn complete(committed: f64, target: f64) -> Self {
        let ratio = funding_ratio(committed, target);
        Self {
            ratio,
            width: progress_width(ratio),
            label: format!("{:.0}% complete", ratio.round()),
        }
    }
}
