// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Money math shared by the discover cards, the funding page and the
//! portfolio. Every function here is pure.

mod format;
mod portfolio;
mod quote;
mod ratio;

pub use format::{format_millions, format_percent, format_thousands_k, format_usd};
pub use portfolio::{summarize, HoldingSummary, PortfolioSummary};
pub use quote::{
    invest_enabled, parse_amount, quote, quote_for, InvestmentLimits, InvestmentRejection, Quote,
};
pub use ratio::{funding_ratio, progress_width, FundingProgress};

pub const CRATE_NAME: &str = "onlyfounders-funding";
