// SPDX-License-Identifier: Apache-2.0

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Amount with thousands separators and at most three fraction digits,
/// trailing zeros dropped: `1185420` -> `1,185,420`, `0.576` -> `0.576`.
/// No currency sign is added.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.3}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    let mut out = String::new();
    if amount < 0.0 && (whole != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `5758964` -> `5.8`
#[must_use]
pub fn format_millions(amount: f64) -> String {
    format!("{:.1}", amount / 1_000_000.0)
}

/// `890450` -> `890k`
#[must_use]
pub fn format_thousands_k(amount: f64) -> String {
    format!("{:.0}k", amount / 1_000.0)
}

#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_and_trims() {
        assert_eq!(format_usd(1_185_420.0), "1,185,420");
        assert_eq!(format_usd(800_000.0), "800,000");
        assert_eq!(format_usd(999.0), "999");
        assert_eq!(format_usd(0.576), "0.576");
        assert_eq!(format_usd(2500.5), "2,500.5");
        assert_eq!(format_usd(-350.0), "-350");
        assert_eq!(format_usd(f64::NAN), "0");
    }

    #[test]
    fn short_forms() {
        assert_eq!(format_millions(5_758_964.0), "5.8");
        assert_eq!(format_millions(4_000_000.0), "4.0");
        assert_eq!(format_thousands_k(1_118_102.0), "1118k");
        assert_eq!(format_percent(4.117_647, 1), "4.1%");
        assert_eq!(format_percent(0.08435, 3), "0.084%");
    }
}
