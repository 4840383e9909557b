// SPDX-License-Identifier: Apache-2.0

use unicode_normalization::UnicodeNormalization;

#[must_use]
pub fn normalize_search_term(input: &str) -> String {
    // NFKC + Unicode lowercase, applied to both needle and haystack.
    input.nfkc().collect::<String>().to_lowercase()
}

#[must_use]
pub fn contains_normalized(haystack: &str, normalized_needle: &str) -> bool {
    normalized_needle.is_empty() || normalize_search_term(haystack).contains(normalized_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_compatibility_forms() {
        assert_eq!(normalize_search_term("LiquidBridge"), "liquidbridge");
        // Fullwidth letters fold to ASCII under NFKC.
        assert_eq!(normalize_search_term("ＬＱＢＲ"), "lqbr");
        assert!(contains_normalized("Omnipair", ""));
        assert!(contains_normalized("SocialFi Network", &normalize_search_term("fi net")));
        assert!(!contains_normalized("GameChain", "shield"));
    }
}
