// Input checks for the flash loan CLI
//
// Arguments are always echoed as typed; these checks only log warnings.
use log::warn;

/// Whether a fee reads as a decimal fraction in [0, 1), e.g. `0.003` for 0.3%
pub fn is_fee_rate(fee: &str) -> bool {
    fee.parse::<f64>()
        .map_or(false, |rate| rate.is_finite() && (0.0..1.0).contains(&rate))
}

/// Log a warning when a fee is not a decimal fraction
pub fn warn_on_unusual_fee(fee: &str) {
    if !is_fee_rate(fee) {
        warn!(
            "Fee {} is not a decimal fraction in [0, 1); the contract expects e.g. 0.003 for 0.3%",
            fee
        );
    }
}

/// Whether an address carries the network's bech32 account prefix
pub fn has_address_prefix(address: &str, prefix: &str) -> bool {
    address
        .strip_prefix(prefix)
        .map_or(false, |rest| rest.starts_with('1'))
}

/// Log a warning when an address belongs to a different network
pub fn warn_on_foreign_address(label: &str, address: &str, prefix: &str) {
    if !has_address_prefix(address, prefix) {
        warn!(
            "{} {} does not use the '{}' address prefix of the selected network",
            label, address, prefix
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fee_rate() {
        // Decimal fractions
        assert!(is_fee_rate("0.003"));
        assert!(is_fee_rate("0"));
        assert!(is_fee_rate("0.5"));

        // Anything else is still accepted by the CLI, but flagged
        assert!(!is_fee_rate("1"));
        assert!(!is_fee_rate("0.3%"));
        assert!(!is_fee_rate("-0.1"));
        assert!(!is_fee_rate("NaN"));
        assert!(!is_fee_rate(""));
    }

    #[test]
    fn test_has_address_prefix() {
        assert!(has_address_prefix("core1abc", "core"));
        assert!(has_address_prefix("testcore1abc", "testcore"));
        assert!(!has_address_prefix("testcore1abc", "core"));
        assert!(!has_address_prefix("corevaloper1abc", "core"));
        assert!(!has_address_prefix("", "core"));
    }
}
