//! Currency quantity conversions.
//!
//! The service reports quantities as decimal strings while on-chain amounts
//! are integer base units (satoshis, wei, and so on). These helpers convert
//! between the two without going through floating point.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Decimal places for Bitcoin-like assets (1 coin = 10^8 base units).
pub const BTC_DECIMALS: u32 = 8;

/// Convert an integer amount of base units into a decimal quantity.
///
/// `decimals` must be at most 28 (the maximum scale of `Decimal`).
pub fn from_base_units(amount: i64, decimals: u32) -> Decimal {
    Decimal::new(amount, decimals)
}

/// Convert a decimal quantity into integer base units.
///
/// Returns `None` if the quantity has more fractional digits than
/// `decimals` allows, or if the scaled value does not fit in an `i64`.
pub fn to_base_units(quantity: Decimal, decimals: u32) -> Option<i64> {
    let scaled = quantity.checked_mul(Decimal::from(10u64.pow(decimals)))?;
    if scaled.fract() != Decimal::ZERO {
        return None;
    }
    scaled.to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_base_units() {
        assert_eq!(from_base_units(150_000_000, BTC_DECIMALS), dec!(1.5));
        assert_eq!(from_base_units(1, BTC_DECIMALS), dec!(0.00000001));
        assert_eq!(from_base_units(0, BTC_DECIMALS), dec!(0));
    }

    #[test]
    fn test_to_base_units() {
        assert_eq!(to_base_units(dec!(1.5), BTC_DECIMALS), Some(150_000_000));
        assert_eq!(to_base_units(dec!(0.00000001), BTC_DECIMALS), Some(1));
        assert_eq!(to_base_units(dec!(0), BTC_DECIMALS), Some(0));
    }

    #[test]
    fn test_to_base_units_sub_unit_precision() {
        // More fractional digits than the asset supports.
        assert_eq!(to_base_units(dec!(0.000000001), BTC_DECIMALS), None);
    }

    #[test]
    fn test_round_trip() {
        let quantity = dec!(21.47483647);
        let base = to_base_units(quantity, BTC_DECIMALS).unwrap();
        assert_eq!(from_base_units(base, BTC_DECIMALS), quantity);
    }
}
