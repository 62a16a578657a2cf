//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Enough fractional digits to print any `f64` exactly (the smallest
/// subnormal has 1074).
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Non-negative price, held in the smallest currency unit (cents).
///
/// Catalog documents carry prices as JSON numbers (`9.5`, `10`); they are
/// rounded to the nearest cent on the way in and displayed as `$9.50`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    /// Largest representable price, `$184467440737095516.15`.
    pub const MAX: Price = Price { cents: u64::MAX };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Build a price from a decimal amount (e.g. `9.5` dollars).
    ///
    /// Rejects negative and non-finite amounts, and amounts above
    /// [`Price::MAX`]. Rounds the exact binary value half away from zero, so
    /// `2.675` (stored as 2.67499999...) becomes `$2.67`.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {amount})"
            )));
        }
        if amount == 0.0 {
            return Ok(Self::ZERO);
        }

        let out_of_range =
            || DomainError::validation(format!("price {amount} exceeds the maximum of {}", Price::MAX));

        // Exact decimal expansion: no rounding happens before ours.
        let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, amount);
        let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
        let whole: u64 = whole.parse().map_err(|_| out_of_range())?;

        let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().unwrap_or(0) >= 5;

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + u64::from(round_up)))
            .map(Self::from_cents)
            .ok_or_else(out_of_range)
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn amount(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::from_decimal(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.amount()
    }
}

/// Currency display with exactly two decimal places: `$9.50`.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(Price::from_decimal(9.5).unwrap().to_string(), "$9.50");
        assert_eq!(Price::from_decimal(10.0).unwrap().to_string(), "$10.00");
        assert_eq!(Price::from_decimal(0.0).unwrap().to_string(), "$0.00");
        assert_eq!(Price::from_decimal(1234.567).unwrap().to_string(), "$1234.57");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn rounds_the_stored_binary_value() {
        // Both literals sit just below the half cent once stored as f64.
        assert_eq!(Price::from_decimal(1.115).unwrap().to_string(), "$1.11");
        assert_eq!(Price::from_decimal(2.675).unwrap().to_string(), "$2.67");
        assert_eq!(Price::from_decimal(1.005).unwrap().to_string(), "$1.00");
        // 0.125 is exact: a true tie rounds away from zero.
        assert_eq!(Price::from_decimal(0.125).unwrap().to_string(), "$0.13");
        assert_eq!(Price::from_decimal(0.375).unwrap().to_string(), "$0.38");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(Price::from_decimal(-0.0).unwrap(), Price::ZERO);
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(matches!(
            Price::from_decimal(-0.01),
            Err(DomainError::Validation(_))
        ));
        assert!(Price::from_decimal(f64::NAN).is_err());
        assert!(Price::from_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn range_is_bounded_by_max() {
        assert_eq!(
            Price::from_decimal(1e15).unwrap().cents(),
            100_000_000_000_000_000
        );
        let err = Price::from_decimal(2e17).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"));
        assert!(Price::from_decimal(1e300).is_err());
    }

    #[test]
    fn deserializes_from_json_numbers() {
        let prices: Vec<Price> = serde_json::from_str("[9.5, 10, 0]").unwrap();
        assert_eq!(
            prices,
            vec![Price::from_cents(950), Price::from_cents(1000), Price::ZERO]
        );
        assert!(serde_json::from_str::<Price>("-3").is_err());
        assert!(serde_json::from_str::<Price>(r#""9.50""#).is_err());
    }

    #[test]
    fn serializes_as_decimal_amount() {
        let json = serde_json::to_string(&Price::from_cents(950)).unwrap();
        assert_eq!(json, "9.5");
    }

    proptest! {
        /// Property: display always shows a dollar sign and exactly two decimals.
        #[test]
        fn display_has_two_decimals(cents in 0u64..10_000_000_000) {
            let shown = Price::from_cents(cents).to_string();
            prop_assert!(shown.starts_with('$'));
            let (_, frac) = shown.split_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
        }

        /// Property: whole-cent decimal amounts are preserved exactly.
        #[test]
        fn whole_cent_amounts_are_exact(cents in 0u64..10_000_000) {
            let price = Price::from_decimal(cents as f64 / 100.0).unwrap();
            prop_assert_eq!(price.cents(), cents);
        }

        /// Property: agrees with std's two-decimal formatting away from exact ties.
        #[test]
        fn matches_two_decimal_formatting(amount in 0.0f64..1_000_000.0) {
            let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, amount);
            let (_, frac) = exact.split_once('.').unwrap();
            let is_tie = frac.as_bytes()[2] == b'5' && frac[3..].bytes().all(|b| b == b'0');
            prop_assume!(!is_tie);

            let shown = Price::from_decimal(amount).unwrap().to_string();
            prop_assert_eq!(shown, format!("${:.2}", amount));
        }
    }
}
