//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::DomainError;

/// Identifier of a product, as supplied by the catalog document.
///
/// Catalog files in the wild use either numbers or strings for `id`. Any JSON
/// number is accepted (negative and fractional included) and both shapes
/// round-trip unchanged. A number and a string with the same text are
/// different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(Number),
    Text(String),
}

impl ProductId {
    pub fn numeric(id: i64) -> Self {
        Self::Numeric(Number::from(id))
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::Text(id.into())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductId::Numeric(n) => core::fmt::Display::fmt(n, f),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::Numeric(Number::from(value))
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::Numeric(Number::from(value))
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    /// Text that reads as a JSON number becomes a numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        Ok(match serde_json::from_str::<Number>(trimmed) {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(trimmed.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numbers_and_strings() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[1, "bpc-157"]"#).unwrap();
        assert_eq!(ids, vec![ProductId::numeric(1), ProductId::text("bpc-157")]);
    }

    #[test]
    fn accepts_negative_and_fractional_numbers() {
        let ids: Vec<ProductId> = serde_json::from_str("[-1, 2.5, 18446744073709551615]").unwrap();
        assert_eq!(ids[0], ProductId::numeric(-1));
        assert_eq!(ids[0].to_string(), "-1");
        assert!(matches!(ids[1], ProductId::Numeric(_)));
        assert_eq!(ids[1].to_string(), "2.5");
        assert_eq!(ids[2], ProductId::from(u64::MAX));
    }

    #[test]
    fn numeric_ids_serialize_back_as_numbers() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[-1, 2.5, "x"]"#).unwrap();
        assert_eq!(
            serde_json::to_value(&ids).unwrap(),
            serde_json::json!([-1, 2.5, "x"])
        );
    }

    #[test]
    fn rejects_non_scalar_ids() {
        assert!(serde_json::from_str::<ProductId>("null").is_err());
        assert!(serde_json::from_str::<ProductId>("[1]").is_err());
        assert!(serde_json::from_str::<ProductId>("true").is_err());
    }

    #[test]
    fn from_str_prefers_numeric() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::numeric(42));
        assert_eq!("-3".parse::<ProductId>().unwrap(), ProductId::numeric(-3));
        assert_eq!("tb-500".parse::<ProductId>().unwrap(), ProductId::text("tb-500"));
        assert!(matches!(
            "  ".parse::<ProductId>(),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn display_matches_source_value() {
        assert_eq!(ProductId::numeric(7).to_string(), "7");
        assert_eq!(ProductId::text("abc").to_string(), "abc");
    }
}
