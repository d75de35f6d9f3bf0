//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of the purchasing account.
///
/// Any signed value can be represented so that callers can hand over raw
/// input; whether the account is acceptable for a purchase is decided by
/// [`AccountId::is_valid`]. Zero is a valid account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an AccountId from a raw value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns true if this account may make purchases (non-negative).
    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::empty_field("account_id"));
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("account_id", e.to_string()))
    }
}
