//! Ticket category definitions.
//!
//! Each category carries its unit price and whether it occupies a seat.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Ticket category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// Lap-held, free, no seat.
    Infant,

    /// Seated at the child price.
    Child,

    /// Seated at the full price. Also covers accompaniment of minors.
    Adult,
}

impl TicketType {
    /// All categories, in display order.
    pub const ALL: [TicketType; 3] = [TicketType::Infant, TicketType::Child, TicketType::Adult];

    /// Returns the unit price of this category.
    pub fn price(&self) -> u64 {
        match self {
            TicketType::Infant => 0,
            TicketType::Child => 10,
            TicketType::Adult => 20,
        }
    }

    /// Returns true if a ticket of this category is allocated a seat.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// Returns true if this category must be accompanied by an adult.
    pub fn is_minor(&self) -> bool {
        matches!(self, TicketType::Infant | TicketType::Child)
    }

    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Infant => "INFANT",
            TicketType::Child => "CHILD",
            TicketType::Adult => "ADULT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFANT" => Ok(TicketType::Infant),
            "CHILD" => Ok(TicketType::Child),
            "ADULT" => Ok(TicketType::Adult),
            "" => Err(ValidationError::empty_field("ticket_type")),
            other => Err(ValidationError::invalid_format(
                "ticket_type",
                format!("unknown ticket type '{}'", other),
            )),
        }
    }
}
