//! A single line item of a purchase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TicketType;
use crate::domain::foundation::ValidationError;

/// Request for a number of tickets of one category.
///
/// The count is unsigned, so a negative quantity cannot reach the purchase
/// rules. Textual input is parsed with [`FromStr`] in the form `TYPE:COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }

    /// Seats this line item occupies (zero for infants).
    pub fn seats(&self) -> u64 {
        if self.ticket_type.occupies_seat() {
            u64::from(self.no_of_tickets)
        } else {
            0
        }
    }

    /// Price of this line item.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.no_of_tickets) * self.ticket_type.price()
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ticket_type, self.no_of_tickets)
    }
}

impl FromStr for TicketTypeRequest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ticket_type, count) = s.split_once(':').ok_or_else(|| {
            ValidationError::invalid_format(
                "ticket_request",
                format!("expected TYPE:COUNT, got '{}'", s),
            )
        })?;

        let ticket_type: TicketType = ticket_type.parse()?;

        let count = count.trim();
        if count.is_empty() {
            return Err(ValidationError::empty_field("no_of_tickets"));
        }
        let count: i64 = count.parse().map_err(|_| {
            ValidationError::invalid_format("no_of_tickets", format!("'{}' is not a number", count))
        })?;
        if count < 0 {
            return Err(ValidationError::negative("no_of_tickets", count));
        }
        let count = u32::try_from(count)
            .map_err(|_| ValidationError::invalid_format("no_of_tickets", "count is too large"))?;

        Ok(Self::new(ticket_type, count))
    }
}
