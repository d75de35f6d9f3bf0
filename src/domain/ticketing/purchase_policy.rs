//! Purchase Policy - Business rules and pricing for a ticket purchase.
//!
//! Pure domain service: no I/O and no state between calls, so evaluating the
//! same input twice always yields the same verdict.

use super::{PurchaseError, TicketType, TicketTypeRequest};
use crate::domain::foundation::AccountId;

/// Maximum number of seated tickets in a single purchase.
pub const MAXIMUM_TICKET_PURCHASE_ALLOWED: u32 = 20;

/// Aggregate ticket counts per category across all line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketTally {
    pub infants: u64,
    pub children: u64,
    pub adults: u64,
}

impl TicketTally {
    /// Sums the line items per category.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut tally, request| {
            let count = u64::from(request.no_of_tickets());
            match request.ticket_type() {
                TicketType::Infant => tally.infants = tally.infants.saturating_add(count),
                TicketType::Child => tally.children = tally.children.saturating_add(count),
                TicketType::Adult => tally.adults = tally.adults.saturating_add(count),
            }
            tally
        })
    }

    /// Returns the total for one category.
    pub fn count(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Infant => self.infants,
            TicketType::Child => self.children,
            TicketType::Adult => self.adults,
        }
    }

    /// Tickets that must be accompanied by an adult.
    pub fn minors(&self) -> u64 {
        TicketType::ALL
            .iter()
            .filter(|t| t.is_minor())
            .fold(0u64, |acc, t| acc.saturating_add(self.count(*t)))
    }
}

/// Outcome of a purchase that passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub account_id: AccountId,
    pub seats_to_reserve: u32,
    pub amount_to_pay: u64,
    pub tally: TicketTally,
}

/// Rules a purchase must satisfy before seats are reserved and paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchasePolicy {
    max_tickets_per_purchase: u32,
}

impl PurchasePolicy {
    pub fn new(max_tickets_per_purchase: u32) -> Self {
        Self {
            max_tickets_per_purchase,
        }
    }

    pub fn max_tickets_per_purchase(&self) -> u32 {
        self.max_tickets_per_purchase
    }

    /// Checks the purchase and computes what to reserve and charge.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// account, non-empty request, accompaniment, purchase limit.
    pub fn evaluate(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        if !account_id.is_valid() {
            return Err(PurchaseError::InvalidAccount(account_id));
        }

        if requests.is_empty() {
            return Err(PurchaseError::EmptyRequest);
        }

        let tally = TicketTally::from_requests(requests);

        if tally.minors() > tally.adults {
            return Err(PurchaseError::UnaccompaniedMinor {
                minors: tally.minors(),
                adults: tally.adults,
            });
        }

        let seats = requests
            .iter()
            .fold(0u64, |acc, request| acc.saturating_add(request.seats()));
        let seats_to_reserve = u32::try_from(seats)
            .ok()
            .filter(|seats| *seats <= self.max_tickets_per_purchase)
            .ok_or(PurchaseError::LimitExceeded {
                requested: seats,
                limit: self.max_tickets_per_purchase,
            })?;

        let amount_to_pay = requests
            .iter()
            .fold(0u64, |acc, request| acc.saturating_add(request.subtotal()));

        Ok(PurchaseSummary {
            account_id,
            seats_to_reserve,
            amount_to_pay,
            tally,
        })
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self::new(MAXIMUM_TICKET_PURCHASE_ALLOWED)
    }
}
