//! PurchaseTicketsHandler - Command handler for buying tickets.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::domain::foundation::AccountId;
use crate::domain::ticketing::{PurchaseError, PurchasePolicy, TicketTypeRequest};
use crate::ports::{SeatReservationService, TicketPaymentService};

/// Command to purchase tickets for an account.
#[derive(Debug, Clone)]
pub struct PurchaseTicketsCommand {
    pub account_id: AccountId,
    pub ticket_requests: Vec<TicketTypeRequest>,
}

impl PurchaseTicketsCommand {
    pub fn new(account_id: AccountId, ticket_requests: Vec<TicketTypeRequest>) -> Self {
        Self {
            account_id,
            ticket_requests,
        }
    }
}

/// Result of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseTicketsResult {
    pub account_id: AccountId,
    pub seats_reserved: u32,
    pub amount_paid: u64,
}

/// Handler for ticket purchases.
///
/// Evaluates the purchase rules and, only when all of them pass, reserves
/// seats and then takes payment. Each collaborator is called exactly once.
/// If payment fails the reservation is left in place.
pub struct PurchaseTicketsHandler {
    policy: PurchasePolicy,
    seat_reservation: Arc<dyn SeatReservationService>,
    payment: Arc<dyn TicketPaymentService>,
}

impl PurchaseTicketsHandler {
    pub fn new(
        seat_reservation: Arc<dyn SeatReservationService>,
        payment: Arc<dyn TicketPaymentService>,
    ) -> Self {
        Self::with_policy(PurchasePolicy::default(), seat_reservation, payment)
    }

    pub fn with_policy(
        policy: PurchasePolicy,
        seat_reservation: Arc<dyn SeatReservationService>,
        payment: Arc<dyn TicketPaymentService>,
    ) -> Self {
        Self {
            policy,
            seat_reservation,
            payment,
        }
    }

    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    pub async fn handle(
        &self,
        cmd: PurchaseTicketsCommand,
    ) -> Result<PurchaseTicketsResult, PurchaseError> {
        debug!(
            account_id = %cmd.account_id,
            line_items = cmd.ticket_requests.len(),
            "Evaluating ticket purchase"
        );

        // 1. Apply purchase rules
        let summary = self
            .policy
            .evaluate(cmd.account_id, &cmd.ticket_requests)
            .inspect_err(|e| {
                warn!(
                    account_id = %cmd.account_id,
                    code = %e.code(),
                    "Ticket purchase rejected: {}", e
                )
            })?;

        // 2. Reserve seats
        self.seat_reservation
            .reserve_seat(summary.account_id, summary.seats_to_reserve)
            .await
            .map_err(|e| {
                error!(account_id = %summary.account_id, "Seat reservation failed: {}", e);
                PurchaseError::ReservationFailed(e)
            })?;

        // 3. Take payment
        self.payment
            .make_payment(summary.account_id, summary.amount_to_pay)
            .await
            .map_err(|e| {
                error!(
                    account_id = %summary.account_id,
                    seats_reserved = summary.seats_to_reserve,
                    "Payment failed after seats were reserved: {}", e
                );
                PurchaseError::PaymentFailed(e)
            })?;

        info!(
            account_id = %summary.account_id,
            seats = summary.seats_to_reserve,
            amount = summary.amount_to_pay,
            "Tickets purchased"
        );

        Ok(PurchaseTicketsResult {
            account_id: summary.account_id,
            seats_reserved: summary.seats_to_reserve,
            amount_paid: summary.amount_to_pay,
        })
    }
}
