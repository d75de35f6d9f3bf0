//! In-memory payment adapter.
//!
//! Records every payment instead of contacting a gateway. Used by the tests
//! and the demo binary.
//!
//! # Security Note
//!
//! This adapter is for **testing and demonstration only**. It uses
//! `.expect()` on lock operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{AccountId, DomainError};
use crate::ports::TicketPaymentService;

/// A payment the adapter accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub account_id: AccountId,
    pub amount: u64,
}

#[derive(Default)]
struct PaymentState {
    payments: Vec<Payment>,
    next_error: Option<DomainError>,
}

/// Payment adapter that keeps payments in memory.
///
/// Clones share the same state.
#[derive(Clone, Default)]
pub struct InMemoryTicketPaymentService {
    inner: Arc<Mutex<PaymentState>>,
}

impl InMemoryTicketPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Fail the next payment with `error`. The error is consumed.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn fail_next(&self, error: DomainError) {
        self.inner
            .lock()
            .expect("InMemoryTicketPaymentService: lock poisoned")
            .next_error = Some(error);
    }

    /// Returns all accepted payments in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn payments(&self) -> Vec<Payment> {
        self.inner
            .lock()
            .expect("InMemoryTicketPaymentService: lock poisoned")
            .payments
            .clone()
    }

    /// Total charged to an account across all calls.
    pub fn total_charged(&self, account_id: AccountId) -> u64 {
        self.payments()
            .iter()
            .filter(|p| p.account_id == account_id)
            .map(|p| p.amount)
            .sum()
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryTicketPaymentService {
    async fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), DomainError> {
        let mut state = self
            .inner
            .lock()
            .expect("InMemoryTicketPaymentService: lock poisoned");

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        state.payments.push(Payment {
            account_id,
            amount: total_amount_to_pay,
        });

        tracing::debug!(
            account_id = %account_id,
            amount = total_amount_to_pay,
            "Payment taken"
        );

        Ok(())
    }
}
