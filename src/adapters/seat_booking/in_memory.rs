//! In-memory seat reservation adapter.
//!
//! Records every reservation instead of contacting a booking system. Used by
//! the tests and the demo binary.
//!
//! # Security Note
//!
//! This adapter is for **testing and demonstration only**. It uses
//! `.expect()` on lock operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{AccountId, DomainError};
use crate::ports::SeatReservationService;

/// A reservation the adapter accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatReservation {
    pub account_id: AccountId,
    pub seats: u32,
}

#[derive(Default)]
struct ReservationState {
    reservations: Vec<SeatReservation>,
    next_error: Option<DomainError>,
}

/// Seat reservation adapter that keeps reservations in memory.
///
/// Clones share the same state, so a test can keep a handle while the
/// handler owns another.
///
/// # Example
///
/// ```ignore
/// let seats = InMemorySeatReservationService::new();
/// handler_with(Arc::new(seats.clone()));
///
/// assert_eq!(seats.reservations().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemorySeatReservationService {
    inner: Arc<Mutex<ReservationState>>,
}

impl InMemorySeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Fail the next reservation with `error`. The error is consumed.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn fail_next(&self, error: DomainError) {
        self.inner
            .lock()
            .expect("InMemorySeatReservationService: lock poisoned")
            .next_error = Some(error);
    }

    /// Returns all accepted reservations in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn reservations(&self) -> Vec<SeatReservation> {
        self.inner
            .lock()
            .expect("InMemorySeatReservationService: lock poisoned")
            .reservations
            .clone()
    }

    /// Total seats reserved for an account across all calls.
    pub fn seats_for(&self, account_id: AccountId) -> u64 {
        self.reservations()
            .iter()
            .filter(|r| r.account_id == account_id)
            .map(|r| u64::from(r.seats))
            .sum()
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> Result<(), DomainError> {
        let mut state = self
            .inner
            .lock()
            .expect("InMemorySeatReservationService: lock poisoned");

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        state.reservations.push(SeatReservation {
            account_id,
            seats: total_seats_to_allocate,
        });

        tracing::debug!(
            account_id = %account_id,
            seats = total_seats_to_allocate,
            "Seats reserved"
        );

        Ok(())
    }
}
