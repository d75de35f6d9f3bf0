//! SeatReservationService port - Interface to the venue's seat booking system.
//!
//! The provider has no capacity limit relevant to a purchase and is expected
//! to succeed for valid arguments. Any failure it does report is propagated
//! to the purchaser unchanged.

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError};

/// Port for reserving seats against an account.
///
/// Called at most once per purchase, after every purchase rule has passed
/// and before payment is taken.
///
/// # Example
///
/// ```ignore
/// seat_reservation.reserve_seat(AccountId::new(1), 20).await?;
/// ```
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserve `total_seats_to_allocate` seats for the account.
    async fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SeatReservationService) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn seat_reservation_service_is_send_sync() {
        fn check<T: SeatReservationService>() {
            assert_send_sync::<T>();
        }
        let _ = check::<crate::adapters::InMemorySeatReservationService>;
    }
}
