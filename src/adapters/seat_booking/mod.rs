//! Seat booking adapters.
//!
//! Implementations of the `SeatReservationService` port.

mod in_memory;

pub use in_memory::{InMemorySeatReservationService, SeatReservation};
