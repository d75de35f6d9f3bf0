//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `seat_booking` - Seat reservation implementations
//! - `payment` - Payment gateway implementations

pub mod payment;
pub mod seat_booking;

pub use payment::{InMemoryTicketPaymentService, Payment};
pub use seat_booking::{InMemorySeatReservationService, SeatReservation};
