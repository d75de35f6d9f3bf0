//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SeatReservationService` - Reserves seats for an account
//! - `TicketPaymentService` - Takes payment from an account

mod seat_reservation_service;
mod ticket_payment_service;

pub use seat_reservation_service::SeatReservationService;
pub use ticket_payment_service::TicketPaymentService;
