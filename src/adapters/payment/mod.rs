//! Payment gateway adapters.
//!
//! Implementations of the `TicketPaymentService` port.

mod in_memory;

pub use in_memory::{InMemoryTicketPaymentService, Payment};
