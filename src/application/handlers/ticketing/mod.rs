//! Ticketing handlers.
//!
//! ## Commands
//! - Purchasing tickets (rules, seat reservation, payment)

mod purchase_tickets;

pub use purchase_tickets::{PurchaseTicketsCommand, PurchaseTicketsHandler, PurchaseTicketsResult};
