//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ticketing;

pub use ticketing::{PurchaseTicketsCommand, PurchaseTicketsHandler, PurchaseTicketsResult};
