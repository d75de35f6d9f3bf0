//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `ticketing` - Ticket categories, line items, and purchase rules

pub mod foundation;
pub mod ticketing;
