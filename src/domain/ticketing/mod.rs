//! Ticketing module - Ticket categories, line items, and purchase rules.
//!
//! - `TicketType` - Closed set of categories with price and seat lookup
//! - `TicketTypeRequest` - One (category, count) line item
//! - `PurchasePolicy` - Ordered purchase rules and the seat/amount calculation
//! - `PurchaseError` - Rule rejections and collaborator failures

mod errors;
mod purchase_policy;
mod ticket_request;
mod ticket_type;

pub use errors::PurchaseError;
pub use purchase_policy::{
    PurchasePolicy, PurchaseSummary, TicketTally, MAXIMUM_TICKET_PURCHASE_ALLOWED,
};
pub use ticket_request::TicketTypeRequest;
pub use ticket_type::TicketType;
