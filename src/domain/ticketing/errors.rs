//! Ticket purchase error types.
//!
//! The first four variants are rule rejections raised before any
//! collaborator is called. The last two wrap collaborator failures, which
//! are propagated as-is without retry or reversal.

use thiserror::Error;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode};

/// Errors returned by a ticket purchase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Account identifier is negative.
    #[error("Account ID is not valid")]
    InvalidAccount(AccountId),

    /// No line items were supplied.
    #[error("Invalid ticket request")]
    EmptyRequest,

    /// Infants and children outnumber adults.
    #[error("Infants and children must be accompanied by an adult")]
    UnaccompaniedMinor { minors: u64, adults: u64 },

    /// More seated tickets than a single purchase allows.
    #[error("Maximum ticket purchase limit is {limit}")]
    LimitExceeded { requested: u64, limit: u32 },

    /// The seat reservation collaborator failed.
    #[error("Seat reservation failed: {0}")]
    ReservationFailed(DomainError),

    /// The payment collaborator failed. Seats may already be reserved.
    #[error("Payment failed: {0}")]
    PaymentFailed(DomainError),
}

impl PurchaseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PurchaseError::InvalidAccount(_) => ErrorCode::InvalidAccount,
            PurchaseError::EmptyRequest => ErrorCode::EmptyRequest,
            PurchaseError::UnaccompaniedMinor { .. } => ErrorCode::UnaccompaniedMinor,
            PurchaseError::LimitExceeded { .. } => ErrorCode::LimitExceeded,
            PurchaseError::ReservationFailed(_) => ErrorCode::ReservationFailed,
            PurchaseError::PaymentFailed(_) => ErrorCode::PaymentFailed,
        }
    }

    /// Returns true if the purchase was refused by a business rule,
    /// meaning no collaborator was called.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            PurchaseError::ReservationFailed(_) | PurchaseError::PaymentFailed(_)
        )
    }
}

impl From<PurchaseError> for DomainError {
    fn from(err: PurchaseError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            PurchaseError::InvalidAccount(account_id) => {
                domain.with_detail("account_id", account_id.to_string())
            }
            PurchaseError::UnaccompaniedMinor { minors, adults } => domain
                .with_detail("minors", minors.to_string())
                .with_detail("adults", adults.to_string()),
            PurchaseError::LimitExceeded { requested, limit } => domain
                .with_detail("requested", requested.to_string())
                .with_detail("limit", limit.to_string()),
            _ => domain,
        }
    }
}
