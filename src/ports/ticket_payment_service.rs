//! TicketPaymentService port - Interface to the payment gateway.

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError};

/// Port for charging an account.
///
/// Called at most once per purchase, after seats were reserved. There is no
/// retry and no reversal of the reservation when this call fails.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charge `total_amount_to_pay` to the account.
    async fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), DomainError>;
}
