//! Purchase rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ticketing::{PurchasePolicy, MAXIMUM_TICKET_PURCHASE_ALLOWED};

/// Upper bound accepted for `max_tickets_per_purchase`.
const MAX_TICKETS_CEILING: u32 = 1000;

/// Purchase rules configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseConfig {
    /// Maximum seated tickets in one purchase
    #[serde(default = "default_max_tickets_per_purchase")]
    pub max_tickets_per_purchase: u32,
}

impl PurchaseConfig {
    /// Build the purchase policy these settings describe
    pub fn policy(&self) -> PurchasePolicy {
        PurchasePolicy::new(self.max_tickets_per_purchase)
    }

    /// Validate purchase configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_tickets_per_purchase == 0 {
            return Err(ValidationError::InvalidTicketLimit);
        }
        if self.max_tickets_per_purchase > MAX_TICKETS_CEILING {
            return Err(ValidationError::TicketLimitTooLarge);
        }
        Ok(())
    }
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: default_max_tickets_per_purchase(),
        }
    }
}

fn default_max_tickets_per_purchase() -> u32 {
    MAXIMUM_TICKET_PURCHASE_ALLOWED
}
