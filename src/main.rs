//! Ticket Service demo entry point.
//!
//! Runs a single purchase against the in-memory seat booking and payment
//! adapters and prints the outcome as JSON.
//!
//! ```text
//! ticket-service <ACCOUNT_ID> <TYPE:COUNT>...
//! ticket-service 1 INFANT:2 CHILD:2 ADULT:18
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use serde_json::json;

use ticket_service::adapters::{InMemorySeatReservationService, InMemoryTicketPaymentService};
use ticket_service::application::{PurchaseTicketsCommand, PurchaseTicketsHandler};
use ticket_service::config::AppConfig;
use ticket_service::domain::foundation::{AccountId, ValidationError};
use ticket_service::domain::ticketing::TicketTypeRequest;

const USAGE: &str = "usage: ticket-service <ACCOUNT_ID> <TYPE:COUNT>...";

fn parse_args(args: &[String]) -> Result<PurchaseTicketsCommand, ValidationError> {
    let (account_id, requests) = args
        .split_first()
        .ok_or_else(|| ValidationError::empty_field("account_id"))?;

    let account_id: AccountId = account_id.parse()?;
    let ticket_requests = requests
        .iter()
        .map(|r| r.parse::<TicketTypeRequest>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PurchaseTicketsCommand::new(account_id, ticket_requests))
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::from(2);
    }

    config.logging.init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = match parse_args(&args) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    let handler = PurchaseTicketsHandler::with_policy(
        config.purchase.policy(),
        Arc::new(InMemorySeatReservationService::new()),
        Arc::new(InMemoryTicketPaymentService::new()),
    );

    match handler.handle(cmd).await {
        Ok(result) => {
            println!("{}", json!({ "status": "purchased", "purchase": result }));
            ExitCode::SUCCESS
        }
        Err(e) => {
            let output = json!({
                "status": "rejected",
                "code": e.code().to_string(),
                "message": e.to_string(),
            });
            println!("{}", output);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parses_account_and_line_items() {
        let cmd = parse_args(&args(&["1", "INFANT:2", "adult:3"])).unwrap();
        assert_eq!(cmd.account_id, AccountId::new(1));
        assert_eq!(cmd.ticket_requests.len(), 2);
    }

    #[test]
    fn allows_no_line_items() {
        let cmd = parse_args(&args(&["5"])).unwrap();
        assert!(cmd.ticket_requests.is_empty());
    }

    #[test]
    fn missing_account_is_an_error() {
        assert!(matches!(
            parse_args(&[]),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn negative_count_is_an_error() {
        assert!(matches!(
            parse_args(&args(&["1", "ADULT:-1"])),
            Err(ValidationError::Negative { .. })
        ));
    }
}
