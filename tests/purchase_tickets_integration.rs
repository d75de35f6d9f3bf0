//! Integration tests for ticket purchases.
//!
//! These tests drive `PurchaseTicketsHandler` through the public API with the
//! in-memory seat booking and payment adapters and verify:
//! 1. Rule rejections happen before any seat is reserved or payment taken
//! 2. Successful purchases reserve and charge exactly once with the right values
//! 3. Collaborator failures propagate without compensation

use std::sync::Arc;

use proptest::prelude::*;

use ticket_service::adapters::{
    InMemorySeatReservationService, InMemoryTicketPaymentService, Payment, SeatReservation,
};
use ticket_service::application::{
    PurchaseTicketsCommand, PurchaseTicketsHandler, PurchaseTicketsResult,
};
use ticket_service::config::PurchaseConfig;
use ticket_service::domain::foundation::{AccountId, DomainError, ErrorCode};
use ticket_service::domain::ticketing::{PurchaseError, TicketType, TicketTypeRequest};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Fixture {
    handler: PurchaseTicketsHandler,
    seats: InMemorySeatReservationService,
    payments: InMemoryTicketPaymentService,
}

impl Fixture {
    fn new() -> Self {
        Self::with_config(PurchaseConfig::default())
    }

    fn with_config(config: PurchaseConfig) -> Self {
        let seats = InMemorySeatReservationService::new();
        let payments = InMemoryTicketPaymentService::new();
        let handler = PurchaseTicketsHandler::with_policy(
            config.policy(),
            Arc::new(seats.clone()),
            Arc::new(payments.clone()),
        );
        Self {
            handler,
            seats,
            payments,
        }
    }

    async fn purchase(
        &self,
        account_id: i64,
        requests: &[(TicketType, u32)],
    ) -> Result<PurchaseTicketsResult, PurchaseError> {
        let ticket_requests = requests
            .iter()
            .map(|(t, n)| TicketTypeRequest::new(*t, *n))
            .collect();
        let cmd = PurchaseTicketsCommand::new(AccountId::new(account_id), ticket_requests);
        self.handler.handle(cmd).await
    }

    fn assert_untouched(&self) {
        assert!(self.seats.reservations().is_empty(), "seats were reserved");
        assert!(self.payments.payments().is_empty(), "payment was taken");
    }
}

use TicketType::{Adult, Child, Infant};

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn negative_account_is_rejected() {
    let fixture = Fixture::new();

    let result = fixture.purchase(-1, &[(Adult, 2), (Adult, 2)]).await;

    assert_eq!(result, Err(PurchaseError::InvalidAccount(AccountId::new(-1))));
    fixture.assert_untouched();
}

#[tokio::test]
async fn empty_request_is_rejected() {
    let fixture = Fixture::new();

    let result = fixture.purchase(1, &[]).await;

    assert_eq!(result, Err(PurchaseError::EmptyRequest));
    fixture.assert_untouched();
}

#[tokio::test]
async fn infants_and_children_without_adults_are_rejected() {
    let fixture = Fixture::new();

    let result = fixture.purchase(1, &[(Infant, 2), (Child, 2)]).await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnaccompaniedMinor);
    assert_eq!(
        err.to_string(),
        "Infants and children must be accompanied by an adult"
    );
    fixture.assert_untouched();
}

#[tokio::test]
async fn more_than_twenty_seats_is_rejected() {
    let fixture = Fixture::new();

    let result = fixture
        .purchase(1, &[(Infant, 2), (Child, 2), (Adult, 19)])
        .await;

    assert_eq!(
        result,
        Err(PurchaseError::LimitExceeded {
            requested: 21,
            limit: 20,
        })
    );
    fixture.assert_untouched();
}

#[tokio::test]
async fn valid_purchase_reserves_twenty_seats_and_charges_380() {
    let fixture = Fixture::new();

    let result = fixture
        .purchase(1, &[(Infant, 2), (Child, 2), (Adult, 18)])
        .await
        .unwrap();

    assert_eq!(result.seats_reserved, 20);
    assert_eq!(result.amount_paid, 380);
    assert_eq!(
        fixture.seats.reservations(),
        vec![SeatReservation {
            account_id: AccountId::new(1),
            seats: 20,
        }]
    );
    assert_eq!(
        fixture.payments.payments(),
        vec![Payment {
            account_id: AccountId::new(1),
            amount: 380,
        }]
    );
}

#[tokio::test]
async fn account_zero_may_purchase() {
    let fixture = Fixture::new();

    let result = fixture.purchase(0, &[(Adult, 1)]).await.unwrap();

    assert_eq!(result.account_id, AccountId::new(0));
    assert_eq!(fixture.payments.total_charged(AccountId::new(0)), 20);
}

#[tokio::test]
async fn configured_limit_replaces_default() {
    let fixture = Fixture::with_config(PurchaseConfig {
        max_tickets_per_purchase: 25,
    });

    let result = fixture
        .purchase(9, &[(Infant, 2), (Child, 2), (Adult, 19)])
        .await
        .unwrap();

    assert_eq!(result.seats_reserved, 21);
    assert_eq!(result.amount_paid, 400);
}

#[tokio::test]
async fn handler_can_be_shared_across_tasks() {
    let fixture = Arc::new(Fixture::new());

    let mut tasks = Vec::new();
    for account in 1..=4 {
        let fixture = Arc::clone(&fixture);
        tasks.push(tokio::spawn(async move {
            fixture.purchase(account, &[(Adult, 1), (Child, 1)]).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(fixture.seats.reservations().len(), 4);
    assert_eq!(fixture.payments.payments().len(), 4);
    for account in 1..=4 {
        assert_eq!(fixture.payments.total_charged(AccountId::new(account)), 30);
    }
}

// =============================================================================
// Collaborator Failures
// =============================================================================

#[tokio::test]
async fn reservation_failure_propagates_and_skips_payment() {
    let fixture = Fixture::new();
    fixture
        .seats
        .fail_next(DomainError::new(ErrorCode::InternalError, "booking system offline"));

    let result = fixture.purchase(1, &[(Adult, 2)]).await;

    match result {
        Err(PurchaseError::ReservationFailed(e)) => {
            assert_eq!(e.message, "booking system offline");
        }
        other => panic!("expected ReservationFailed, got {:?}", other),
    }
    fixture.assert_untouched();
}

#[tokio::test]
async fn payment_failure_leaves_reservation_in_place() {
    let fixture = Fixture::new();
    fixture
        .payments
        .fail_next(DomainError::new(ErrorCode::PaymentFailed, "card declined"));

    let result = fixture.purchase(1, &[(Adult, 2)]).await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PaymentFailed);
    assert!(!err.is_rejection());
    assert_eq!(fixture.seats.seats_for(AccountId::new(1)), 2);
    assert!(fixture.payments.payments().is_empty());
}

// =============================================================================
// Properties
// =============================================================================

fn line_items() -> impl Strategy<Value = Vec<(TicketType, u32)>> {
    prop::collection::vec(
        (prop_oneof![Just(Infant), Just(Child), Just(Adult)], 0u32..25),
        1..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn collaborators_called_once_with_computed_values(
        account in 0i64..10_000,
        items in line_items(),
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let fixture = Fixture::new();

        let result = runtime.block_on(fixture.purchase(account, &items));

        let count = |wanted: TicketType| -> u64 {
            items.iter().filter(|(t, _)| *t == wanted).map(|(_, n)| u64::from(*n)).sum()
        };
        let (infants, children, adults) = (count(Infant), count(Child), count(Adult));

        match result {
            Ok(purchase) => {
                prop_assert!(infants + children <= adults);
                prop_assert!(adults + children <= 20);
                prop_assert_eq!(u64::from(purchase.seats_reserved), adults + children);
                prop_assert_eq!(purchase.amount_paid, 20 * adults + 10 * children);
                prop_assert_eq!(fixture.seats.reservations().len(), 1);
                prop_assert_eq!(fixture.payments.payments().len(), 1);
                prop_assert_eq!(fixture.seats.reservations()[0].seats, purchase.seats_reserved);
                prop_assert_eq!(fixture.payments.payments()[0].amount, purchase.amount_paid);
            }
            Err(e) => {
                prop_assert!(e.is_rejection());
                prop_assert!(fixture.seats.reservations().is_empty());
                prop_assert!(fixture.payments.payments().is_empty());
            }
        }
    }
}
