mod common;

use cardsave_direct::error::PaymentError;
use common::*;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_failover_reaches_lowest_surviving_priority() {
    let harness = gbp_harness(three_endpoints());
    // gw-a and gw-b never answer; gw-c approves on its first attempt.
    harness
        .transport
        .respond("https://gw-c.example", approved_response());

    let order = order_gbp(11, dec!(25.00));
    let receipt = harness
        .processor
        .process_payment(&valid_card(), &merchant(), &policy(), &order, false)
        .await
        .unwrap();

    assert_eq!(receipt.auth_code, "12345");
    assert_eq!(
        harness.transport.calls(),
        [
            "https://gw-a.example",
            "https://gw-a.example",
            "https://gw-b.example",
            "https://gw-b.example",
            "https://gw-c.example",
        ]
    );
}

#[tokio::test]
async fn test_exhausted_endpoints_are_a_communication_failure() {
    let harness = gbp_harness(three_endpoints());

    let order = order_gbp(12, dec!(25.00));
    let failure = harness
        .processor
        .process_payment(&valid_card(), &merchant(), &policy(), &order, true)
        .await
        .unwrap_err();

    assert!(matches!(failure.error, PaymentError::Communication));
    assert!(
        failure
            .user_message
            .contains("unable to communicate with payment gateway")
    );
    // Two attempts per endpoint, all spent.
    assert_eq!(harness.transport.calls().len(), 6);

    // Customers get no transport detail.
    let harness = gbp_harness(three_endpoints());
    let failure = harness
        .processor
        .process_payment(&valid_card(), &merchant(), &policy(), &order, false)
        .await
        .unwrap_err();
    assert_eq!(failure.user_message, "Payment declined");
}

#[tokio::test]
async fn test_decoded_decline_stops_failover() {
    let harness = gbp_harness(three_endpoints());
    harness
        .transport
        .respond("https://gw-a.example", declined_response("Card declined"));

    let order = order_gbp(13, dec!(25.00));
    let failure = harness
        .processor
        .process_payment(&valid_card(), &merchant(), &policy(), &order, false)
        .await
        .unwrap_err();

    assert_eq!(failure.user_message, "Payment declined");
    // The decline was decoded, so no retry and no second endpoint.
    assert_eq!(harness.transport.calls(), ["https://gw-a.example"]);
}

#[tokio::test]
async fn test_transport_retry_then_success_on_same_endpoint() {
    let harness = gbp_harness(three_endpoints());
    harness.transport.fail("https://gw-a.example", "connection reset");
    harness
        .transport
        .respond("https://gw-a.example", approved_response());

    let order = order_gbp(14, dec!(25.00));
    let receipt = harness
        .processor
        .process_payment(&valid_card(), &merchant(), &policy(), &order, false)
        .await
        .unwrap();

    assert_eq!(receipt.auth_code, "12345");
    assert_eq!(
        harness.transport.calls(),
        ["https://gw-a.example", "https://gw-a.example"]
    );
}
