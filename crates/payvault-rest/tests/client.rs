//! End-to-end client tests against a local responder.
//!
//! Each test drives a real `PayvaultClient` over a socket, so the whole
//! pipeline is exercised: request construction, signing, dispatch, and
//! response classification.

mod support;

use auth::{ApiCredentials, RequestSigner};
use payvault_rest::{PayvaultClient, PayvaultError, ERR_INVALID_ASSET};
use rust_decimal_macros::dec;
use support::one_shot_server;

fn test_credentials() -> ApiCredentials {
    ApiCredentials::new("pvt_test_token".into(), "test_secret".into())
}

fn client_for(addr: std::net::SocketAddr) -> PayvaultClient {
    PayvaultClient::with_base_url(test_credentials(), &format!("http://{}", addr)).unwrap()
}

const TRANSACTION_BODY: &str = r#"{
    "transactionId": "tx_41d8",
    "status": "pending",
    "asset": "BTC",
    "quantity": "0.25",
    "networkFee": "0.0001",
    "toAddress": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
}"#;

#[tokio::test]
async fn test_send_funds_success() {
    common::init_logging();

    let (addr, server) = one_shot_server("200 OK", TRANSACTION_BODY).await;
    let client = client_for(addr);

    let response = client
        .send_funds("1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "BTC", dec!(0.25), None)
        .await
        .unwrap();

    assert_eq!(response.transaction_id, "tx_41d8");
    assert_eq!(response.quantity, dec!(0.25));

    let captured = server.await.unwrap();
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.path, "/api/v1/transactions");
    assert_eq!(captured.header("content-type"), Some("application/json"));
    assert_eq!(
        captured.body,
        br#"{"toAddress":"1BoatSLRHtKNngkdXEeobR76b53LETtpyT","asset":"BTC","quantity":"0.25"}"#
    );
}

#[tokio::test]
async fn test_requests_carry_verifiable_signature() {
    let (addr, server) = one_shot_server("200 OK", TRANSACTION_BODY).await;
    let client = client_for(addr);

    client
        .send_funds("1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "BTC", dec!(0.25), None)
        .await
        .unwrap();

    // Verify the signature the way the server would: recompute the digest
    // over the received method, URL, timestamp, and body.
    let captured = server.await.unwrap();
    assert_eq!(captured.header("x-payvault-api-token"), Some("pvt_test_token"));

    let timestamp: i64 = captured
        .header("x-payvault-timestamp")
        .expect("timestamp header present")
        .parse()
        .unwrap();
    let url = format!("http://{}{}", addr, captured.path);

    let credentials = test_credentials();
    let signer = RequestSigner::new(&credentials);
    let expected = signer.sign_digest(&captured.method, &url, &captured.body, timestamp);

    assert_eq!(captured.header("x-payvault-signature"), Some(expected.as_str()));
}

#[tokio::test]
async fn test_get_requests_are_signed_with_query_string() {
    let (addr, server) = one_shot_server(
        "200 OK",
        r#"{"balances":[{"asset":"BTC","available":"1.5","pending":"0"}]}"#,
    )
    .await;
    let client = client_for(addr);

    let response = client
        .get_address_balance("addr_1", &["BTC", "ETH"])
        .await
        .unwrap();
    assert_eq!(response.balances[0].available, dec!(1.5));

    let captured = server.await.unwrap();
    assert_eq!(captured.method, "GET");
    assert_eq!(captured.path, "/api/v1/addresses/addr_1/balance?assets=BTC%2CETH");
    assert!(captured.body.is_empty());

    let timestamp: i64 = captured
        .header("x-payvault-timestamp")
        .unwrap()
        .parse()
        .unwrap();
    let url = format!("http://{}{}", addr, captured.path);

    let credentials = test_credentials();
    let signer = RequestSigner::new(&credentials);
    let expected = signer.sign_digest("GET", &url, b"", timestamp);

    assert_eq!(captured.header("x-payvault-signature"), Some(expected.as_str()));
}

#[tokio::test]
async fn test_transfer_funds_insufficient_is_false() {
    let (addr, _server) = one_shot_server(
        "402 Payment Required",
        r#"{"message":"insufficient funds","errorName":"ERR_INSUFFICIENT_FUNDS"}"#,
    )
    .await;
    let client = client_for(addr);

    let sent = client
        .transfer_funds("1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "BTC", dec!(100), None)
        .await
        .unwrap();

    assert!(!sent);
}

#[tokio::test]
async fn test_transfer_funds_success_is_true() {
    let (addr, _server) = one_shot_server("200 OK", TRANSACTION_BODY).await;
    let client = client_for(addr);

    let sent = client
        .transfer_funds("1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "BTC", dec!(0.25), None)
        .await
        .unwrap();

    assert!(sent);
}

#[tokio::test]
async fn test_transfer_funds_other_errors_propagate() {
    let (addr, _server) = one_shot_server(
        "400 Bad Request",
        r#"{"message":"bad asset","errorName":"ERR_INVALID_ASSET"}"#,
    )
    .await;
    let client = client_for(addr);

    let err = client
        .transfer_funds("1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "XYZ", dec!(0.25), None)
        .await
        .unwrap_err();

    assert_eq!(err.error_name(), Some(ERR_INVALID_ASSET));
    assert_eq!(err.status(), Some(400));
    match err {
        PayvaultError::Api(_) => {}
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_archive_address_accepts_no_content() {
    let (addr, server) = one_shot_server("204 No Content", "").await;
    let client = client_for(addr);

    client.archive_address("addr_1").await.unwrap();

    let captured = server.await.unwrap();
    assert_eq!(captured.method, "DELETE");
    assert_eq!(captured.path, "/api/v1/addresses/addr_1");
    assert!(captured.body.is_empty());
}

#[tokio::test]
async fn test_create_address_decodes_response() {
    let (addr, server) = one_shot_server(
        "200 OK",
        r#"{
            "addressId": "addr_9f2c",
            "address": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
            "label": "hot wallet",
            "network": "bitcoin",
            "createdAt": 1736424000
        }"#,
    )
    .await;
    let client = client_for(addr);

    let response = client.create_address("hot wallet", Some("acct_11")).await.unwrap();
    assert_eq!(response.address_id, "addr_9f2c");

    let captured = server.await.unwrap();
    assert_eq!(
        captured.body,
        br#"{"label":"hot wallet","accountId":"acct_11"}"#
    );
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    // A success response whose JSON misses required fields.
    let (addr, _server) = one_shot_server("200 OK", r#"{"unexpected":true}"#).await;
    let client = client_for(addr);

    let err = client.get_transaction("tx_41d8").await.unwrap_err();
    match err {
        PayvaultError::Decode(_) => {}
        other => panic!("expected Decode error, got {:?}", other),
    }
}
