mod common;

use common::{addresses, config_for, failure, success};
use serde_json::json;
use siacentral::http::MAX_ADDRESSES;
use siacentral::types::Currency;
use siacentral::{ClientError, LegacyClient, WalletApi};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, LegacyClient) {
    let server = MockServer::start().await;
    let client = LegacyClient::new(config_for(&server, "/v1")).unwrap();
    (server, client)
}

#[tokio::test]
async fn fees_include_sia_central_share() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/wallet/fees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "minimum": "100",
            "maximum": "300",
            "sia_central": "7"
        }))))
        .expect(2)
        .mount(&server)
        .await;

    let fees = client.get_transaction_fees().await.unwrap();
    assert_eq!(fees.sia_central, Currency::from(7u64));

    let range = WalletApi::fee_range(&client).await.unwrap();
    assert_eq!(range, (Currency::from(100u64), Currency::from(300u64)));
}

#[tokio::test]
async fn find_address_balance_reads_legacy_shape() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/wallet/addresses"))
        .and(query_param("limit", "50"))
        .and(query_param("page", "2"))
        .and(body_json(json!({ "addresses": ["addr1"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "unspent_total": "900",
            "unspent_outputs": [{ "output_id": "o1", "unlock_hash": "addr1", "value": "900" }],
            "transactions": [{ "transaction_id": "t1" }],
            "unconfirmed_transactions": []
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let balance = client
        .find_address_balance(50, 2, &["addr1".to_string()])
        .await
        .unwrap();
    assert_eq!(balance.unspent, Currency::from(900u64));
    assert_eq!(balance.unspent_outputs[0].value, Currency::from(900u64));
    assert_eq!(balance.transactions[0].transaction_id, "t1");
}

#[tokio::test]
async fn get_address_balance_by_path() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/wallet/addresses/addr9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "unspent_total": "1" }))))
        .expect(1)
        .mount(&server)
        .await;

    let balance = client.get_address_balance(10, 0, "addr9").await.unwrap();
    assert_eq!(balance.unspent, Currency::from(1u64));
}

#[tokio::test]
async fn used_addresses_and_limit() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/wallet/addresses/used"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "addresses": [{ "address": "x", "used": true }]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let used = client.find_used_addresses(&addresses(MAX_ADDRESSES)).await.unwrap();
    assert_eq!(used.len(), 1);

    let err = client
        .find_used_addresses(&addresses(MAX_ADDRESSES + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::TooManyAddresses(_)));
}

#[tokio::test]
async fn application_failure_message_is_verbatim() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/wallet/fees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure("fees unavailable")))
        .mount(&server)
        .await;

    let err = client.get_transaction_fees().await.unwrap_err();
    assert_eq!(err.to_string(), "fees unavailable");
}
