use crate::common::{test_context::TestContext, test_customization, unique_tx_ref};
use chapa_rust::{
    apis::payments::{PaymentRequest, PaymentRequestBuilder},
    Error, GatewayResponse,
};

fn payment_request(ctx: &TestContext, tx_ref: &str) -> PaymentRequest {
    PaymentRequestBuilder::default()
        .amount(10.0)
        .currency("ETB")
        .first_name("chap")
        .last_name("ET")
        .email("chap@et.io")
        .callback_url(ctx.callback_url.clone())
        .tx_ref(tx_ref)
        .customization(test_customization())
        .build()
        .unwrap()
}

#[tokio::test]
async fn initiate_payment() {
    let ctx = TestContext::start().await;
    let tx_ref = unique_tx_ref();

    let res = ctx
        .client
        .payments
        .initiate(&payment_request(&ctx, &tx_ref))
        .await
        .unwrap();

    assert!(res.is_success());
    assert_eq!(res.message, "Hosted Link");
    assert!(res
        .data
        .checkout_url
        .starts_with("https://checkout.chapa.co/checkout/payment"));
}

#[tokio::test]
async fn initiate_minimal_payment() {
    let ctx = TestContext::start().await;

    // Only the amount, the currency and the reference are mandatory
    let request = PaymentRequestBuilder::default()
        .amount(10.0)
        .currency("ETB")
        .tx_ref(unique_tx_ref())
        .callback_url("https://example.com")
        .build()
        .unwrap();

    let res = ctx.client.payments.initiate(&request).await.unwrap();

    assert!(res.is_success());
    assert!(res
        .data
        .checkout_url
        .starts_with("https://checkout.chapa.co/checkout/payment"));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn initiate_forwards_every_field() {
    let ctx = TestContext::start().await;
    let tx_ref = unique_tx_ref();
    let request = payment_request(&ctx, &tx_ref);

    ctx.client.payments.initiate(&request).await.unwrap();

    assert_eq!(ctx.initialized_payment(&tx_ref), Some(request));
}

#[tokio::test]
async fn invalid_payment_is_never_sent() {
    let ctx = TestContext::start().await;
    let mut request = payment_request(&ctx, &unique_tx_ref());
    request.tx_ref.clear();

    let err = ctx.client.payments.initiate(&request).await.unwrap_err();

    assert!(matches!(err, Error::ValidationError(_)));
    assert!(err.to_string().contains("invalid input"));
    #[cfg(not(feature = "acceptance-tests"))]
    assert!(ctx.received_requests().await.is_empty());
}

#[tokio::test]
async fn verify_initiated_payment() {
    let ctx = TestContext::start().await;
    let tx_ref = unique_tx_ref();
    ctx.client
        .payments
        .initiate(&payment_request(&ctx, &tx_ref))
        .await
        .unwrap()
        .ensure_success()
        .unwrap();

    let res = ctx
        .client
        .payments
        .verify(&tx_ref)
        .await
        .unwrap()
        .ensure_success()
        .unwrap();

    assert_eq!(res.message, "Payment details fetched successfully");
    assert_eq!(res.data.tx_ref.as_deref(), Some(tx_ref.as_str()));
    assert_eq!(res.data.currency.as_deref(), Some("ETB"));
    assert_eq!(res.data.amount, 10.0);
}

#[tokio::test]
async fn verify_is_idempotent() {
    let ctx = TestContext::start().await;
    let tx_ref = unique_tx_ref();
    ctx.client
        .payments
        .initiate(&payment_request(&ctx, &tx_ref))
        .await
        .unwrap();

    let first = ctx.client.payments.verify(&tx_ref).await.unwrap();
    let second = ctx.client.payments.verify(&tx_ref).await.unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(first.message, second.message);
}

#[tokio::test]
async fn verify_unknown_transaction() {
    let ctx = TestContext::start().await;

    // The call itself succeeds, the failure is reported in the body
    let res = ctx
        .client
        .payments
        .verify(&unique_tx_ref())
        .await
        .unwrap();

    assert!(!res.is_success());
    assert!(res.message.contains("Invalid transaction"));
    match res.ensure_success() {
        Err(Error::BusinessFailure { message, .. }) => {
            assert!(message.contains("Invalid transaction"))
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn list_transactions() {
    let ctx = TestContext::start().await;
    let tx_ref = unique_tx_ref();
    ctx.client
        .payments
        .initiate(&payment_request(&ctx, &tx_ref))
        .await
        .unwrap();

    let res = ctx
        .client
        .payments
        .list_transactions()
        .await
        .unwrap()
        .ensure_success()
        .unwrap();

    #[cfg(not(feature = "acceptance-tests"))]
    {
        let transaction = res
            .data
            .transactions
            .iter()
            .find(|t| t.trans_id == tx_ref)
            .unwrap();
        assert_eq!(transaction.amount, "10.00");
        assert_eq!(
            transaction.customer.as_ref().and_then(|c| c.email.as_deref()),
            Some("chap@et.io")
        );
        assert!(res.data.pagination.is_some());
    }
    #[cfg(feature = "acceptance-tests")]
    let _ = res;
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn wrong_api_key_is_reported_in_the_body() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client_with_wrong_api_key()
        .payments
        .initiate(&payment_request(&ctx, &unique_tx_ref()))
        .await
        .unwrap();

    assert!(!res.is_success());
    assert_eq!(res.message, "Invalid API Key or User doesn't exist");
    assert!(res.data.checkout_url.is_empty());
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn duplicate_references_are_rejected() {
    let ctx = TestContext::start().await;
    let request = payment_request(&ctx, &unique_tx_ref());

    let first = ctx.client.payments.initiate(&request).await.unwrap();
    let second = ctx.client.payments.initiate(&request).await.unwrap();

    assert!(first.is_success());
    assert!(!second.is_success());
    assert_eq!(second.message, "Transaction reference has been used before");
}
