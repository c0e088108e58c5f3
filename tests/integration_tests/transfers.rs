use crate::common::{test_context::TestContext, unique_tx_ref};
use chapa_rust::{
    apis::transfers::{
        BankTransfer, BankTransferBuilder, BulkDataBuilder, BulkTransferRequestBuilder,
    },
    Error, GatewayResponse,
};

fn bank_transfer(reference: &str) -> BankTransfer {
    BankTransferBuilder::default()
        .account_name("Israel Goytom")
        .account_number("32423423")
        .amount("1")
        .beneficiary_name("Israel Goytom")
        .currency("ETB")
        .reference(reference)
        .bank_code(656)
        .build()
        .unwrap()
}

#[tokio::test]
async fn transfer_to_bank() {
    let ctx = TestContext::start().await;
    let reference = unique_tx_ref();

    let res = ctx
        .client
        .transfers
        .transfer_to_bank(&bank_transfer(&reference))
        .await
        .unwrap()
        .ensure_success()
        .unwrap();

    assert!(!res.message.is_empty());
    #[cfg(not(feature = "acceptance-tests"))]
    assert_eq!(res.data, reference);
}

#[tokio::test]
async fn transfer_without_account_name_is_never_sent() {
    let ctx = TestContext::start().await;
    let mut transfer = bank_transfer(&unique_tx_ref());
    transfer.account_name.clear();

    let err = ctx
        .client
        .transfers
        .transfer_to_bank(&transfer)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ValidationError(_)));
    assert!(err.to_string().contains("invalid input"));
    #[cfg(not(feature = "acceptance-tests"))]
    assert!(ctx.received_requests().await.is_empty());
}

#[tokio::test]
async fn bulk_transfer() {
    let ctx = TestContext::start().await;
    let request = BulkTransferRequestBuilder::default()
        .title("This Month Salary!")
        .currency("ETB")
        .bulk_data(vec![
            BulkDataBuilder::default()
                .account_name("Leul Abay Ejigu")
                .account_number("0900123456")
                .amount("1")
                .reference(unique_tx_ref())
                .bank_code(855)
                .build()
                .unwrap(),
            BulkDataBuilder::default()
                .account_name("Leul Abay Ejigu")
                .account_number("0900123456")
                .amount("1")
                .reference(unique_tx_ref())
                .bank_code(855)
                .build()
                .unwrap(),
        ])
        .build()
        .unwrap();

    let res = ctx
        .client
        .transfers
        .bulk_transfer(&request)
        .await
        .unwrap()
        .ensure_success()
        .unwrap();

    assert_ne!(res.data.id, 0);
}

#[tokio::test]
async fn empty_bulk_transfer_is_never_sent() {
    let ctx = TestContext::start().await;
    let request = BulkTransferRequestBuilder::default()
        .title("This Month Salary!")
        .currency("ETB")
        .bulk_data(vec![])
        .build()
        .unwrap();

    let err = ctx
        .client
        .transfers
        .bulk_transfer(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ValidationError(_)));
    #[cfg(not(feature = "acceptance-tests"))]
    assert!(ctx.received_requests().await.is_empty());
}
