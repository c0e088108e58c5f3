use crate::common::test_context::TestContext;

#[tokio::test]
async fn list_banks() {
    let ctx = TestContext::start().await;

    let res = ctx.client.banks.list().await.unwrap();

    assert!(!res.data.is_empty());
    assert!(res.data.iter().all(|bank| !bank.name.is_empty()));
    assert!(res.data.iter().all(|bank| bank.acct_length > 0));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn banks_expose_their_capabilities() {
    let ctx = TestContext::start().await;

    let res = ctx.client.banks.list().await.unwrap();

    let cbe = res.data.iter().find(|bank| bank.id == 656).unwrap();
    assert!(cbe.supports_rtgs());
    assert!(!cbe.is_mobile_money());

    let telebirr = res.data.iter().find(|bank| bank.id == 855).unwrap();
    assert!(!telebirr.supports_rtgs());
    assert!(telebirr.is_mobile_money());
}
