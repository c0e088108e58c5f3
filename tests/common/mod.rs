
/// Customization forwarded to the hosted checkout page by the tests.
pub fn test_customization() -> std::collections::HashMap<String, serde_json::Value> {
    [
        ("title".to_string(), serde_json::json!("Payment for my favourite merchant")),
        (
            "description".to_string(),
            serde_json::json!("I love online payments"),
        ),
    ]
    .into_iter()
    .collect()
}

/// Unique transaction reference, so that tests never collide on the same account.
pub fn unique_tx_ref() -> String {
    format!("chapa-rust-{}", uuid::Uuid::new_v4().simple())
}
