use crate::apis::payments::{Customer, Transaction, TransactionStatus};
use chrono::Utc;
use rand::Rng;
use tokio::sync::Mutex;

const REFERENCE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generates a random lowercase reference of the given length.
pub fn random_reference(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect()
}

/// In-memory storage for customers and the transactions they checked out.
///
/// Customers are fixed at construction. Transactions are kept newest first.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    customers: Vec<Customer>,
    transactions: Mutex<Vec<Transaction>>,
}

impl InMemoryStore {
    pub fn new(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        Self {
            customers,
            transactions: Mutex::new(transactions),
        }
    }

    /// Creates a store with two customers and two pending transactions of the first one.
    pub fn with_sample_data() -> Self {
        let customers = vec![
            Customer {
                id: 1002,
                email: Some(format!("{}@gmail.com", random_reference(5))),
                first_name: Some("Jon".to_string()),
                last_name: Some("Mary".to_string()),
                mobile: None,
            },
            Customer {
                id: 1032,
                email: Some(format!("{}@gmail.com", random_reference(5))),
                first_name: Some("Do".to_string()),
                last_name: Some("Josef".to_string()),
                mobile: None,
            },
        ];
        let transactions = [("10.00", "0.35"), ("20.00", "0.40")]
            .into_iter()
            .map(|(amount, charge)| Transaction {
                status: TransactionStatus::Pending,
                trans_id: random_reference(10),
                amount: amount.to_string(),
                charge: charge.to_string(),
                currency: "ETB".to_string(),
                created_at: Some(Utc::now()),
                customer: Some(customers[0].clone()),
                ..Default::default()
            })
            .collect();

        Self::new(customers, transactions)
    }

    pub fn customer_by_id(&self, customer_id: i64) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }

    /// Records a new transaction in front of the existing ones.
    pub async fn save_transaction(&self, transaction: Transaction) {
        self.transactions.lock().await.insert(0, transaction);
    }

    /// Returns a snapshot of all the transactions, newest first.
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().await.clone()
    }
}
