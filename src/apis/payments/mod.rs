//! APIs and models related to accepting payments.

mod api;
mod model;

pub use api::PaymentsApi;
pub use model::*;
