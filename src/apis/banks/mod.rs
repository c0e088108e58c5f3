//! APIs and models related to banks.

mod api;
mod model;

pub use api::BanksApi;
pub use model::*;
