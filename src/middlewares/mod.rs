pub mod authentication;
pub mod inject_headers;
