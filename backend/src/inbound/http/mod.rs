//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod estimates;
pub mod health;
pub mod investigations;
pub mod properties;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
