//! HTTP inbound adapter exposing the REST endpoints.

pub mod contact;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
pub use state::HttpState;
