//! Trip API client.
//!
//! Thin typed wrapper over the backend's JSON endpoints:
//! - `client.rs` - reqwest-based [`ApiClient`]
//! - `types.rs` - request/response payloads and their interpretation
//! - `error.rs` - [`ApiError`] classification

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    EndTripResponse, InactiveReason, MinutePack, RefreshTokensResponse,
    StartTripResponse, TripReport, TripStatus, TripSummary,
};
