//! Error types for the product API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because pages show a not-found
//! specific message. Every other failure carries a message that is already
//! fit for the error banner, so `to_string()` is all a UI needs.

use thiserror::Error;

use crate::types::ProductId;

/// Logical API operation, used to pick the fallback failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListProducts,
    GetProduct,
    LikeProduct,
}

impl Operation {
    /// Message used when the server sends no `{"error": ...}` payload.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::ListProducts => "Failed to fetch products",
            Operation::GetProduct => "Failed to fetch product",
            Operation::LikeProduct => "Failed to like product",
        }
    }
}

/// Errors returned by `ProductClient` parse methods and by hosts executing
/// requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("Product not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// A product fetch answered with a different product.
    #[error("Requested product {requested} but received {returned}")]
    IdMismatch {
        requested: ProductId,
        returned: ProductId,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("Invalid response from server: {0}")]
    Deserialization(String),

    /// The host could not complete the round-trip.
    #[error("Network error: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status behind the error, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
