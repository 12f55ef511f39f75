//! Stateless HTTP request builder and response parser for the product API.
//!
//! # Design
//! `ProductClient` holds only a base path and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.
//!
//! Failures are normalized here: the server's `{"error": "..."}` payload
//! becomes the error message, falling back to a per-operation message when
//! the payload is missing.

use serde::Deserialize;

use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Product, ProductId};

/// Synchronous, stateless client for the product API.
///
/// The base path may be absolute (`http://localhost:8080/api`) or relative
/// (`/api`); it is joined the same way in both cases.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/products", self.base_url),
        }
    }

    pub fn build_get_product(&self, id: ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/products/{id}", self.base_url),
        }
    }

    /// The like endpoint takes no body.
    pub fn build_like_product(&self, id: ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/products/{id}/like", self.base_url),
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        check_status(&response, Operation::ListProducts)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Parse a single product, rejecting a body that describes a different
    /// product than `id`.
    pub fn parse_get_product(&self, id: ProductId, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response, Operation::GetProduct)?;
        let product: Product =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        if product.id != id {
            return Err(ApiError::IdMismatch {
                requested: id,
                returned: product.id,
            });
        }
        Ok(product)
    }

    /// Any 2xx counts as a registered like. The body is never read.
    pub fn parse_like_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, Operation::LikeProduct)?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: Option<String>,
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, operation: Operation) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 && operation == Operation::GetProduct {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Request {
        status: response.status,
        message: error_message(&response.body, operation),
    })
}

fn error_message(body: &str, operation: Operation) -> String {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| operation.fallback_message().to_string())
}
