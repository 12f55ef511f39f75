//! Domain DTOs for the product API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. The wire
//! form is camelCase JSON, matching what the backend emits.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown by product cards when a product has no image.
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

/// Placeholder shown by the detail view when a product has no image.
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400";

/// Backend identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

/// A single product returned by the API.
///
/// `likes` only ever grows on the client side; see [`Product::record_like`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(deserialize_with = "non_negative_price")]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub likes: u64,
}

impl Product {
    /// Price formatted for display, e.g. `$12.50`. A price lying exactly on
    /// a half cent rounds up (`1.125` → `$1.13`).
    pub fn price_label(&self) -> String {
        // A half-cent tie is an odd multiple of 1/8; anything else is not
        // exactly representable and `{:.2}` already rounds it to nearest.
        let eighths = self.price * 8.0;
        if eighths.fract() == 0.0 && eighths < 1e15 && (eighths as u64) % 2 == 1 {
            let cents = (eighths as u64) * 25 / 2 + 1;
            return format!("${}.{:02}", cents / 100, cents % 100);
        }
        format!("${:.2}", self.price)
    }

    pub fn likes_label(&self) -> String {
        format!("{} likes", self.likes)
    }

    /// The product image, or `placeholder` when the backend has none.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }

    /// Apply one successful like to the local copy.
    pub fn record_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

fn non_negative_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let price = f64::deserialize(deserializer)?;
    if !price.is_finite() || price < 0.0 {
        return Err(D::Error::custom(format!("price must be non-negative, got {price}")));
    }
    // `-0` on the wire would otherwise render as `$-0.00`.
    Ok(if price == 0.0 { 0.0 } else { price })
}
