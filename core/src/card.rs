//! Presentational product card.
//!
//! A card captures the display fields of one product and can register a like
//! for it. It does not track the count itself; on success it optionally
//! reports the liked id to its owner.

use tracing::{debug, warn};

use crate::client::ProductClient;
use crate::http::HttpRequest;
use crate::route::Route;
use crate::pages::FetchOutcome;
use crate::types::{Product, ProductId, CARD_PLACEHOLDER_IMAGE};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price_label: String,
    pub likes_label: String,
    pub image_url: String,
    /// Route of the product's detail page.
    pub href: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price_label: product.price_label(),
            likes_label: product.likes_label(),
            image_url: product.image_or(CARD_PLACEHOLDER_IMAGE).to_string(),
            href: Route::ProductDetail(product.id).path().unwrap_or_default(),
        }
    }

    pub fn like_request(&self, client: &ProductClient) -> HttpRequest {
        client.build_like_product(self.id)
    }

    /// Interpret the like response. On success `on_liked` receives the id.
    /// Failures are logged and otherwise swallowed.
    pub fn resolve_like(
        &self,
        client: &ProductClient,
        outcome: FetchOutcome,
        on_liked: Option<&mut dyn FnMut(ProductId)>,
    ) -> bool {
        match outcome.and_then(|response| client.parse_like_product(response)) {
            Ok(()) => {
                debug!(id = %self.id, "product liked");
                if let Some(callback) = on_liked {
                    callback(self.id);
                }
                true
            }
            Err(err) => {
                warn!(id = %self.id, status = ?err.status(), error = %err, "failed to like product");
                false
            }
        }
    }
}
