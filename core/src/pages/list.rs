//! Product list page: one fetch on mount, one card per product.

use tracing::debug;

use super::{Fetch, FetchGuard, FetchOutcome, FetchTicket, PageState};
use crate::card::ProductCard;
use crate::client::ProductClient;
use crate::types::{Product, ProductId};

#[derive(Debug)]
pub struct ListPage {
    state: PageState<Vec<Product>>,
    guard: FetchGuard,
}

impl ListPage {
    /// Mount the page. The returned fetch loads the product collection.
    pub fn mount(client: &ProductClient) -> (Self, Fetch) {
        let mut guard = FetchGuard::default();
        let ticket = guard.begin_load();
        let page = Self {
            state: PageState::Loading,
            guard,
        };
        let fetch = Fetch {
            ticket,
            request: client.build_list_products(),
        };
        (page, fetch)
    }

    /// Feed back the outcome of the mount fetch. Returns `false` when the
    /// outcome was stale or the page is unmounted, in which case nothing
    /// changes.
    pub fn resolve(&mut self, client: &ProductClient, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
        if !self.guard.accept_load(ticket) {
            debug!(?ticket, "dropping stale product list response");
            return false;
        }
        self.state = PageState::from_result(outcome.and_then(|response| client.parse_list_products(response)));
        true
    }

    pub fn state(&self) -> &PageState<Vec<Product>> {
        &self.state
    }

    /// Exactly one card per product, in the order the server returned them.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.state
            .data()
            .map(|products| products.iter().map(ProductCard::from_product).collect())
            .unwrap_or_default()
    }

    /// Apply a like reported upward by one of this page's cards.
    pub fn record_like(&mut self, id: ProductId) -> bool {
        if self.guard.is_closed() {
            return false;
        }
        let PageState::Ready(products) = &mut self.state else {
            return false;
        };
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.record_like();
                true
            }
            None => false,
        }
    }

    /// Tear the page down; any fetch still in flight is ignored.
    pub fn unmount(&mut self) {
        self.guard.close();
    }

    pub fn is_mounted(&self) -> bool {
        !self.guard.is_closed()
    }
}
