//! Product detail page: loads one product and lets the user like it.
//!
//! The page re-fetches when the routed id changes. A successful like bumps
//! the local copy by one without asking the server for the authoritative
//! count. Like failures are logged and leave the page as it was.

use tracing::{debug, warn};

use super::{Fetch, FetchGuard, FetchOutcome, FetchTicket, PageState};
use crate::client::ProductClient;
use crate::types::{Product, ProductId};

/// Result of feeding a like response back into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The like was registered; `likes` is the new displayed count.
    Applied { likes: u64 },
    /// The like failed. The page did not change.
    Failed(String),
    /// The response no longer concerns what the page shows.
    Ignored,
}

#[derive(Debug)]
pub struct DetailPage {
    id: ProductId,
    state: PageState<Product>,
    guard: FetchGuard,
    likes_in_flight: Vec<(FetchTicket, ProductId)>,
}

impl DetailPage {
    pub fn mount(client: &ProductClient, id: ProductId) -> (Self, Fetch) {
        let mut guard = FetchGuard::default();
        let ticket = guard.begin_load();
        let page = Self {
            id,
            state: PageState::Loading,
            guard,
            likes_in_flight: Vec::new(),
        };
        let fetch = Fetch {
            ticket,
            request: client.build_get_product(id),
        };
        (page, fetch)
    }

    /// The product id the page is routed to.
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn state(&self) -> &PageState<Product> {
        &self.state
    }

    /// Follow a route change. Returns a new fetch only when the id differs;
    /// whatever was in flight for the previous id is abandoned.
    pub fn navigate(&mut self, client: &ProductClient, id: ProductId) -> Option<Fetch> {
        if self.guard.is_closed() || id == self.id {
            return None;
        }
        debug!(from = %self.id, to = %id, "detail page navigating");
        self.id = id;
        self.state = PageState::Loading;
        self.likes_in_flight.clear();
        let ticket = self.guard.begin_load();
        Some(Fetch {
            ticket,
            request: client.build_get_product(id),
        })
    }

    pub fn resolve(&mut self, client: &ProductClient, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
        if !self.guard.accept_load(ticket) {
            debug!(?ticket, id = %self.id, "dropping stale product response");
            return false;
        }
        let id = self.id;
        self.state = PageState::from_result(outcome.and_then(|response| client.parse_get_product(id, response)));
        true
    }

    /// Start a like for the shown product. Nothing to like until the product
    /// has loaded, or while a newer load is pending.
    pub fn like(&mut self, client: &ProductClient) -> Option<Fetch> {
        if self.guard.is_closed() || self.guard.is_loading() {
            return None;
        }
        let id = self.state.data()?.id;
        let ticket = self.guard.next_ticket();
        self.likes_in_flight.push((ticket, id));
        Some(Fetch {
            ticket,
            request: client.build_like_product(id),
        })
    }

    pub fn resolve_like(&mut self, client: &ProductClient, ticket: FetchTicket, outcome: FetchOutcome) -> LikeOutcome {
        let Some(pos) = self.likes_in_flight.iter().position(|(t, _)| *t == ticket) else {
            debug!(?ticket, "dropping like response for a cancelled request");
            return LikeOutcome::Ignored;
        };
        let (_, liked) = self.likes_in_flight.swap_remove(pos);

        if let Err(err) = outcome.and_then(|response| client.parse_like_product(response)) {
            warn!(id = %liked, status = ?err.status(), error = %err, "failed to like product");
            return LikeOutcome::Failed(err.to_string());
        }

        match &mut self.state {
            PageState::Ready(product) if product.id == liked => {
                product.record_like();
                LikeOutcome::Applied { likes: product.likes }
            }
            _ => LikeOutcome::Ignored,
        }
    }

    /// Tear the page down; loads and likes still in flight are ignored.
    pub fn unmount(&mut self) {
        self.guard.close();
        self.likes_in_flight.clear();
    }

    pub fn is_mounted(&self) -> bool {
        !self.guard.is_closed()
    }
}
