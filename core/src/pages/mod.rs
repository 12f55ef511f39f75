//! Headless page state machines.
//!
//! # Design
//! A page never performs I/O. Mounting or acting on a page hands back a
//! [`Fetch`]: a request plus the [`FetchTicket`] that identifies it. The host
//! executes the request and feeds the outcome back together with the ticket.
//! A page only accepts the outcome of the latest request it issued while it
//! is still mounted, so responses that arrive after teardown or after the
//! page moved on are dropped instead of overwriting newer state.

pub mod detail;
pub mod list;

pub use detail::{DetailPage, LikeOutcome};
pub use list::ListPage;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// What the host reports back for an executed request.
pub type FetchOutcome = Result<HttpResponse, ApiError>;

/// Identifies one request issued by a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// A request the host must execute on behalf of a page.
#[derive(Debug, Clone)]
pub struct Fetch {
    pub ticket: FetchTicket,
    pub request: HttpRequest,
}

/// Lifecycle of a page's data: `Loading -> Ready | Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    /// Holds the banner message.
    Failed(String),
}

impl<T> PageState<T> {
    fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => PageState::Ready(data),
            Err(err) => PageState::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Issues tickets and tracks which load request is still wanted.
#[derive(Debug, Default)]
struct FetchGuard {
    issued: u64,
    load: Option<FetchTicket>,
    closed: bool,
}

impl FetchGuard {
    fn next_ticket(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Issue a ticket for a load, superseding any load in flight.
    fn begin_load(&mut self) -> FetchTicket {
        let ticket = self.next_ticket();
        self.load = Some(ticket);
        ticket
    }

    /// Consume `ticket` if it is the load this page is waiting for.
    fn accept_load(&mut self, ticket: FetchTicket) -> bool {
        if self.closed || self.load != Some(ticket) {
            return false;
        }
        self.load = None;
        true
    }

    fn is_loading(&self) -> bool {
        self.load.is_some()
    }

    fn close(&mut self) {
        self.closed = true;
        self.load = None;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
