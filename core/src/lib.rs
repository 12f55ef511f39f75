//! Synchronous API client and page logic for the product showcase.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the client sit the
//! headless list and detail pages, the product card, and the route table.
//!
//! # Design
//! - `ProductClient` is stateless; it holds only the base path.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - Pages hand out `Fetch` values and accept outcomes tagged with a
//!   `FetchTicket`, which lets them drop responses that arrive after
//!   teardown or navigation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod card;
pub mod client;
pub mod error;
pub mod http;
pub mod pages;
pub mod route;
pub mod types;

pub use card::ProductCard;
pub use client::ProductClient;
pub use error::{ApiError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use pages::{DetailPage, Fetch, FetchOutcome, FetchTicket, LikeOutcome, ListPage, PageState};
pub use route::Route;
pub use types::{Product, ProductId};
