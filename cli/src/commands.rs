//! Page-driving commands. Each mounts a page, executes its fetches through
//! the transport, renders the result and tears the page down.

use std::io::Write;

use anyhow::{Context as _, Result};
use showcase_core::{DetailPage, LikeOutcome, ListPage, ProductClient, ProductId, Route};
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::transport::UreqTransport;
use crate::view;

pub struct Context {
    pub client: ProductClient,
    pub transport: UreqTransport,
}

impl Context {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;
        let client = ProductClient::new(&config.base_url);
        debug!(base_url = client.base_url(), origin = %config.origin, "api client configured");
        Ok(Self {
            client,
            transport: UreqTransport::new(&config.origin, config.timeout()),
        })
    }

    fn load_list(&self) -> ListPage {
        let (mut page, fetch) = ListPage::mount(&self.client);
        let outcome = self.transport.execute(fetch.request);
        page.resolve(&self.client, fetch.ticket, outcome);
        page
    }

    fn load_detail(&self, id: ProductId) -> DetailPage {
        let (mut page, fetch) = DetailPage::mount(&self.client, id);
        let outcome = self.transport.execute(fetch.request);
        page.resolve(&self.client, fetch.ticket, outcome);
        page
    }
}

fn emit(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).context("failed to write output")
}

pub fn list(ctx: &Context, out: &mut impl Write) -> Result<()> {
    let mut page = ctx.load_list();
    emit(out, &view::render_list(&page))?;
    page.unmount();
    Ok(())
}

pub fn show(ctx: &Context, id: ProductId, out: &mut impl Write) -> Result<()> {
    let mut page = ctx.load_detail(id);
    emit(out, &view::render_detail(&page))?;
    page.unmount();
    Ok(())
}

/// Like from the detail page. A failed like is logged and the page is shown
/// unchanged.
pub fn like(ctx: &Context, id: ProductId, out: &mut impl Write) -> Result<()> {
    let mut page = ctx.load_detail(id);
    if let Some(fetch) = page.like(&ctx.client) {
        let outcome = ctx.transport.execute(fetch.request);
        if let LikeOutcome::Applied { likes } = page.resolve_like(&ctx.client, fetch.ticket, outcome) {
            info!(id = %page.id(), likes, "like registered");
        }
    }
    emit(out, &view::render_detail(&page))?;
    page.unmount();
    Ok(())
}

/// Like through the list page's card; the card reports success upward and
/// the list applies it.
pub fn like_card(ctx: &Context, id: ProductId, out: &mut impl Write) -> Result<()> {
    let mut page = ctx.load_list();
    if let Some(card) = page.cards().into_iter().find(|card| card.id == id) {
        let outcome = ctx.transport.execute(card.like_request(&ctx.client));
        let mut on_liked = |liked: ProductId| {
            page.record_like(liked);
        };
        card.resolve_like(&ctx.client, outcome, Some(&mut on_liked));
    } else if page.state().data().is_some() {
        emit(out, &format!("Product {id} is not in the list\n"))?;
    }
    emit(out, &view::render_list(&page))?;
    page.unmount();
    Ok(())
}

/// Render whatever page `path` routes to.
pub fn open(ctx: &Context, path: &str, out: &mut impl Write) -> Result<()> {
    match Route::parse(path) {
        Route::ProductList => list(ctx, out),
        Route::ProductDetail(id) => show(ctx, id, out),
        Route::NotFound => emit(out, &view::render_not_found(path)),
    }
}
