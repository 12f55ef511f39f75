//! Plain-text rendering of the pages.

use std::fmt::Write;

use showcase_core::types::DETAIL_PLACEHOLDER_IMAGE;
use showcase_core::{DetailPage, ListPage, PageState, ProductCard, Route};

pub const TITLE: &str = "Simple Showcase";
pub const LOADING: &str = "Loading...";

pub fn error_banner(message: &str) -> String {
    format!("Error: {message}\n")
}

pub fn render_card(card: &ProductCard) -> String {
    format!(
        "[{}] {}\n    {} | {} | {}\n    image: {}\n",
        card.id, card.name, card.price_label, card.likes_label, card.href, card.image_url
    )
}

pub fn render_list(page: &ListPage) -> String {
    match page.state() {
        PageState::Loading => format!("{LOADING}\n"),
        PageState::Failed(message) => error_banner(message),
        PageState::Ready(products) if products.is_empty() => format!("{TITLE}\n\nNo products yet.\n"),
        PageState::Ready(_) => {
            let mut out = format!("{TITLE}\n\n");
            for card in page.cards() {
                out.push_str(&render_card(&card));
            }
            out
        }
    }
}

pub fn render_detail(page: &DetailPage) -> String {
    let product = match page.state() {
        PageState::Loading => return format!("{LOADING}\n"),
        PageState::Failed(message) => return error_banner(message),
        PageState::Ready(product) => product,
    };
    let back = Route::ProductList.path().unwrap_or_default();
    let mut out = format!("<- Back to List ({back})\n\n");
    let _ = writeln!(out, "{}", product.name);
    let _ = writeln!(out, "{}", product.price_label());
    if !product.description.is_empty() {
        let _ = writeln!(out, "\n{}\n", product.description);
    }
    let _ = writeln!(out, "image: {}", product.image_or(DETAIL_PLACEHOLDER_IMAGE));
    let _ = writeln!(out, "{}", product.likes_label());
    out
}

pub fn render_not_found(path: &str) -> String {
    format!("No page at {path}\n")
}
