//! Client-side routes.

use crate::types::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    ProductList,
    /// `/products/{id}`
    ProductDetail(ProductId),
    NotFound,
}

impl Route {
    /// Match a location path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn parse(location: &str) -> Route {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::ProductList,
            ["products", id] => id.parse().map(Route::ProductDetail).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> Option<String> {
        match self {
            Route::ProductList => Some("/".to_string()),
            Route::ProductDetail(id) => Some(format!("/products/{id}")),
            Route::NotFound => None,
        }
    }
}
