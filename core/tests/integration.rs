//! Page flows against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the list and detail
//! pages over real HTTP using ureq. Validates that request building,
//! response parsing and page state transitions work end-to-end with the
//! actual server.

use showcase_core::{
    ApiError, DetailPage, FetchOutcome, HttpMethod, HttpRequest, HttpResponse, LikeOutcome, ListPage, ProductClient,
    ProductId,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> FetchOutcome {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
        HttpMethod::Post => agent.post(&req.path).send_empty(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse::new(status, body))
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}

#[test]
fn list_and_detail_flow() {
    let client = ProductClient::new(&start_server());

    // Step 1: list page shows one card per seeded product, in server order.
    let (mut list, fetch) = ListPage::mount(&client);
    assert!(list.resolve(&client, fetch.ticket, execute(fetch.request)));
    let expected: Vec<i64> = mock_server::seed_catalog().iter().map(|p| p.id).collect();
    let cards = list.cards();
    assert_eq!(cards.iter().map(|c| c.id.0).collect::<Vec<_>>(), expected);

    // Step 2: follow the first card to its detail page.
    let first = &cards[0];
    let (mut detail, fetch) = DetailPage::mount(&client, first.id);
    assert!(detail.resolve(&client, fetch.ticket, execute(fetch.request)));
    let before = detail.state().data().unwrap().clone();
    assert_eq!(before.id, first.id);

    // Step 3: like it; the local count goes up by one.
    let fetch = detail.like(&client).unwrap();
    let outcome = detail.resolve_like(&client, fetch.ticket, execute(fetch.request));
    assert_eq!(outcome, LikeOutcome::Applied { likes: before.likes + 1 });

    // Step 4: a fresh fetch agrees with the local count.
    let req = client.build_get_product(first.id);
    let fresh = client.parse_get_product(first.id, execute(req).unwrap()).unwrap();
    assert_eq!(fresh.likes, before.likes + 1);

    // Step 5: like through a card, reporting upward to the list page.
    let mut liked = Vec::new();
    let mut on_liked = |id: ProductId| liked.push(id);
    let card = list.cards()[1].clone();
    assert!(card.resolve_like(&client, execute(card.like_request(&client)), Some(&mut on_liked)));
    for id in liked {
        assert!(list.record_like(id));
    }

    // Step 6: navigating the detail page re-fetches the new id.
    let fetch = detail.navigate(&client, card.id).unwrap();
    assert!(detail.resolve(&client, fetch.ticket, execute(fetch.request)));
    assert_eq!(detail.state().data().unwrap().id, card.id);
}

#[test]
fn unknown_product_shows_not_found() {
    let client = ProductClient::new(&start_server());

    let (mut detail, fetch) = DetailPage::mount(&client, ProductId(9999));
    detail.resolve(&client, fetch.ticket, execute(fetch.request));
    assert_eq!(detail.state().error(), Some("Product not found"));
    assert!(detail.like(&client).is_none());

    let err = client
        .parse_like_product(execute(client.build_like_product(ProductId(9999))).unwrap())
        .unwrap_err();
    assert_eq!(err.to_string(), "product not found");
}

#[test]
fn unreachable_server_surfaces_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let client = ProductClient::new(&format!("http://{addr}/api"));

    let (mut list, fetch) = ListPage::mount(&client);
    list.resolve(&client, fetch.ticket, execute(fetch.request));
    let message = list.state().error().unwrap();
    assert!(message.starts_with("Network error"), "{message}");
}
