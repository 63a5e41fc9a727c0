//! Integration tests for the Dog Shop.
//!
//! Each test starts its own storefront on an ephemeral port and talks to it
//! over real HTTP with a cookie-keeping client, so the session cookie makes
//! the same round trip a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dogshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart add, view, and clear flows
//! - `storefront_catalog` - Product listing, static assets, error pages

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use dogshop_core::{Catalog, CatalogPreset};
use dogshop_storefront::{config::StorefrontConfig, state::AppState};
use reqwest::Client;

/// A running storefront plus a client bound to one browser session.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront serving the classic catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn new() -> Self {
        Self::with_catalog(Catalog::preset(CatalogPreset::Classic)).await
    }

    /// Start a storefront serving `catalog`.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn with_catalog(catalog: Catalog) -> Self {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let config = StorefrontConfig {
            port: addr.port(),
            base_url: format!("http://{addr}"),
            static_dir: static_dir(),
            ..StorefrontConfig::default()
        };
        let app = dogshop_storefront::app(AppState::with_catalog(config, catalog))
            .expect("Failed to build storefront");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            client: new_client(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for `path` on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A client with its own, empty cookie jar (a second visitor).
    #[must_use]
    pub fn new_visitor(&self) -> Client {
        new_client()
    }

    /// GET `path` and return status and body text.
    ///
    /// # Panics
    ///
    /// Panics if the request fails at the transport level.
    pub async fn get_text(&self, client: &Client, path: &str) -> (reqwest::StatusCode, String) {
        let response = client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed");
        let status = response.status();
        let body = response.text().await.expect("Failed to read body");
        (status, body)
    }
}

fn new_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("storefront")
        .join("static")
}
