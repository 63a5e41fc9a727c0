//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use dogshop_core::{Price, Product, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use super::cart::cart_count;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
    pub cart_count: u32,
}

/// Display the product catalog.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let products = state
        .catalog()
        .products()
        .iter()
        .map(ProductView::from)
        .collect();

    HomeTemplate {
        products,
        cart_count: cart_count(&state, &session).await,
    }
}
