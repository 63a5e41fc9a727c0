//! Cart route handlers.
//!
//! The cart is stored in the session (see [`crate::services::cart`]). Mutating
//! routes redirect to `/cart` so a refresh never repeats the mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Redirect,
};
use dogshop_core::{Cart, LineItem, Price, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::services::CartService;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub subtotal: Price,
    pub image: Option<String>,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: Price,
    pub item_count: u32,
}

impl CartView {
    fn new(cart: &Cart, total: Price) -> Self {
        Self {
            items: cart.iter().map(|(_, line)| CartItemView::from(line)).collect(),
            total,
            item_count: cart.item_count(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
            subtotal: line.subtotal(),
            image: line.image.clone(),
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: u32,
}

/// Number of units in the session cart, for the header badge.
///
/// Session failures degrade to an empty badge rather than failing the page.
pub async fn cart_count(state: &AppState, session: &Session) -> u32 {
    match CartService::new(session, state.catalog()).get_cart().await {
        Ok((cart, _)) => cart.item_count(),
        Err(e) => {
            tracing::warn!("Failed to read cart for badge: {e}");
            0
        }
    }
}

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartShowTemplate> {
    let (cart, total) = CartService::new(&session, state.catalog())
        .get_cart()
        .await?;

    let cart = CartView::new(&cart, total);

    Ok(CartShowTemplate {
        cart_count: cart.item_count,
        cart,
    })
}

/// Add one unit of a product, then show the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    product_id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Redirect> {
    let Path(product_id) = product_id.map_err(|_| AppError::NotFound("page".to_string()))?;

    let quantity = CartService::new(&session, state.catalog())
        .add_item(product_id)
        .await?;

    let id = product_id.to_string();
    let quantity = quantity.to_string();
    let data: &[(&str, &str)] = &[("product_id", &id), ("quantity", &quantity)];
    add_breadcrumb("cart", "Added item to cart", Some(data));

    Ok(Redirect::to("/cart"))
}

/// Empty the cart, then show it.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    CartService::new(&session, state.catalog()).clear().await?;
    add_breadcrumb("cart", "Cleared cart", None);

    Ok(Redirect::to("/cart"))
}
