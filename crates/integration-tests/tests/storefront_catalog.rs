//! Integration tests for the product listing and supporting pages.

use dogshop_core::{Catalog, CatalogPreset, Price, Product, ProductId};
use dogshop_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_home_lists_classic_catalog() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get_text(&ctx.client, "/").await;

    assert_eq!(status, StatusCode::OK);
    for (id, name, price) in [(1, "dog1", 8000), (2, "dog2", 15000), (3, "dog3", 10000)] {
        assert!(body.contains(name), "missing {name}");
        assert!(body.contains(&format!("Price: {price}")));
        assert!(body.contains(&format!("/add_to_cart/{id}")));
    }
    assert!(!body.contains("<img"));
}

#[tokio::test]
async fn test_gallery_catalog_shows_images() {
    let ctx = TestContext::with_catalog(Catalog::preset(CatalogPreset::Gallery)).await;

    let (_, body) = ctx.get_text(&ctx.client, "/").await;
    assert!(body.contains("/static/images/dog5.svg"));
    assert!(body.contains("Price: 18000"));

    let (_, body) = ctx.get_text(&ctx.client, "/add_to_cart/4").await;
    assert!(body.contains("/static/images/dog4.svg"));
    assert!(body.contains("Total: 15000"));
}

#[tokio::test]
async fn test_gallery_images_are_served() {
    let ctx = TestContext::with_catalog(Catalog::preset(CatalogPreset::Gallery)).await;

    for product in Catalog::preset(CatalogPreset::Gallery).products() {
        let image = product.image.as_deref().expect("gallery product has an image");
        let (status, body) = ctx
            .get_text(&ctx.client, &format!("/static/images/{image}"))
            .await;
        assert_eq!(status, StatusCode::OK, "missing {image}");
        assert!(body.contains("<svg"));
    }
}

#[tokio::test]
async fn test_custom_catalog() {
    let catalog = Catalog::new(vec![Product::new(ProductId::new(42), "rex", Price::new(750))])
        .expect("valid catalog");
    let ctx = TestContext::with_catalog(catalog).await;

    let (_, body) = ctx.get_text(&ctx.client, "/add_to_cart/42").await;
    assert!(body.contains("rex"));
    assert!(body.contains("Total: 750"));

    let (status, _) = ctx.get_text(&ctx.client, "/add_to_cart/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let ctx = TestContext::new().await;
    let (status, _) = ctx.get_text(&ctx.client, "/static/css/main.css").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get_text(&ctx.client, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get_text(&ctx.client, "/checkout").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not found: page");
}

#[tokio::test]
async fn test_non_numeric_product_id_is_404() {
    let ctx = TestContext::new().await;
    let (status, _) = ctx.get_text(&ctx.client, "/add_to_cart/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
