//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Maps a product image file name to its public URL.
///
/// Usage in templates: `{{ image|product_image }}`
#[askama::filter_fn]
pub fn product_image(file_name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(product_image_url(&file_name.to_string()))
}

pub(crate) fn product_image_url(file_name: &str) -> String {
    format!("/static/images/{}", file_name.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_image_url() {
        assert_eq!(product_image_url("dog1.jpg"), "/static/images/dog1.jpg");
        assert_eq!(product_image_url("/dog2.jpg"), "/static/images/dog2.jpg");
    }
}
