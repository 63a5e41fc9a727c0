//! Build script for storefront crate.
//!
//! Fingerprints `static/css/main.css` so templates can reference it under a
//! content-addressed name and browsers can cache it indefinitely.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_dir = Path::new(&manifest_dir).join("static");

    let hash = fingerprint_css(&static_dir);
    println!("cargo:rustc-env=CSS_HASH={hash}");
}

/// Copy main.css to `css/derived/main.<hash>.css` and return the short hash.
///
/// Returns an empty hash when the stylesheet is missing.
fn fingerprint_css(static_dir: &Path) -> String {
    let css_path = static_dir.join("css/main.css");
    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = match fs::read(&css_path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            return String::new();
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = digest.get(..8).unwrap_or(&digest).to_string();

    let derived_dir = static_dir.join("css/derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");
    fs::copy(&css_path, derived_dir.join(format!("main.{short_hash}.css")))
        .expect("Failed to copy CSS to derived directory");

    short_hash
}
