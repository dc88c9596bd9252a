//! Shipped seed content and its loading rules.
//!
//! The storefront ships its seed data compiled into the binary: the seller
//! profile, the product catalog, and the default hero/stories content. A
//! fixtures directory can override any of the four files; an unreadable or
//! malformed override logs a warning and falls back to the shipped copy, so
//! a broken file never takes the shop down.
//!
//! Fixtures define the default state. The persistent store (see
//! [`crate::store`]) holds user overrides on top; whenever a persisted blob
//! is missing or malformed, loading falls back to these defaults wholesale.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::models::{HeroContent, Product, Seller, StoriesContent};

const SELLER_JSON: &str = include_str!("../fixtures/seller.json");
const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");
const HERO_JSON: &str = include_str!("../fixtures/hero.json");
const STORIES_JSON: &str = include_str!("../fixtures/stories.json");

/// Wire shape of `products.json`.
#[derive(Debug, Deserialize)]
struct ProductsFile {
    products: Vec<Product>,
}

/// The complete seed data set for one storefront.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    /// Seller/business profile.
    pub seller: Seller,
    /// Product catalog.
    pub products: Vec<Product>,
    /// Default hero slideshow.
    pub hero: HeroContent,
    /// Default stories section.
    pub stories: StoriesContent,
}

impl FixtureSet {
    /// The fixtures compiled into the binary.
    ///
    /// The shipped JSON is validated by unit test; failing to parse it is a
    /// build defect, not a runtime condition.
    #[must_use]
    pub fn shipped() -> Self {
        Self {
            seller: parse_shipped("seller.json", SELLER_JSON),
            products: parse_shipped::<ProductsFile>("products.json", PRODUCTS_JSON).products,
            hero: parse_shipped("hero.json", HERO_JSON),
            stories: parse_shipped("stories.json", STORIES_JSON),
        }
    }

    /// Load fixtures, taking per-file overrides from `dir` where present.
    ///
    /// A missing file means "use the shipped copy". An unreadable or
    /// malformed file is logged and also falls back to the shipped copy.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let shipped = Self::shipped();
        Self {
            seller: override_or(dir, "seller.json", shipped.seller),
            products: load_override::<ProductsFile>(dir, "products.json")
                .map_or(shipped.products, |f| f.products),
            hero: override_or(dir, "hero.json", shipped.hero),
            stories: override_or(dir, "stories.json", shipped.stories),
        }
    }
}

fn parse_shipped<T: DeserializeOwned>(name: &'static str, raw: &str) -> T {
    serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("shipped fixture {name} is not valid JSON: {e}"))
}

/// Read one override file; `None` when the file does not exist.
fn load_override<T: DeserializeOwned>(dir: &Path, name: &'static str) -> Option<T> {
    let path = dir.join(name);
    if !path.exists() {
        return None;
    }

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("failed to read fixture override {path:?}, using shipped copy: {e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            tracing::info!("loaded fixture override: {name}");
            Some(value)
        }
        Err(e) => {
            tracing::warn!("malformed fixture override {path:?}, using shipped copy: {e}");
            None
        }
    }
}

fn override_or<T: DeserializeOwned>(dir: &Path, name: &'static str, shipped: T) -> T {
    load_override(dir, name).unwrap_or(shipped)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_shipped_fixtures_parse() {
        let fixtures = FixtureSet::shipped();
        assert_eq!(fixtures.seller.seller_id, "marigold_001".into());
        assert_eq!(fixtures.products.len(), 6);
        assert_eq!(fixtures.hero.slides.len(), 3);
        assert_eq!(fixtures.stories.stories.len(), 3);
        assert!(fixtures.stories.visible);
    }

    #[test]
    fn test_shipped_product_ids_are_unique() {
        let fixtures = FixtureSet::shipped();
        let mut ids: Vec<_> = fixtures
            .products
            .iter()
            .map(|p| p.product_id.clone())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), fixtures.products.len());
    }

    #[test]
    fn test_load_without_overrides_matches_shipped() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FixtureSet::load(dir.path());
        let shipped = FixtureSet::shipped();
        assert_eq!(loaded.hero, shipped.hero);
        assert_eq!(loaded.stories, shipped.stories);
        assert_eq!(loaded.products, shipped.products);
    }

    #[test]
    fn test_override_file_replaces_shipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("hero.json"),
            r#"{"slides": [{"id": "slide_x", "image": "x.jpg", "tagline": "Override"}]}"#,
        )
        .unwrap();

        let loaded = FixtureSet::load(dir.path());
        assert_eq!(loaded.hero.slides.len(), 1);
        assert_eq!(loaded.hero.slides[0].tagline, "Override");
        // untouched files still come from the shipped set
        assert_eq!(loaded.stories, FixtureSet::shipped().stories);
    }

    #[test]
    fn test_malformed_override_falls_back_to_shipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("stories.json")).unwrap();
        f.write_all(b"{broken").unwrap();

        let loaded = FixtureSet::load(dir.path());
        assert_eq!(loaded.stories, FixtureSet::shipped().stories);
    }
}
