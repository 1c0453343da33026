//! Static, read-only product/category catalog.
//!
//! The catalog is a fixed in-memory table, loaded once and never mutated at
//! runtime. It is independent of the session and journal: the core only
//! ever consumes it through read-only queries, and journal events carry
//! denormalized product snapshots rather than references into it.

mod data;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Records ─────────────────────────────────────────────────────────────────

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
  pub id:            u32,
  pub name:          String,
  pub description:   String,
  /// Number of products in this category; kept consistent with the product
  /// table by a test, not by construction.
  pub product_count: usize,
  pub subcategories: Vec<String>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id:             u32,
  pub name:           String,
  pub description:    String,
  pub price:          f64,
  /// Pre-discount price, when the product is on sale.
  pub original_price: Option<f64>,
  pub category:       String,
  pub brand:          String,
  pub tags:           Vec<String>,
  pub rating:         Option<f32>,
  pub review_count:   Option<u32>,
  pub created_at:     NaiveDate,
  pub updated_at:     NaiveDate,
}

// ─── Slugs ───────────────────────────────────────────────────────────────────

/// URL slug for a category name: lowercased, whitespace runs replaced by a
/// single hyphen. `"Home & Garden"` becomes `"home-&-garden"`.
pub fn slugify(name: &str) -> String {
  name
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join("-")
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The full catalog and its query surface.
#[derive(Debug, Clone)]
pub struct Catalog {
  categories: Vec<Category>,
  products:   Vec<Product>,
}

impl Catalog {
  /// Build the fixed sample catalog.
  pub fn sample() -> Self {
    Self {
      categories: data::categories(),
      products:   data::products(),
    }
  }

  pub fn categories(&self) -> &[Category] {
    &self.categories
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  /// All products in the named category; name comparison is
  /// case-insensitive.
  pub fn products_by_category(&self, category_name: &str) -> Vec<&Product> {
    self
      .products
      .iter()
      .filter(|p| p.category.eq_ignore_ascii_case(category_name))
      .collect()
  }

  pub fn product_by_id(&self, id: u32) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  /// Look a category up by its derived slug; comparison is
  /// case-insensitive on the slug side.
  pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
    let slug = slug.to_lowercase();
    self
      .categories
      .iter()
      .find(|c| slugify(&c.name) == slug)
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::sample()
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slugify_collapses_whitespace() {
    assert_eq!(slugify("Electronics"), "electronics");
    assert_eq!(slugify("Home & Garden"), "home-&-garden");
    assert_eq!(slugify("  Books   &  Media "), "books-&-media");
  }

  #[test]
  fn category_by_slug_round_trips_every_category() {
    let catalog = Catalog::sample();
    for category in catalog.categories() {
      let found = catalog.category_by_slug(&slugify(&category.name));
      assert_eq!(found, Some(category));
    }
    assert!(catalog.category_by_slug("no-such-category").is_none());
  }

  #[test]
  fn category_by_slug_is_case_insensitive() {
    let catalog = Catalog::sample();
    assert!(catalog.category_by_slug("ELECTRONICS").is_some());
  }

  #[test]
  fn product_lookup_by_id() {
    let catalog = Catalog::sample();
    let product = catalog.product_by_id(1).expect("product 1 exists");
    assert_eq!(product.name, "iPhone 15 Pro");
    assert!(catalog.product_by_id(9999).is_none());
  }

  #[test]
  fn products_by_category_matches_case_insensitively() {
    let catalog = Catalog::sample();
    let exact = catalog.products_by_category("Electronics");
    let lower = catalog.products_by_category("electronics");
    assert_eq!(exact, lower);
    assert!(!exact.is_empty());
    assert!(exact.iter().all(|p| p.category == "Electronics"));
  }

  #[test]
  fn product_counts_are_consistent() {
    let catalog = Catalog::sample();
    for category in catalog.categories() {
      assert_eq!(
        catalog.products_by_category(&category.name).len(),
        category.product_count,
        "category {:?}",
        category.name,
      );
    }
  }

  #[test]
  fn product_ids_are_unique() {
    let catalog = Catalog::sample();
    let mut ids: Vec<u32> = catalog.products().iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.products().len());
  }

  #[test]
  fn sample_dates_parse() {
    let catalog = Catalog::sample();
    for product in catalog.products() {
      assert!(product.created_at > NaiveDate::default(), "{}", product.name);
      assert!(product.updated_at >= product.created_at);
    }
  }
}
