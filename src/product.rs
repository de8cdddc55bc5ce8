//! Product models for catalog parsing and internal representation.

use crate::money::Money;
use serde::Deserialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A product sold by the machine.
///
/// Identity is the `id` alone: two values sharing an id are the same catalog
/// entry even if their name or price differ.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique positive identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates a new product.
    pub fn new(id: u32, name: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            price,
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(id={}, name={}, price={})",
            self.id, self.name, self.price
        )
    }
}

/// Raw catalog row as read from CSV.
///
/// A price finer than one cent fails deserialization rather than being rounded.
#[derive(Debug, Deserialize)]
pub struct CatalogRecord {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub stock: u32,
}

impl CatalogRecord {
    /// Parses the raw CSV record into a catalog entry.
    ///
    /// Returns a description of the problem if the row is unusable.
    pub fn parse(&self) -> std::result::Result<CatalogEntry, String> {
        if self.id == 0 {
            return Err("product id must be positive".to_string());
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(format!("product {} has an empty name", self.id));
        }

        if self.price.is_negative() {
            return Err(format!("negative price {}", self.price));
        }

        Ok(CatalogEntry {
            product: Product::new(self.id, name, self.price),
            stock: self.stock,
        })
    }
}

/// A product together with the stock it starts with.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub product: Product,
    pub stock: u32,
}

impl CatalogEntry {
    pub fn new(product: Product, stock: u32) -> Self {
        CatalogEntry { product, stock }
    }
}
