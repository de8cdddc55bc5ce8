//! Machine configuration: balance cap and starting catalog.

use crate::error::{Error, Result};
use crate::money::Money;
use crate::product::{CatalogEntry, CatalogRecord, Product};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::collections::HashSet;
use std::io::Read;

/// Balance cap used when none is configured: one currency unit.
pub const DEFAULT_MAX_BALANCE_CENTS: i64 = 100;

/// Starting stock for each product of the default catalog.
pub const DEFAULT_STOCK: u32 = 10;

/// Everything needed to build a fresh machine.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Largest balance the machine accepts.
    pub max_balance: Money,

    /// Products and their starting stock.
    pub catalog: Vec<CatalogEntry>,
}

impl MachineConfig {
    /// Creates a config with the default cap and the given catalog.
    pub fn with_catalog(catalog: Vec<CatalogEntry>) -> Self {
        MachineConfig {
            max_balance: Money::from_cents(DEFAULT_MAX_BALANCE_CENTS),
            catalog,
        }
    }

    /// Replaces the balance cap.
    pub fn max_balance(mut self, max_balance: Money) -> Self {
        self.max_balance = max_balance;
        self
    }

    /// Reads a catalog from CSV with an `id,name,price,stock` header.
    ///
    /// Unlike transaction streams, a catalog is all-or-nothing: the first bad
    /// row fails the whole load.
    pub fn catalog_from_csv<R: Read>(reader: R) -> Result<Vec<CatalogEntry>> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let mut seen = HashSet::new();
        let mut catalog = Vec::new();

        for (row_idx, result) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row
            let record = result?;
            let entry = record
                .parse()
                .map_err(|message| Error::InvalidCatalog { row, message })?;

            if !seen.insert(entry.product.id) {
                return Err(Error::DuplicateProductId {
                    id: entry.product.id,
                    row,
                });
            }

            debug!("Row {}: Loaded {} with stock {}", row, entry.product, entry.stock);
            catalog.push(entry);
        }

        Ok(catalog)
    }

    /// Checks the invariants a machine relies on.
    pub fn validate(&self) -> Result<()> {
        if self.max_balance.is_negative() {
            return Err(Error::InvalidConfig(format!(
                "max balance {} is negative",
                self.max_balance
            )));
        }

        let mut seen = HashSet::new();
        for (idx, entry) in self.catalog.iter().enumerate() {
            let product = &entry.product;
            if product.id == 0 {
                return Err(Error::InvalidConfig(
                    "product id must be positive".to_string(),
                ));
            }
            if product.price.is_negative() {
                return Err(Error::InvalidConfig(format!(
                    "{} has a negative price",
                    product
                )));
            }
            if !seen.insert(product.id) {
                return Err(Error::DuplicateProductId {
                    id: product.id,
                    row: idx + 1,
                });
            }
        }

        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig::with_catalog(vec![
            CatalogEntry::new(
                Product::new(1, "Product 1", Money::from_cents(55)),
                DEFAULT_STOCK,
            ),
            CatalogEntry::new(
                Product::new(2, "Product 2", Money::from_cents(70)),
                DEFAULT_STOCK,
            ),
            CatalogEntry::new(
                Product::new(3, "Product 3", Money::from_cents(75)),
                DEFAULT_STOCK,
            ),
        ])
    }
}
