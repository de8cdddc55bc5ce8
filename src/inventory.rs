//! Catalog and stock store.
//!
//! Every product present at construction stays present; stock only goes down,
//! and never below zero.

use crate::error::MachineError;
use crate::product::{CatalogEntry, Product};
use std::collections::HashMap;

/// Products known to the machine and their remaining stock.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    stock_by_product: HashMap<Product, u32>,
}

impl Inventory {
    /// Builds the store from catalog entries.
    ///
    /// Callers are expected to have rejected duplicate ids already; a later
    /// entry for the same id replaces the earlier product and its stock.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut stock_by_product = HashMap::new();
        for entry in entries {
            // insert alone would keep the earlier key's name and price
            stock_by_product.remove(&entry.product);
            stock_by_product.insert(entry.product, entry.stock);
        }
        Inventory { stock_by_product }
    }

    /// Returns the catalog product with the given id.
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.stock_by_product.keys().find(|p| p.id == id)
    }

    /// Remaining stock for a product, or `None` if it is not in the catalog.
    pub fn stock_of(&self, product: &Product) -> Option<u32> {
        self.stock_by_product.get(product).copied()
    }

    /// Snapshot of every product and its stock, sorted by product id.
    pub fn list(&self) -> Vec<(Product, u32)> {
        let mut items: Vec<_> = self
            .stock_by_product
            .iter()
            .map(|(product, stock)| (product.clone(), *stock))
            .collect();
        items.sort_by_key(|(product, _)| product.id);
        items
    }

    /// Removes `quantity` units of a product from stock.
    ///
    /// Fails with `InvalidProduct` for an id outside the catalog and with
    /// `NotEnoughInventory` when the stock is short. Stock is untouched on failure.
    pub fn decrement(&mut self, product: &Product, quantity: u32) -> Result<u32, MachineError> {
        let stock = match self.stock_by_product.get_mut(product) {
            Some(stock) => stock,
            None => {
                return Err(MachineError::InvalidProduct {
                    product: product.clone(),
                })
            }
        };

        if quantity > *stock {
            return Err(MachineError::NotEnoughInventory {
                product: product.clone(),
            });
        }

        *stock -= quantity;
        Ok(*stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u32, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(cents))
    }

    fn sample() -> Inventory {
        Inventory::from_entries(vec![
            CatalogEntry::new(product(3, 75), 10),
            CatalogEntry::new(product(1, 55), 10),
            CatalogEntry::new(product(2, 70), 2),
        ])
    }

    #[test]
    fn test_find_by_id() {
        let inventory = sample();
        assert_eq!(inventory.find(2).unwrap().price, Money::from_cents(70));
        assert!(inventory.find(4).is_none());
    }

    #[test]
    fn test_list_is_sorted_by_id() {
        let ids: Vec<u32> = sample().list().iter().map(|(p, _)| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_decrement_reduces_stock() {
        let mut inventory = sample();
        assert_eq!(inventory.decrement(&product(2, 70), 2), Ok(0));
        assert_eq!(inventory.stock_of(&product(2, 70)), Some(0));
        assert_eq!(inventory.stock_of(&product(1, 55)), Some(10));
    }

    #[test]
    fn test_decrement_matches_by_id_not_price() {
        let mut inventory = sample();
        let stale = Product::new(1, "Old name", Money::from_cents(1));
        assert_eq!(inventory.decrement(&stale, 1), Ok(9));
    }

    #[test]
    fn test_decrement_short_stock_leaves_stock_unchanged() {
        let mut inventory = sample();
        let result = inventory.decrement(&product(2, 70), 3);

        assert!(matches!(
            result,
            Err(MachineError::NotEnoughInventory { ref product }) if product.id == 2
        ));
        assert_eq!(inventory.stock_of(&product(2, 70)), Some(2));
    }

    #[test]
    fn test_decrement_unknown_product() {
        let mut inventory = sample();
        let result = inventory.decrement(&product(4, 100), 1);

        assert!(matches!(result, Err(MachineError::InvalidProduct { .. })));
        assert_eq!(inventory.list().len(), 3);
    }

    #[test]
    fn test_later_duplicate_entry_replaces_product_and_stock() {
        let inventory = Inventory::from_entries(vec![
            CatalogEntry::new(product(1, 55), 10),
            CatalogEntry::new(Product::new(1, "Renamed", Money::from_cents(60)), 4),
        ]);

        let listed = inventory.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0.name, "Renamed");
        assert_eq!(listed[0].0.price, Money::from_cents(60));
        assert_eq!(listed[0].1, 4);
    }
}
