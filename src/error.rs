//! Error types for the vending machine.

use crate::money::Money;
use crate::product::Product;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Outcomes that reject a fund insertion or a purchase.
///
/// None of these are fatal; the machine is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// The inserted amount would push the balance above the cap.
    #[error("Adding fund fails! Exceeding max allowed balance: {max_allowed}")]
    ExceedMaxFund { max_allowed: Money },

    /// The balance does not cover the purchase cost.
    #[error("Not enough fund. Current balance: {balance}")]
    NotEnoughFund { balance: Money },

    /// Funds are sufficient but the stock is not.
    #[error("Not enough inventory for the product {product}")]
    NotEnoughInventory { product: Product },

    /// The product is not part of this machine's catalog.
    #[error("Invalid product {product}")]
    InvalidProduct { product: Product },
}

/// Errors that can occur while configuring or driving the machine.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Unusable catalog row
    #[error("Invalid catalog entry at row {row}: {message}")]
    InvalidCatalog { row: usize, message: String },

    /// Two catalog rows share a product id
    #[error("Duplicate product ID {id} at row {row}")]
    DuplicateProductId { id: u32, row: usize },

    /// Configuration rejected before the machine was built
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
