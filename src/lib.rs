//! # Vending Machine
//!
//! The balance and inventory engine of a coin-operated vending machine, plus
//! a line-oriented console that drives it.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Uses 2 decimal places via `rust_decimal`
//! - **Strict invariants**: `0 <= balance <= max_balance` always maintained
//! - **All-or-nothing purchases**: funds are checked before stock, and stock is
//!   decremented only when the debit will also happen
//! - **Identity by id**: products compare and hash on their id alone
//!
//! ## Example
//!
//! ```
//! use std::str::FromStr;
//! use vending_machine::{Money, VendingMachine};
//!
//! let mut machine = VendingMachine::initialize();
//! machine.add_fund(Money::from_str("1.00").unwrap()).unwrap();
//!
//! let product = machine.find_product(1).cloned().unwrap();
//! let change = machine.purchase(&product, 1).unwrap();
//! assert_eq!(change.to_string(), "0.45");
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod inventory;
pub mod machine;
pub mod money;
pub mod product;

pub use config::MachineConfig;
pub use console::{Coin, Command, Console};
pub use error::{Error, MachineError, Result};
pub use inventory::Inventory;
pub use machine::VendingMachine;
pub use money::Money;
pub use product::{CatalogEntry, CatalogRecord, Product};
