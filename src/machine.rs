//! Balance and purchase engine.
//!
//! The machine owns the balance and the inventory and is the only place
//! either is mutated. Every call either commits fully or leaves both untouched.

use crate::config::MachineConfig;
use crate::error::{MachineError, Result};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::product::Product;
use log::{debug, warn};

/// A coin-operated vending machine.
///
/// # Invariants
///
/// - `0 <= balance <= max_balance` after every call
/// - stock only decreases, by exactly the purchased quantity
/// - a purchase either decrements stock and debits the balance, or does neither
#[derive(Debug, Clone)]
pub struct VendingMachine {
    inventory: Inventory,
    balance: Money,
    max_balance: Money,
}

impl VendingMachine {
    /// Builds a machine from a validated configuration with a zero balance.
    pub fn new(config: MachineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Fresh machine with the default catalog and cap.
    pub fn initialize() -> Self {
        Self::from_config(MachineConfig::default())
    }

    fn from_config(config: MachineConfig) -> Self {
        debug!(
            "Initializing machine with {} products, max balance {}",
            config.catalog.len(),
            config.max_balance
        );
        VendingMachine {
            inventory: Inventory::from_entries(config.catalog),
            balance: Money::ZERO,
            max_balance: config.max_balance,
        }
    }

    /// Funds inserted and not yet spent or refunded.
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn max_balance(&self) -> Money {
        self.max_balance
    }

    /// Adds inserted funds.
    ///
    /// The engine does not restrict denominations; it only rejects an amount
    /// whose resulting balance would exceed the cap. Balance is unchanged on failure.
    ///
    /// `amount` must not be negative; callers map real coins to amounts.
    pub fn add_fund(&mut self, amount: Money) -> std::result::Result<Money, MachineError> {
        debug_assert!(!amount.is_negative(), "negative fund {}", amount);
        let new_balance = match self.balance.checked_add(amount) {
            Some(new_balance) if new_balance <= self.max_balance => new_balance,
            _ => {
                debug!(
                    "Rejected fund {}: balance {} would exceed max {}",
                    amount, self.balance, self.max_balance
                );
                return Err(MachineError::ExceedMaxFund {
                    max_allowed: self.max_balance,
                });
            }
        };

        self.balance = new_balance;
        debug!("Added fund {}, balance now {}", amount, self.balance);
        Ok(self.balance)
    }

    /// Zeroes the balance and returns what it was, for the caller to refund.
    pub fn reset(&mut self) -> Money {
        let previous = self.balance;
        self.balance = Money::ZERO;
        debug!("Reset balance, returning {}", previous);
        previous
    }

    /// Every product with its current stock, sorted by id.
    pub fn list_inventory(&self) -> Vec<(Product, u32)> {
        self.inventory.list()
    }

    pub fn find_product(&self, id: u32) -> Option<&Product> {
        self.inventory.find(id)
    }

    pub fn stock_of(&self, product: &Product) -> Option<u32> {
        self.inventory.stock_of(product)
    }

    /// Buys `quantity` units of `product` and returns the remaining balance.
    ///
    /// Funds are checked before stock, so a purchase that is both unaffordable
    /// and out of stock reports `NotEnoughFund`. The catalog's price is used
    /// for known ids; an unknown id is priced as given and then rejected with
    /// `InvalidProduct`. A cost too large to represent is treated as unaffordable.
    pub fn purchase(
        &mut self,
        product: &Product,
        quantity: u32,
    ) -> std::result::Result<Money, MachineError> {
        let unit_price = self
            .inventory
            .find(product.id)
            .map_or(product.price, |known| known.price);
        let cost = match unit_price.checked_mul(quantity) {
            Some(cost) if cost <= self.balance => cost,
            Some(cost) => {
                debug!(
                    "Purchase of {} x{} costs {}, balance only {}",
                    product, quantity, cost, self.balance
                );
                return Err(MachineError::NotEnoughFund {
                    balance: self.balance,
                });
            }
            None => {
                debug!(
                    "Purchase of {} x{} overflows, balance only {}",
                    product, quantity, self.balance
                );
                return Err(MachineError::NotEnoughFund {
                    balance: self.balance,
                });
            }
        };

        match self.inventory.decrement(product, quantity) {
            Ok(remaining) => {
                debug!("Dispensed {} x{}, {} left", product, quantity, remaining);
            }
            Err(e @ MachineError::InvalidProduct { .. }) => {
                warn!("Purchase referenced a product outside the catalog: {}", product);
                return Err(e);
            }
            Err(e) => {
                debug!("Purchase of {} x{} failed: {}", product, quantity, e);
                return Err(e);
            }
        }

        self.balance -= cost;
        debug!("Debited {}, balance now {}", cost, self.balance);
        Ok(self.balance)
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::initialize()
    }
}
