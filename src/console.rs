//! Line-oriented console session driving a [`VendingMachine`].
//!
//! Reads commands from any `BufRead` and writes prompts to any `Write`, so the
//! binary uses stdin/stdout and tests use in-memory buffers.

use crate::error::{MachineError, Result};
use crate::machine::VendingMachine;
use crate::money::Money;
use crate::product::Product;
use log::{debug, info};
use std::io::{BufRead, Write};

const COMMAND_PROMPT: &str =
    "Enter N for 5 cent, D for 10 cent, Q for 25 cent, F for finish adding coin, R for reset, E for exit";

/// A coin the console accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    pub fn value(self) -> Money {
        match self {
            Coin::Nickel => Money::from_cents(5),
            Coin::Dime => Money::from_cents(10),
            Coin::Quarter => Money::from_cents(25),
        }
    }
}

/// One parsed line at the command prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(Coin),
    Finish,
    Reset,
    Exit,
}

impl Command {
    /// Parses a command letter, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "N" => Some(Command::Insert(Coin::Nickel)),
            "D" => Some(Command::Insert(Coin::Dime)),
            "Q" => Some(Command::Insert(Coin::Quarter)),
            "F" => Some(Command::Finish),
            "R" => Some(Command::Reset),
            "E" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Interactive session over a machine.
pub struct Console<R, W> {
    machine: VendingMachine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(machine: VendingMachine, input: R, output: W) -> Self {
        Console {
            machine,
            input,
            output,
        }
    }

    /// Runs until `E` is entered or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", COMMAND_PROMPT)?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    debug!("Input closed, ending session");
                    return Ok(());
                }
            };

            match Command::parse(&line) {
                Some(Command::Insert(coin)) => self.insert(coin)?,
                Some(Command::Finish) => self.select_and_purchase()?,
                Some(Command::Reset) => {
                    let refund = self.machine.reset();
                    writeln!(self.output, "Refunding ${}", refund)?;
                }
                Some(Command::Exit) => {
                    writeln!(self.output, "Exit the vending machine console app...")?;
                    info!("Session ended by user");
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid command!")?,
            }
        }
    }

    /// Gives the machine back, e.g. to inspect its state after a session.
    pub fn into_machine(self) -> VendingMachine {
        self.machine
    }

    fn insert(&mut self, coin: Coin) -> Result<()> {
        if let Err(MachineError::ExceedMaxFund { max_allowed }) =
            self.machine.add_fund(coin.value())
        {
            writeln!(
                self.output,
                "Adding fund fails! Exceeding max allowed balance: ${}",
                max_allowed
            )?;
        }
        writeln!(self.output, "Current balance: ${}", self.machine.balance())?;
        Ok(())
    }

    fn select_and_purchase(&mut self) -> Result<()> {
        let product = match self.prompt_product()? {
            Some(product) => product,
            None => return Ok(()),
        };
        let quantity = match self.prompt_quantity()? {
            Some(quantity) => quantity,
            None => return Ok(()),
        };

        match self.machine.purchase(&product, quantity) {
            Ok(_) => {
                writeln!(
                    self.output,
                    "Dispensing {} (Quantity: {})",
                    product.name, quantity
                )?;
                let change = self.machine.reset();
                writeln!(self.output, "Returning back ${}", change)?;
            }
            Err(e) => {
                self.report_failure(&e)?;
                let refund = self.machine.reset();
                writeln!(self.output, "Refunding ${}", refund)?;
            }
        }
        Ok(())
    }

    fn report_failure(&mut self, error: &MachineError) -> Result<()> {
        match error {
            MachineError::NotEnoughFund { balance } => writeln!(
                self.output,
                "You don't have enough fund. Current balance: ${}",
                balance
            )?,
            MachineError::NotEnoughInventory { product } => writeln!(
                self.output,
                "Not enough inventory for {}",
                product.name
            )?,
            MachineError::InvalidProduct { product } => {
                writeln!(self.output, "Product {} is not available", product.id)?
            }
            MachineError::ExceedMaxFund { max_allowed } => writeln!(
                self.output,
                "Exceeding max allowed balance: ${}",
                max_allowed
            )?,
        }
        Ok(())
    }

    fn prompt_product(&mut self) -> Result<Option<Product>> {
        loop {
            for (product, stock) in self.machine.list_inventory() {
                writeln!(
                    self.output,
                    "Id [{}], Item name: {}, Item price: {}, Available quantity: {}",
                    product.id, product.name, product.price, stock
                )?;
            }
            writeln!(self.output, "Please select an item by entering the id:")?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            let selected = line
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|id| self.machine.find_product(id).cloned());
            match selected {
                Some(product) => return Ok(Some(product)),
                None => writeln!(self.output, "You entered an invalid product id!")?,
            }
        }
    }

    fn prompt_quantity(&mut self) -> Result<Option<u32>> {
        loop {
            writeln!(self.output, "Please enter the desired quantity")?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            match line.trim().parse::<u32>() {
                Ok(quantity) if quantity > 0 => return Ok(Some(quantity)),
                _ => writeln!(self.output, "You entered an invalid quantity!")?,
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
