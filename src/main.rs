//! Vending Machine CLI
//!
//! Runs an interactive console session against a fresh machine.
//!
//! # Usage
//!
//! ```bash
//! cargo run                      # default catalog
//! cargo run -- catalog.csv       # catalog with an id,name,price,stock header
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use vending_machine::{Console, MachineConfig, Result, VendingMachine};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let machine = match env::args().nth(1) {
        Some(path) => {
            let file = File::open(path)?;
            let catalog = MachineConfig::catalog_from_csv(BufReader::new(file))?;
            VendingMachine::new(MachineConfig::with_catalog(catalog))?
        }
        None => VendingMachine::initialize(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(machine, stdin.lock(), stdout.lock());
    console.run()
}
