// Coreum Flash Loan CLI
//
// This library renders network settings and the messages and chain client
// invocations an operator needs to deploy, query, and execute the flash loan
// and receiver contracts on Coreum. It never signs or broadcasts anything.

pub mod errors;

pub mod cli;
pub use cli::{
    dispatch,
    execute_command,
    Cli,
    Commands,
    ContractCommands,
    DeployCommands,
    config,
    commands,
    contracts,
    messages,
    output,
};

use log::debug;

/// Initialize the library with default configuration
pub fn init() {
    debug!("Initializing Coreum flash loan CLI v{}", env!("CARGO_PKG_VERSION"));
}
