use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use flash_loan_lib::cli;

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Variables already set in the environment win over the .env file
    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    // Initialize the library
    flash_loan_lib::init();

    // Parse command line arguments
    let cli = cli::Cli::parse();

    // Execute the command
    if let Err(e) = cli::execute_command(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}
