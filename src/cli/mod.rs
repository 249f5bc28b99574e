// CLI module for the Coreum flash loan contracts
use clap::{Parser, Subcommand};
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod commands;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod messages;
pub mod output;
pub mod validation;

use commands::DeployOptions;
use config::{default_config_path, Network, Session};
use constants::{CONFIG_PATH_ENV_VAR, DEFAULT_FEE};
use contracts::{ContractKind, ProcessEnv};

use crate::errors::FlashLoanResult;

#[derive(Parser, Debug)]
#[command(name = "flash-loan")]
#[command(about = "Coreum Flash Loan CLI - Interact with flash loan contracts on Coreum", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Coreum network to use
    #[arg(short, long, global = true, value_enum, default_value_t = Network::Testnet)]
    pub network: Network,

    /// Network configuration document
    #[arg(long, global = true, env = CONFIG_PATH_ENV_VAR, help = "Path to the network configuration file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy contracts to Coreum network
    #[command(about = "Deploy contracts to Coreum network")]
    Deploy {
        #[command(subcommand)]
        command: DeployCommands,
    },
    /// Interact with deployed contracts
    #[command(about = "Interact with deployed contracts")]
    Contract {
        #[command(subcommand)]
        command: ContractCommands,
    },
    /// Show current configuration
    Config,
    /// List available networks
    Networks,
}

#[derive(Subcommand, Debug)]
pub enum DeployCommands {
    /// Deploy all contracts
    All,
    /// Deploy the flash loan contract
    FlashLoan {
        /// Admin address for the contract
        #[arg(long)]
        admin: Option<String>,

        /// Fee percentage (default: 0.003)
        #[arg(long, default_value = DEFAULT_FEE)]
        fee: String,

        /// Loan denomination (e.g., ucore, or cw20 address)
        #[arg(long)]
        denom: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContractCommands {
    /// Get contract information
    Info {
        #[arg(value_enum)]
        contract: ContractKind,
    },
    /// Query flash loan contract configuration
    QueryConfig,
    /// Query flash loan contract balance
    QueryBalance,
    /// Query provided amount for an address
    QueryProvided { address: String },
    /// Provide liquidity to the flash loan contract
    Provide { amount: u128 },
    /// Withdraw liquidity from the flash loan contract
    Withdraw,
    /// Request a flash loan
    Loan { receiver: String, amount: u128 },
}

/// Run one parsed command against a loaded session
pub fn dispatch<W: Write>(command: &Commands, session: &Session, out: &mut W) -> FlashLoanResult<()> {
    match command {
        Commands::Deploy { command } => match command {
            DeployCommands::All => commands::deploy_all(session, out),
            DeployCommands::FlashLoan { admin, fee, denom } => {
                let options = DeployOptions {
                    admin: admin.clone(),
                    fee: fee.clone(),
                    denom: denom.clone(),
                };
                commands::deploy_flash_loan(session, out, &options)
            }
        },
        Commands::Contract { command } => match command {
            ContractCommands::Info { contract } => commands::contract_info(session, out, *contract),
            ContractCommands::QueryConfig => commands::query_config(session, out),
            ContractCommands::QueryBalance => commands::query_balance(session, out),
            ContractCommands::QueryProvided { address } => {
                commands::query_provided(session, out, address)
            }
            ContractCommands::Provide { amount } => commands::provide(session, out, *amount),
            ContractCommands::Withdraw => commands::withdraw(session, out),
            ContractCommands::Loan { receiver, amount } => {
                commands::loan(session, out, receiver, *amount)
            }
        },
        Commands::Config => commands::show_config(session, out),
        Commands::Networks => commands::list_networks(session, out),
    }
}

/// Load the configuration, then execute the command against the process environment
pub fn execute_command(cli: &Cli) -> Result<(), String> {
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    debug!("Using configuration file {}", config_path.display());

    let session = Session::load(&config_path, cli.network, Box::new(ProcessEnv))
        .map_err(|e| format!("Failed to load configuration: {}", e))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&cli.command, &session, &mut out).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| format!("Failed to write output: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_network_defaults_to_testnet() {
        let cli = Cli::try_parse_from(["flash-loan", "networks"]).unwrap();
        assert_eq!(cli.network, Network::Testnet);
        assert!(matches!(cli.command, Commands::Networks));
    }

    #[test]
    fn test_network_choices() {
        let cli = Cli::try_parse_from(["flash-loan", "-n", "mainnet", "config"]).unwrap();
        assert_eq!(cli.network, Network::Mainnet);
        let cli = Cli::try_parse_from(["flash-loan", "config", "--network", "devnet"]).unwrap();
        assert_eq!(cli.network, Network::Devnet);
        assert!(Cli::try_parse_from(["flash-loan", "-n", "localnet", "config"]).is_err());
    }

    #[test]
    fn test_amount_must_be_integer() {
        assert!(Cli::try_parse_from(["flash-loan", "contract", "provide", "1000"]).is_ok());
        assert!(Cli::try_parse_from(["flash-loan", "contract", "provide", "10.5"]).is_err());
        assert!(Cli::try_parse_from(["flash-loan", "contract", "provide", "-5"]).is_err());
        assert!(Cli::try_parse_from(["flash-loan", "contract", "loan", "r", "abc"]).is_err());
    }

    #[test]
    fn test_contract_choices() {
        let cli = Cli::try_parse_from(["flash-loan", "contract", "info", "ibc-receiver"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Contract {
                command: ContractCommands::Info {
                    contract: ContractKind::IbcReceiver
                }
            }
        ));
        assert!(Cli::try_parse_from(["flash-loan", "contract", "info", "vault"]).is_err());
    }

    #[test]
    fn test_deploy_flash_loan_options() {
        let cli = Cli::try_parse_from(["flash-loan", "deploy", "flash-loan"]).unwrap();
        match cli.command {
            Commands::Deploy {
                command: DeployCommands::FlashLoan { admin, fee, denom },
            } => {
                assert_eq!(admin, None);
                assert_eq!(fee, "0.003");
                assert_eq!(denom, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from([
            "flash-loan", "deploy", "flash-loan", "--fee", "0.3%", "--admin", " core1admin ",
        ])
        .unwrap();
        match cli.command {
            Commands::Deploy {
                command: DeployCommands::FlashLoan { admin, fee, .. },
            } => {
                assert_eq!(fee, "0.3%");
                assert_eq!(admin.as_deref(), Some(" core1admin "));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
