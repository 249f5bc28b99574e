// Command handlers for the flash loan CLI
//
// Every handler only describes what an operator should run: it reads the
// session and writes text, and never talks to a node.
use log::debug;
use std::io::Write;

use crate::cli::config::Session;
use crate::cli::constants::{CHAIN_CLIENT, DEPLOY_SCRIPT, NOT_DEPLOYED};
use crate::cli::contracts::{contract_address_var, ContractKind};
use crate::cli::messages::{to_compact_json, to_pretty_json, ExecuteMsg, QueryMsg};
use crate::cli::output::{check_mark, headline, hint, warning, Style, Table};
use crate::cli::validation::{warn_on_foreign_address, warn_on_unusual_fee};
use crate::errors::FlashLoanResult;

/// Options for `deploy flash-loan`
#[derive(Debug, Clone, PartialEq)]
pub struct DeployOptions {
    pub admin: Option<String>,
    pub fee: String,
    pub denom: Option<String>,
}

/// Flash loan contract address, or print the not-deployed warning and return `None`
fn require_flash_loan<W: Write>(
    session: &Session,
    out: &mut W,
    message: &str,
) -> FlashLoanResult<Option<String>> {
    let kind = ContractKind::FlashLoan;
    match session.contract_address(kind.key()) {
        Some(address) => {
            warn_on_foreign_address("Flash loan contract", &address, &session.profile.prefix);
            Ok(Some(address))
        }
        None => {
            debug!("{} is not set", contract_address_var(kind.key()));
            warning(out, message)?;
            Ok(None)
        }
    }
}

const NOT_DEPLOYED_WARNING: &str = "Flash loan contract not deployed";

fn execute_invocation(contract: &str, msg: &ExecuteMsg) -> FlashLoanResult<String> {
    Ok(format!(
        "Use: {} tx wasm execute {} '{}'",
        CHAIN_CLIENT,
        contract,
        to_compact_json(msg)?
    ))
}

/// `deploy all`
pub fn deploy_all<W: Write>(_session: &Session, out: &mut W) -> FlashLoanResult<()> {
    headline(out, "Deploying all contracts...")?;
    writeln!(out, "This will deploy:")?;
    for (i, kind) in ContractKind::ALL.iter().enumerate() {
        let name = match kind {
            ContractKind::FlashLoan => "Flash Loan Contract",
            ContractKind::SimpleReceiver => "Simple Loan Receiver",
            ContractKind::IbcReceiver => "IBC Loan Receiver",
        };
        writeln!(out, "  {}. {}", i + 1, name)?;
    }
    writeln!(out, "\nPlease use the deployment script: {}", DEPLOY_SCRIPT)?;
    Ok(())
}

/// `deploy flash-loan`
pub fn deploy_flash_loan<W: Write>(
    session: &Session,
    out: &mut W,
    options: &DeployOptions,
) -> FlashLoanResult<()> {
    let profile = &session.profile;
    // Empty values print like absent ones
    let admin = options.admin.as_deref().filter(|admin| !admin.is_empty());
    let denom = options
        .denom
        .as_deref()
        .filter(|denom| !denom.is_empty())
        .unwrap_or(&profile.denom);
    if let Some(admin) = admin {
        warn_on_foreign_address("Admin", admin, &profile.prefix);
    }
    warn_on_unusual_fee(&options.fee);

    headline(
        out,
        &format!("Deploying Flash Loan Contract to {}", session.network),
    )?;
    writeln!(out, "Chain ID: {}", profile.chain_id)?;
    writeln!(out, "Admin: {}", admin.unwrap_or("None"))?;
    writeln!(out, "Fee: {}", options.fee)?;
    writeln!(out, "Denom: {}", denom)?;
    hint(
        out,
        &format!(
            "Use the deployment script for actual deployment: {}",
            DEPLOY_SCRIPT
        ),
    )?;
    Ok(())
}

/// `contract info <contract>`
pub fn contract_info<W: Write>(
    session: &Session,
    out: &mut W,
    contract: ContractKind,
) -> FlashLoanResult<()> {
    let address = session.contract_address(contract.key());
    if let Some(address) = &address {
        warn_on_foreign_address(contract.display_name(), address, &session.profile.prefix);
    }

    let mut table = Table::new(format!(
        "{} Contract Info",
        contract.cli_name().to_uppercase()
    ));
    table
        .add_column("Property", Style::Cyan)
        .add_column("Value", Style::Green)
        .add_row(["Network", session.network.as_str()])
        .add_row(["Chain ID", session.profile.chain_id.as_str()])
        .add_row([
            "Contract Address",
            address.as_deref().unwrap_or(NOT_DEPLOYED),
        ])
        .add_row(["RPC Endpoint", session.profile.rpc_endpoint.as_str()]);
    table.print(out)
}

/// `contract query-config`
pub fn query_config<W: Write>(session: &Session, out: &mut W) -> FlashLoanResult<()> {
    let message = format!(
        "{}. Set {}",
        NOT_DEPLOYED_WARNING,
        contract_address_var(ContractKind::FlashLoan.key())
    );
    let Some(address) = require_flash_loan(session, out, &message)? else {
        return Ok(());
    };

    writeln!(out, "Querying config for contract: {}", address)?;
    hint(out, &format!("Query: {}", to_compact_json(&QueryMsg::GetConfig {})?))?;
    writeln!(
        out,
        "\nUse {} or a chain SDK to execute the actual query.",
        CHAIN_CLIENT
    )?;
    Ok(())
}

/// `contract query-balance`
pub fn query_balance<W: Write>(session: &Session, out: &mut W) -> FlashLoanResult<()> {
    let Some(address) = require_flash_loan(session, out, NOT_DEPLOYED_WARNING)? else {
        return Ok(());
    };

    writeln!(out, "Querying balance for contract: {}", address)?;
    hint(out, &format!("Query: {}", to_compact_json(&QueryMsg::Balance {})?))?;
    Ok(())
}

/// `contract query-provided <address>`
pub fn query_provided<W: Write>(
    session: &Session,
    out: &mut W,
    provider: &str,
) -> FlashLoanResult<()> {
    if require_flash_loan(session, out, NOT_DEPLOYED_WARNING)?.is_none() {
        return Ok(());
    }

    writeln!(out, "Querying provided amount for: {}", provider)?;
    let query = QueryMsg::Provided {
        address: provider.to_string(),
    };
    hint(out, &format!("Query: {}", to_pretty_json(&query)?))?;
    Ok(())
}

/// `contract provide <amount>`
pub fn provide<W: Write>(session: &Session, out: &mut W, amount: u128) -> FlashLoanResult<()> {
    let Some(address) = require_flash_loan(session, out, NOT_DEPLOYED_WARNING)? else {
        return Ok(());
    };
    let funds = format!("{}{}", amount, session.profile.denom);

    headline(out, &format!("Providing {} to flash loan contract", funds))?;

    let msg = ExecuteMsg::Provide {};
    writeln!(out, "\nExecute Message: {}", to_pretty_json(&msg)?)?;
    writeln!(out, "Funds: {}", funds)?;
    hint(
        out,
        &format!("{} --amount {}", execute_invocation(&address, &msg)?, funds),
    )?;
    Ok(())
}

/// `contract withdraw`
pub fn withdraw<W: Write>(session: &Session, out: &mut W) -> FlashLoanResult<()> {
    let Some(address) = require_flash_loan(session, out, NOT_DEPLOYED_WARNING)? else {
        return Ok(());
    };

    headline(out, "Withdrawing from flash loan contract")?;

    let msg = ExecuteMsg::Withdraw {};
    writeln!(out, "\nExecute Message: {}", to_pretty_json(&msg)?)?;
    hint(out, &execute_invocation(&address, &msg)?)?;
    Ok(())
}

/// `contract loan <receiver> <amount>`
pub fn loan<W: Write>(
    session: &Session,
    out: &mut W,
    receiver: &str,
    amount: u128,
) -> FlashLoanResult<()> {
    let Some(address) = require_flash_loan(session, out, NOT_DEPLOYED_WARNING)? else {
        return Ok(());
    };
    warn_on_foreign_address("Receiver", receiver, &session.profile.prefix);

    headline(
        out,
        &format!("Requesting loan of {}{}", amount, session.profile.denom),
    )?;
    writeln!(out, "Receiver: {}", receiver)?;

    let msg = ExecuteMsg::loan(receiver, amount);
    writeln!(out, "\nExecute Message: {}", to_pretty_json(&msg)?)?;
    hint(out, &execute_invocation(&address, &msg)?)?;
    Ok(())
}

/// `config`
pub fn show_config<W: Write>(session: &Session, out: &mut W) -> FlashLoanResult<()> {
    let profile = &session.profile;

    let mut table = Table::new("Coreum Flash Loan Configuration");
    table
        .add_column("Setting", Style::Cyan)
        .add_column("Value", Style::Green)
        .add_row(["Network", session.network.as_str()])
        .add_row(["Chain ID", profile.chain_id.as_str()])
        .add_row(["RPC Endpoint", profile.rpc_endpoint.as_str()])
        .add_row(["REST Endpoint", profile.rest_endpoint.as_str()])
        .add_row(["Native Denom", profile.denom.as_str()])
        .add_row(["Address Prefix", profile.prefix.as_str()]);
    table.print(out)?;

    writeln!(out, "\nContract Addresses:")?;
    for kind in ContractKind::ALL {
        let address = session.contract_address(kind.key());
        writeln!(
            out,
            "  {} {}: {}",
            check_mark(address.is_some()),
            kind.display_name(),
            address.as_deref().unwrap_or(NOT_DEPLOYED)
        )?;
    }
    Ok(())
}

/// `networks`
pub fn list_networks<W: Write>(session: &Session, out: &mut W) -> FlashLoanResult<()> {
    let mut table = Table::new("Available Coreum Networks");
    table
        .add_column("Network", Style::Cyan)
        .add_column("Chain ID", Style::Green)
        .add_column("RPC Endpoint", Style::Yellow);

    for profile in &session.document.networks {
        table.add_row([
            profile.name.as_str(),
            profile.chain_id.as_str(),
            profile.rpc_endpoint.as_str(),
        ]);
    }
    table.print(out)
}
