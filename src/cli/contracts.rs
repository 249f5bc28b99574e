// Contract address resolution for the flash loan CLI
use clap::ValueEnum;
use std::collections::HashMap;
use std::env;

use crate::cli::constants::CONTRACT_ADDRESS_SUFFIX;

/// Source of contract address bindings
pub trait AddressLookup {
    /// Value of the named variable, if set
    fn lookup(&self, var: &str) -> Option<String>;
}

/// Reads bindings from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl AddressLookup for ProcessEnv {
    fn lookup(&self, var: &str) -> Option<String> {
        env::var(var).ok()
    }
}

impl AddressLookup for HashMap<String, String> {
    fn lookup(&self, var: &str) -> Option<String> {
        self.get(var).cloned()
    }
}

/// Contracts deployed by the flash loan suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContractKind {
    FlashLoan,
    SimpleReceiver,
    IbcReceiver,
}

impl ContractKind {
    pub const ALL: [ContractKind; 3] = [
        ContractKind::FlashLoan,
        ContractKind::SimpleReceiver,
        ContractKind::IbcReceiver,
    ];

    /// Logical name used to derive the address variable
    pub fn key(&self) -> &'static str {
        match self {
            ContractKind::FlashLoan => "flash_loan",
            ContractKind::SimpleReceiver => "simple_receiver",
            ContractKind::IbcReceiver => "ibc_receiver",
        }
    }

    /// Name as typed on the command line
    pub fn cli_name(&self) -> &'static str {
        match self {
            ContractKind::FlashLoan => "flash-loan",
            ContractKind::SimpleReceiver => "simple-receiver",
            ContractKind::IbcReceiver => "ibc-receiver",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContractKind::FlashLoan => "Flash Loan",
            ContractKind::SimpleReceiver => "Simple Receiver",
            ContractKind::IbcReceiver => "IBC Receiver",
        }
    }
}

/// Environment variable holding the address of the named contract.
///
/// `flash_loan` and `flash-loan` both map to `FLASH_LOAN_CONTRACT_ADDRESS`.
pub fn contract_address_var(contract_name: &str) -> String {
    format!(
        "{}{}",
        contract_name.replace('-', "_").to_uppercase(),
        CONTRACT_ADDRESS_SUFFIX
    )
}

/// Resolve the address of a contract; unset and empty variables both mean "not deployed".
///
/// Any other value is returned exactly as set.
pub fn resolve_contract_address(lookup: &dyn AddressLookup, contract_name: &str) -> Option<String> {
    lookup
        .lookup(&contract_address_var(contract_name))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_address_var() {
        assert_eq!(contract_address_var("flash_loan"), "FLASH_LOAN_CONTRACT_ADDRESS");
        assert_eq!(contract_address_var("simple-receiver"), "SIMPLE_RECEIVER_CONTRACT_ADDRESS");
        assert_eq!(contract_address_var("ibc_receiver"), "IBC_RECEIVER_CONTRACT_ADDRESS");
    }

    #[test]
    fn test_contract_kind_names() {
        for kind in ContractKind::ALL {
            assert_eq!(kind.cli_name().replace('-', "_"), kind.key());
            let parsed = ContractKind::from_str(kind.cli_name(), false).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_resolve_contract_address() {
        let mut vars = HashMap::new();
        vars.insert("FLASH_LOAN_CONTRACT_ADDRESS".to_string(), "core1abc".to_string());
        vars.insert("IBC_RECEIVER_CONTRACT_ADDRESS".to_string(), String::new());

        assert_eq!(resolve_contract_address(&vars, "flash_loan"), Some("core1abc".to_string()));
        assert_eq!(resolve_contract_address(&vars, "simple_receiver"), None);
        // Empty values count as unset
        assert_eq!(resolve_contract_address(&vars, "ibc_receiver"), None);
    }

    #[test]
    fn test_resolve_keeps_value_verbatim() {
        let mut vars = HashMap::new();
        vars.insert("FLASH_LOAN_CONTRACT_ADDRESS".to_string(), " core1abc ".to_string());
        vars.insert("SIMPLE_RECEIVER_CONTRACT_ADDRESS".to_string(), "  ".to_string());

        assert_eq!(resolve_contract_address(&vars, "flash_loan"), Some(" core1abc ".to_string()));
        // Whitespace is a value, not an absence
        assert_eq!(resolve_contract_address(&vars, "simple_receiver"), Some("  ".to_string()));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut vars = HashMap::new();
        vars.insert("FLASH_LOAN_CONTRACT_ADDRESS".to_string(), "core1xyz".to_string());

        let first = resolve_contract_address(&vars, "flash_loan");
        let second = resolve_contract_address(&vars, "flash_loan");
        assert_eq!(first, second);
    }
}
