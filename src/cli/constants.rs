// Constants for CLI commands

/// Name of the network configuration document shipped with the CLI
pub const CONFIG_FILE_NAME: &str = "coreum-config.json";

/// Environment variable that overrides the configuration document path
pub const CONFIG_PATH_ENV_VAR: &str = "FLASH_LOAN_CONFIG";

/// Suffix appended to the uppercased contract name to form its address variable
pub const CONTRACT_ADDRESS_SUFFIX: &str = "_CONTRACT_ADDRESS";

/// Default fee rate for a new flash loan contract
pub const DEFAULT_FEE: &str = "0.003";

/// Deployment script operators run for real deployments
pub const DEPLOY_SCRIPT: &str = "./scripts/deploy.sh";

/// Chain daemon client used in printed example invocations
pub const CHAIN_CLIENT: &str = "cored";

/// Placeholder shown for contracts without a resolved address
pub const NOT_DEPLOYED: &str = "Not deployed";
