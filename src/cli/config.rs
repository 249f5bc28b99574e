use clap::ValueEnum;
use log::debug;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::constants::CONFIG_FILE_NAME;
use crate::cli::contracts::{resolve_contract_address, AddressLookup};
use crate::errors::{ConfigError, FlashLoanError, FlashLoanResult, IOError};

/// Coreum networks the CLI can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    /// Key of this network under `networks` in the configuration document
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings for one deployment target
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkProfile {
    /// Network name, taken from the document key
    #[serde(skip)]
    pub name: String,

    /// Chain identifier used for signing and routing
    pub chain_id: String,

    /// Tendermint RPC endpoint
    pub rpc_endpoint: String,

    /// REST (LCD) endpoint
    pub rest_endpoint: String,

    /// Native token denomination
    pub denom: String,

    /// Bech32 account address prefix
    pub prefix: String,
}

/// The network configuration document
#[derive(Debug, Clone, Deserialize)]
pub struct NetworksConfig {
    /// Profiles in document order
    #[serde(deserialize_with = "deserialize_networks")]
    pub networks: Vec<NetworkProfile>,
}

fn deserialize_networks<'de, D>(deserializer: D) -> Result<Vec<NetworkProfile>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NetworksVisitor;

    impl<'de> Visitor<'de> for NetworksVisitor {
        type Value = Vec<NetworkProfile>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of network name to network profile")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut networks: Vec<NetworkProfile> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, mut profile)) = map.next_entry::<String, NetworkProfile>()? {
                if networks.iter().any(|existing| existing.name == name) {
                    return Err(de::Error::custom(format!("duplicate network '{}'", name)));
                }
                profile.name = name;
                networks.push(profile);
            }
            Ok(networks)
        }
    }

    deserializer.deserialize_map(NetworksVisitor)
}

/// Path of the configuration document shipped alongside the CLI
pub fn default_config_path() -> PathBuf {
    config_path_near(std::env::current_exe().ok().as_deref())
}

/// First `coreum-config.json` found in the executable's directory or one of
/// its parents (so `target/release/flash-loan` finds the copy at the checkout
/// root); falls back to the crate root the binary was built from.
pub fn config_path_near(exe: Option<&Path>) -> PathBuf {
    exe.into_iter()
        .flat_map(|exe| exe.ancestors().skip(1))
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE_NAME))
}

impl NetworksConfig {
    /// Load the configuration document from a file
    pub fn load<P: AsRef<Path>>(path: P) -> FlashLoanResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(IOError::FileSystem(format!(
                "Configuration file not found: {}",
                path.display()
            ))
            .into());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            IOError::FileSystem(format!("Failed to read configuration file: {}", e))
        })?;

        Self::from_json(&content)
    }

    /// Parse the configuration document from JSON text
    pub fn from_json(content: &str) -> FlashLoanResult<Self> {
        let config: NetworksConfig = serde_json::from_str(content).map_err(|e| {
            IOError::Deserialization(format!("Failed to parse configuration file: {}", e))
        })?;

        Ok(config)
    }

    /// Get the profile of a network by name
    pub fn profile(&self, name: &str) -> FlashLoanResult<&NetworkProfile> {
        self.networks
            .iter()
            .find(|profile| profile.name == name)
            .ok_or_else(|| FlashLoanError::from(ConfigError::NetworkNotFound(name.to_string())))
    }
}

/// Settings resolved for one invocation: the selected network plus the address source
pub struct Session {
    pub network: Network,
    pub profile: NetworkProfile,
    pub document: NetworksConfig,
    lookup: Box<dyn AddressLookup>,
}

impl Session {
    /// Load the configuration document and select a network from it
    pub fn load<P: AsRef<Path>>(
        path: P,
        network: Network,
        lookup: Box<dyn AddressLookup>,
    ) -> FlashLoanResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let document = NetworksConfig::load(path)?;
        Self::from_document(document, network, lookup)
    }

    pub fn from_document(
        document: NetworksConfig,
        network: Network,
        lookup: Box<dyn AddressLookup>,
    ) -> FlashLoanResult<Self> {
        let profile = document.profile(network.as_str())?.clone();
        debug!("Selected network {} ({})", network, profile.chain_id);

        Ok(Session {
            network,
            profile,
            document,
            lookup,
        })
    }

    /// Address of a deployed contract, or `None` when it is not deployed
    pub fn contract_address(&self, contract_name: &str) -> Option<String> {
        resolve_contract_address(self.lookup.as_ref(), contract_name)
    }
}
