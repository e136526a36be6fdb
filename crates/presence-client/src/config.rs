//! Network configuration.
//!
//! Four values pick the network: its name, the wallet passphrase, and the
//! RPC and horizon endpoints. They arrive as `PUBLIC_STELLAR_*` variables or
//! as a JSON document of the same shape. Anything missing or unknown makes
//! the whole configuration fall back to testnet; startup never fails on it.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

pub const ENV_NETWORK: &str = "PUBLIC_STELLAR_NETWORK";
pub const ENV_PASSPHRASE: &str = "PUBLIC_STELLAR_NETWORK_PASSPHRASE";
pub const ENV_RPC_URL: &str = "PUBLIC_STELLAR_RPC_URL";
pub const ENV_HORIZON_URL: &str = "PUBLIC_STELLAR_HORIZON_URL";

pub const PASSPHRASE_PUBLIC: &str = "Public Global Stellar Network ; September 2015";
pub const PASSPHRASE_TESTNET: &str = "Test SDF Network ; September 2015";
pub const PASSPHRASE_FUTURENET: &str = "Test SDF Future Network ; October 2022";
pub const PASSPHRASE_SANDBOX: &str = "Local Sandbox Stellar Network ; September 2022";
pub const PASSPHRASE_STANDALONE: &str = "Standalone Network ; February 2017";

/// Passphrases a wallet can sign for.
pub const KNOWN_PASSPHRASES: [&str; 5] = [
    PASSPHRASE_PUBLIC,
    PASSPHRASE_TESTNET,
    PASSPHRASE_FUTURENET,
    PASSPHRASE_SANDBOX,
    PASSPHRASE_STANDALONE,
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Public,
    Futurenet,
    Testnet,
    #[serde(alias = "STANDALONE")]
    Local,
}

impl Network {
    /// Identifier used by explorer links, `custom` for local networks.
    pub const fn id(self) -> &'static str {
        match self {
            Network::Public => "mainnet",
            Network::Futurenet => "futurenet",
            Network::Testnet => "testnet",
            Network::Local => "custom",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Network::Public => "public",
            Network::Futurenet => "futurenet",
            Network::Testnet => "testnet",
            Network::Local => "local",
        }
    }

    /// Horizon server used for account lookups.
    pub const fn horizon_host(self) -> &'static str {
        match self {
            Network::Public => "https://horizon.stellar.org",
            Network::Futurenet => "https://horizon-futurenet.stellar.org",
            Network::Testnet => "https://horizon-testnet.stellar.org",
            Network::Local => "http://localhost:8000",
        }
    }

    /// Events contract used when the role contract does not name one.
    /// Empty when the network has no default.
    pub const fn default_event_contract(self) -> &'static str {
        match self {
            Network::Local => "CA726ZF4OW3SP2JPKX26I6K6CPLEWX2N3YATK2JC7JUIQVY7GG6NQB2U",
            Network::Testnet => "CCKLYKBIIMGQFUEXJMISGKDHIFXAP45LBRMZ6CGNLZMWFYPFZBD4N5C7",
            Network::Futurenet | Network::Public => "",
        }
    }
}

impl FromStr for Network {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PUBLIC" => Ok(Network::Public),
            "FUTURENET" => Ok(Network::Futurenet),
            "TESTNET" => Ok(Network::Testnet),
            "LOCAL" | "STANDALONE" => Ok(Network::Local),
            other => Err(ClientError::validation("network", format!("unknown network {other:?}"))),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(rename = "PUBLIC_STELLAR_NETWORK")]
    pub network: Network,
    #[serde(rename = "PUBLIC_STELLAR_NETWORK_PASSPHRASE")]
    pub passphrase: String,
    #[serde(rename = "PUBLIC_STELLAR_RPC_URL")]
    pub rpc_url: String,
    #[serde(rename = "PUBLIC_STELLAR_HORIZON_URL")]
    pub horizon_url: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::testnet()
    }
}

impl NetworkConfig {
    pub fn testnet() -> Self {
        NetworkConfig {
            network: Network::Testnet,
            passphrase: PASSPHRASE_TESTNET.into(),
            rpc_url: "https://soroban-testnet.stellar.org".into(),
            horizon_url: "https://horizon-testnet.stellar.org".into(),
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if !KNOWN_PASSPHRASES.contains(&self.passphrase.as_str()) {
            return Err(ClientError::validation("passphrase", "not a known network passphrase"));
        }
        Ok(())
    }

    /// Strict parse of `PUBLIC_STELLAR_*` pairs. Other keys are ignored.
    pub fn try_from_vars<I, K, V>(vars: I) -> Result<Self, ClientError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let mut take = |key: &'static str| {
            vars.remove(key)
                .ok_or_else(|| ClientError::validation(key, "missing"))
        };

        let config = NetworkConfig {
            network: take(ENV_NETWORK)?.parse()?,
            passphrase: take(ENV_PASSPHRASE)?,
            rpc_url: take(ENV_RPC_URL)?,
            horizon_url: take(ENV_HORIZON_URL)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Lenient parse: any problem yields the testnet configuration.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::try_from_vars(vars).unwrap_or_default()
    }

    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn try_from_json(document: &str) -> Result<Self, ClientError> {
        let config: NetworkConfig = serde_json::from_str(document)
            .map_err(|err| ClientError::validation("network config", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Lenient JSON load, falling back to testnet like [`from_vars`](Self::from_vars).
    pub fn from_json(document: &str) -> Self {
        Self::try_from_json(document).unwrap_or_default()
    }

    pub fn default_event_contract(&self) -> &'static str {
        self.network.default_event_contract()
    }
}
