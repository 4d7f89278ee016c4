use soroban_sdk::{contracttype, BytesN, Env, String};

/// Registered source information for a single contract address.
///
/// A contract counts as registered when `source` is non-empty. Disabling
/// only clears `enabled`; the hash and locations stay queryable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractInfo {
    pub hash: BytesN<32>,
    pub source: String,
    pub metadata: String,
    pub enabled: bool,
}

impl ContractInfo {
    /// Zero value returned for addresses that were never registered.
    pub fn empty(env: &Env) -> Self {
        ContractInfo {
            hash: BytesN::from_array(env, &[0u8; 32]),
            source: String::from_str(env, ""),
            metadata: String::from_str(env, ""),
            enabled: false,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.source.len() != 0
    }
}

/// Base URL pair used to resolve stored source and metadata locations.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerEntry {
    pub source_base: String,
    pub metadata_base: String,
}
