#![no_std]

//! On-chain source registry.
//!
//! Records, per contract address, a hash of its source code plus the
//! locations of its full source and metadata. A set of admin addresses
//! controls every mutation; reads are open to anyone. Each successful
//! register mutation publishes an event carrying the acting admin.
//!
//! Server entries are stored in a swap-and-pop list: deleting an entry moves
//! the last entry into its slot, so positions are not stable across deletes.

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Vec};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::ContractError;
pub use types::{ContractInfo, ServerEntry};

#[contract]
pub struct SourceRegistry;

#[contractimpl]
impl SourceRegistry {
    /// Initialize the registry.
    ///
    /// `deployer` and every address in `admins` become admins, and the
    /// default server entry is seeded.
    pub fn initialize(
        env: Env,
        deployer: Address,
        admins: Vec<Address>,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        deployer.require_auth();

        storage::set_admin(&env, &deployer, true);
        for admin in admins.iter() {
            storage::set_admin(&env, &admin, true);
        }

        let mut servers = Vec::new(&env);
        servers.push_back(ServerEntry {
            source_base: String::from_str(&env, storage::DEFAULT_SOURCE_BASE),
            metadata_base: String::from_str(&env, storage::DEFAULT_METADATA_BASE),
        });
        storage::set_servers(&env, &servers);

        storage::set_initialized(&env);
        storage::bump_instance(&env);

        log!(&env, "registry initialized", deployer);
        Ok(())
    }

    /// Interface version of the registry.
    pub fn version(_env: Env) -> u32 {
        1
    }

    // ========================================================================
    // Admin Management
    // ========================================================================

    /// Grant admin status. Granting to an existing admin is a no-op.
    pub fn admin_add(env: Env, caller: Address, account: Address) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        storage::set_admin(&env, &account, true);

        log!(&env, "admin added", account);
        Ok(())
    }

    /// Revoke admin status. An admin cannot revoke itself.
    pub fn admin_delete(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        if account == caller {
            return Err(ContractError::SelfRemovalForbidden);
        }

        storage::set_admin(&env, &account, false);

        log!(&env, "admin removed", account);
        Ok(())
    }

    pub fn admin_is_valid(env: Env, account: Address) -> bool {
        storage::is_admin(&env, &account)
    }

    // ========================================================================
    // Server Management
    // ========================================================================

    /// Append a server entry. Source bases must be unique.
    pub fn server_add(
        env: Env,
        caller: Address,
        source_base: String,
        metadata_base: String,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        let mut servers = storage::get_servers(&env);
        if Self::server_index(&env, &servers, &source_base).is_some() {
            return Err(ContractError::DuplicateServer);
        }

        servers.push_back(ServerEntry {
            source_base,
            metadata_base,
        });
        storage::set_servers(&env, &servers);

        log!(&env, "server added", servers.len());
        Ok(())
    }

    /// Remove the server entry with `source_base`.
    ///
    /// The last entry is moved into the freed slot, so callers must not rely
    /// on entry positions after a delete.
    pub fn server_delete(
        env: Env,
        caller: Address,
        source_base: String,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        let mut servers = storage::get_servers(&env);
        let index = Self::server_index(&env, &servers, &source_base)
            .ok_or(ContractError::ServerNotFound)?;

        let last = servers.len() - 1;
        if index != last {
            if let Some(tail) = servers.get(last) {
                servers.set(index, tail);
            }
        }
        servers.pop_back();
        storage::set_servers(&env, &servers);

        log!(&env, "server removed", servers.len());
        Ok(())
    }

    pub fn server_count(env: Env) -> u32 {
        storage::get_servers(&env).len()
    }

    /// Server entry at `index` in current storage order.
    pub fn server_get(env: Env, index: u32) -> Result<ServerEntry, ContractError> {
        storage::get_servers(&env)
            .get(index)
            .ok_or(ContractError::ServerIndexOutOfRange)
    }

    pub fn servers(env: Env) -> Vec<ServerEntry> {
        storage::get_servers(&env)
    }

    // ========================================================================
    // Contract Register
    // ========================================================================

    /// Register a contract. The address must not already be registered.
    pub fn contract_add(
        env: Env,
        caller: Address,
        contract: Address,
        source: String,
        metadata: String,
        hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        if let Some(existing) = storage::get_contract_info(&env, &contract) {
            if existing.is_registered() {
                return Err(ContractError::AlreadyRegistered);
            }
        }
        if source.len() == 0 {
            return Err(ContractError::EmptySource);
        }

        let info = ContractInfo {
            hash,
            source,
            metadata,
            enabled: true,
        };
        storage::set_contract_info(&env, &contract, &info);

        events::emit_new_contract(&env, &contract, &caller);
        Ok(())
    }

    /// Replace the source and/or metadata location of an enabled contract.
    ///
    /// Empty arguments leave the stored value untouched. At least one field
    /// must actually change. The hash is only ever set by `contract_add`.
    pub fn contract_update(
        env: Env,
        caller: Address,
        contract: Address,
        source: String,
        metadata: String,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        let mut info = Self::require_enabled(&env, &contract)?;

        let mut changed = false;
        if source.len() != 0
            && storage::content_hash(&env, &source) != storage::content_hash(&env, &info.source)
        {
            info.source = source;
            changed = true;
        }
        if metadata.len() != 0
            && storage::content_hash(&env, &metadata)
                != storage::content_hash(&env, &info.metadata)
        {
            info.metadata = metadata;
            changed = true;
        }

        if !changed {
            return Err(ContractError::NoEffectiveChange);
        }

        storage::set_contract_info(&env, &contract, &info);

        events::emit_contract_updated(&env, &contract, &caller);
        Ok(())
    }

    /// Disable an enabled contract. There is no way back to enabled.
    pub fn contract_disable(
        env: Env,
        caller: Address,
        contract: Address,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        let mut info = Self::require_enabled(&env, &contract)?;
        info.enabled = false;
        storage::set_contract_info(&env, &contract, &info);

        events::emit_contract_disabled(&env, &contract, &caller);
        Ok(())
    }

    /// Recorded info for `contract`, zero-valued when never registered.
    pub fn contract_register(env: Env, contract: Address) -> ContractInfo {
        storage::get_contract_info(&env, &contract).unwrap_or_else(|| ContractInfo::empty(&env))
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();

        if !storage::is_initialized(env) {
            return Err(ContractError::NotInitialized);
        }
        storage::bump_instance(env);

        if !storage::is_admin(env, caller) {
            log!(env, "rejected non-admin caller", caller.clone());
            return Err(ContractError::NotAuthorized);
        }

        Ok(())
    }

    fn require_enabled(env: &Env, contract: &Address) -> Result<ContractInfo, ContractError> {
        let info = storage::get_contract_info(env, contract)
            .filter(ContractInfo::is_registered)
            .ok_or(ContractError::NotRegistered)?;

        if !info.enabled {
            return Err(ContractError::AlreadyDisabled);
        }

        Ok(info)
    }

    /// Position of the first entry whose source base has the same content.
    fn server_index(env: &Env, servers: &Vec<ServerEntry>, source_base: &String) -> Option<u32> {
        let wanted = storage::content_hash(env, source_base);
        servers
            .iter()
            .position(|entry| storage::content_hash(env, &entry.source_base) == wanted)
            .map(|index| index as u32)
    }
}
