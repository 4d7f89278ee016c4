use soroban_sdk::{symbol_short, xdr::ToXdr, Address, BytesN, Env, String, Symbol, Vec};

use crate::types::{ContractInfo, ServerEntry};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const DEFAULT_SOURCE_BASE: &str = "https://sources.example.org/";
pub const DEFAULT_METADATA_BASE: &str = "https://metadata.example.org/";

const INITIALIZED: Symbol = symbol_short!("init");
const SERVERS: Symbol = symbol_short!("servers");
const ADMIN: Symbol = symbol_short!("admin");
const CONTRACT: Symbol = symbol_short!("contract");

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
}

// ============================================================================
// Admin flags
// ============================================================================

pub fn is_admin(env: &Env, account: &Address) -> bool {
    let key = (ADMIN, account.clone());
    match env.storage().persistent().get::<_, bool>(&key) {
        Some(flag) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            flag
        }
        None => false,
    }
}

/// Admin entries are never removed, only flipped to `false`.
pub fn set_admin(env: &Env, account: &Address, flag: bool) {
    let key = (ADMIN, account.clone());
    env.storage().persistent().set(&key, &flag);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ============================================================================
// Server list
// ============================================================================

pub fn get_servers(env: &Env) -> Vec<ServerEntry> {
    env.storage()
        .instance()
        .get(&SERVERS)
        .unwrap_or(Vec::new(env))
}

pub fn set_servers(env: &Env, servers: &Vec<ServerEntry>) {
    env.storage().instance().set(&SERVERS, servers);
}

// ============================================================================
// Contract register
// ============================================================================

pub fn get_contract_info(env: &Env, contract: &Address) -> Option<ContractInfo> {
    let key = (CONTRACT, contract.clone());
    let info = env.storage().persistent().get::<_, ContractInfo>(&key);
    if info.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    info
}

pub fn set_contract_info(env: &Env, contract: &Address, info: &ContractInfo) {
    let key = (CONTRACT, contract.clone());
    env.storage().persistent().set(&key, info);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ============================================================================
// Content hashing
// ============================================================================

/// SHA-256 over the XDR encoding of `value`; strings are compared by digest.
pub fn content_hash(env: &Env, value: &String) -> BytesN<32> {
    env.crypto().sha256(&value.clone().to_xdr(env)).into()
}
