use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const NEW_CONTRACT: Symbol = symbol_short!("new_ctr");
pub const CONTRACT_UPDATED: Symbol = symbol_short!("ctr_upd");
pub const CONTRACT_DISABLED: Symbol = symbol_short!("ctr_dis");

// Topics are (event, contract address); data is the acting admin.

pub fn emit_new_contract(env: &Env, contract: &Address, caller: &Address) {
    env.events()
        .publish((NEW_CONTRACT, contract.clone()), caller.clone());
}

pub fn emit_contract_updated(env: &Env, contract: &Address, caller: &Address) {
    env.events()
        .publish((CONTRACT_UPDATED, contract.clone()), caller.clone());
}

pub fn emit_contract_disabled(env: &Env, contract: &Address, caller: &Address) {
    env.events()
        .publish((CONTRACT_DISABLED, contract.clone()), caller.clone());
}
