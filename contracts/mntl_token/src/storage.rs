use soroban_sdk::{symbol_short, Address, Env};
use crate::types::{Stage, SupplyPolicy, TokenError, TokenMetadata};

// ============================================================================
// CONSTANTES
// ============================================================================

/// Decimais do MNTL (10^18 unidades mínimas por token)
pub const DECIMALS: u32 = 18;

/// 1 MNTL em unidades mínimas
pub const ONE_TOKEN: i128 = 1_000_000_000_000_000_000;

/// Supply inicial da configuração de referência: 18 milhões MNTL
pub const INITIAL_SUPPLY: i128 = 18_000_000 * ONE_TOKEN;

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (controller, stage, supply, metadata)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

/// Faz bump do TTL de balance de um endereço
pub fn bump_balance(env: &Env, addr: &Address) {
    let key = (symbol_short!("balance"), addr);
    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            CRITICAL_STORAGE_THRESHOLD,
            CRITICAL_STORAGE_TTL,
        );
    }
}

// ============================================================================
// PAUSED
// ============================================================================

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("paused"))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&symbol_short!("paused"), &paused);
}

// ============================================================================
// SUPPLY
// ============================================================================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}

/// Unidades ainda não emitidas (só faz sentido em `SupplyPolicy::Fixed`)
pub fn get_available_tokens(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("available"))
        .unwrap_or(0)
}

pub fn set_available_tokens(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("available"), &amount);
}

pub fn get_supply_policy(env: &Env) -> SupplyPolicy {
    env.storage()
        .instance()
        .get(&symbol_short!("policy"))
        .unwrap_or(SupplyPolicy::Pooled)
}

pub fn set_supply_policy(env: &Env, policy: &SupplyPolicy) {
    env.storage().instance().set(&symbol_short!("policy"), policy);
}

// ============================================================================
// BALANCE / ALLOWANCE
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
}

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = (symbol_short!("allow"), from, spender);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = (symbol_short!("allow"), from, spender);
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// CONTROLLER / STAGE
// ============================================================================

pub fn get_controller(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("ctrl"))
}

pub fn set_controller(env: &Env, controller: &Address) {
    env.storage().instance().set(&symbol_short!("ctrl"), controller);
}

pub fn clear_controller(env: &Env) {
    env.storage().instance().remove(&symbol_short!("ctrl"));
}

pub fn get_stage(env: &Env) -> Stage {
    env.storage()
        .instance()
        .get(&symbol_short!("stage"))
        .unwrap_or(Stage::None)
}

pub fn set_stage(env: &Env, stage: Stage) {
    env.storage().instance().set(&symbol_short!("stage"), &stage);
}

// ============================================================================
// METADATA
// ============================================================================

pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&symbol_short!("metadata"))
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&symbol_short!("metadata"), metadata);
}

// ============================================================================
// REENTRANCY GUARD
// ============================================================================

pub fn is_reentrancy_locked(env: &Env) -> bool {
    env.storage()
        .temporary()
        .get(&symbol_short!("reentry"))
        .unwrap_or(false)
}

pub fn set_reentrancy_guard(env: &Env, locked: bool) {
    if locked {
        env.storage().temporary().set(&symbol_short!("reentry"), &true);
    } else {
        env.storage().temporary().remove(&symbol_short!("reentry"));
    }
}

/// Executa `op` com o guard de reentrância travado.
/// O guard é liberado mesmo quando `op` retorna `Err`.
pub fn guarded<T>(
    env: &Env,
    op: impl FnOnce() -> Result<T, TokenError>,
) -> Result<T, TokenError> {
    if is_reentrancy_locked(env) {
        return Err(TokenError::Reentrant);
    }
    set_reentrancy_guard(env, true);

    let result = op();

    set_reentrancy_guard(env, false);
    result
}
