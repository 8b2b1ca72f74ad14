use soroban_sdk::{symbol_short, Address, Env};
use crate::types::{SaleConfig, SaleError, SaleState};

// ============================================================================
// CONSTANTES
// ============================================================================

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (config, estado, contadores)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

/// Faz bump do TTL da contribuição de um investidor
pub fn bump_contribution(env: &Env, investor: &Address) {
    let key = (symbol_short!("contrib"), investor);
    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            CRITICAL_STORAGE_THRESHOLD,
            CRITICAL_STORAGE_TTL,
        );
    }
}

// ============================================================================
// CONFIG
// ============================================================================

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("config"))
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&symbol_short!("config"))
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&symbol_short!("config"), config);
}

// ============================================================================
// ESTADO / PAUSED
// ============================================================================

pub fn get_state(env: &Env) -> SaleState {
    env.storage()
        .instance()
        .get(&symbol_short!("state"))
        .unwrap_or(SaleState::Active)
}

pub fn set_state(env: &Env, state: SaleState) {
    env.storage().instance().set(&symbol_short!("state"), &state);
}

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
// CONTADORES
// ============================================================================

/// Valor recebido (e mantido) pela venda
pub fn get_we_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("raised"))
        .unwrap_or(0)
}

pub fn set_we_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("raised"), &amount);
}

/// MNTL emitido pelas contribuições (bounty não conta)
pub fn get_we_solved(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("solved"))
        .unwrap_or(0)
}

pub fn set_we_solved(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("solved"), &amount);
}

// ============================================================================
// CONTRIBUIÇÕES
// ============================================================================

pub fn get_contribution(env: &Env, investor: &Address) -> i128 {
    let key = (symbol_short!("contrib"), investor);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_contribution(env: &Env, investor: &Address, amount: i128) {
    let key = (symbol_short!("contrib"), investor);
    env.storage().persistent().set(&key, &amount);
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
    op: impl FnOnce() -> Result<T, SaleError>,
) -> Result<T, SaleError> {
    if is_reentrancy_locked(env) {
        return Err(SaleError::Reentrant);
    }
    set_reentrancy_guard(env, true);

    let result = op();

    set_reentrancy_guard(env, false);
    result
}
