use soroban_sdk::{Address, Env};
use crate::storage;
use crate::types::{Stage, TokenError};

// ============================================================================
// VALIDAÇÕES (CHECKS do padrão CEI)
// ============================================================================

/// Valida que o caller assinou e pertence ao registro de administradores
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();
    if !access_registry::is_member(env, caller) {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// Valida que existe um controller e que ele autorizou a chamada.
/// Retorna o controller para quem precisar dele (ex: eventos).
pub fn require_controller(env: &Env) -> Result<Address, TokenError> {
    let controller = storage::get_controller(env).ok_or(TokenError::Unauthorized)?;
    controller.require_auth();
    Ok(controller)
}

/// Valida se o contrato não está pausado
pub fn require_not_paused(env: &Env) -> Result<(), TokenError> {
    if storage::is_paused(env) {
        return Err(TokenError::Paused);
    }
    Ok(())
}

/// Valida se o contrato está pausado (para `unpause`)
pub fn require_paused(env: &Env) -> Result<(), TokenError> {
    if !storage::is_paused(env) {
        return Err(TokenError::NotPaused);
    }
    Ok(())
}

/// Transferências só são liberadas depois que a venda devolve o controle
pub fn require_transfers_unlocked(env: &Env) -> Result<(), TokenError> {
    if storage::get_controller(env).is_some() {
        return Err(TokenError::TransferLocked);
    }
    Ok(())
}

/// Valida se o amount é válido (> 0)
pub fn require_positive_amount(amount: i128) -> Result<(), TokenError> {
    if amount <= 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// Valida se o balance é suficiente
pub fn require_sufficient_balance(env: &Env, addr: &Address, required: i128) -> Result<(), TokenError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(TokenError::InsufficientBalance);
    }
    Ok(())
}

/// Valida se o allowance é suficiente
pub fn require_sufficient_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    required: i128,
) -> Result<(), TokenError> {
    let allowance = storage::get_allowance(env, from, spender);
    if allowance < required {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(())
}

/// Valida a transição de estágio: só para frente
pub fn require_stage_advance(env: &Env, target: Stage) -> Result<Stage, TokenError> {
    let current = storage::get_stage(env);
    if !current.can_advance_to(target) {
        return Err(TokenError::InvalidStageTransition);
    }
    Ok(current)
}
