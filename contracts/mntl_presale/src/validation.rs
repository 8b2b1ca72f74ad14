use soroban_sdk::{Address, Env};
use crate::clock::Clock;
use crate::storage;
use crate::types::{SaleConfig, SaleError, SaleState};

// ============================================================================
// VALIDAÇÕES (CHECKS do padrão CEI)
// ============================================================================

/// Valida que o caller assinou e pertence ao registro de administradores
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    if !access_registry::is_member(env, caller) {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}

/// Valida o estado atual da venda
pub fn require_state(env: &Env, expected: SaleState) -> Result<(), SaleError> {
    if storage::get_state(env) != expected {
        return Err(SaleError::AlreadyTerminal);
    }
    Ok(())
}

pub fn require_not_paused(env: &Env) -> Result<(), SaleError> {
    if storage::is_paused(env) {
        return Err(SaleError::Paused);
    }
    Ok(())
}

pub fn require_paused(env: &Env) -> Result<(), SaleError> {
    if !storage::is_paused(env) {
        return Err(SaleError::NotPaused);
    }
    Ok(())
}

pub fn require_positive_amount(amount: i128) -> Result<(), SaleError> {
    if amount <= 0 {
        return Err(SaleError::InvalidAmount);
    }
    Ok(())
}

/// `start_at <= now <= close_at`
pub fn require_within_window(config: &SaleConfig, clock: &impl Clock) -> Result<(), SaleError> {
    if !config.is_open_at(clock.now()) {
        return Err(SaleError::OutsideWindow);
    }
    Ok(())
}

/// `now > close_at`
pub fn require_after_close(config: &SaleConfig, clock: &impl Clock) -> Result<(), SaleError> {
    if clock.now() <= config.close_at {
        return Err(SaleError::WindowOpen);
    }
    Ok(())
}

/// Soft cap medido em MNTL emitido (mesma unidade do hard cap)
pub fn require_soft_cap_reached(env: &Env, config: &SaleConfig) -> Result<(), SaleError> {
    if storage::get_we_solved(env) < config.soft_cap {
        return Err(SaleError::SoftCapNotReached);
    }
    Ok(())
}

/// `close_at` só anda para frente
pub fn require_extends_close(config: &SaleConfig, new_close_at: u64) -> Result<(), SaleError> {
    if new_close_at <= config.close_at {
        return Err(SaleError::InvalidCloseAt);
    }
    Ok(())
}

/// Parâmetros do construtor
pub fn require_valid_config(
    start_at: u64,
    close_at: u64,
    soft_cap: i128,
    hard_cap: i128,
) -> Result<(), SaleError> {
    if start_at >= close_at {
        return Err(SaleError::InvalidConfig);
    }
    if soft_cap <= 0 || soft_cap > hard_cap {
        return Err(SaleError::InvalidConfig);
    }
    Ok(())
}
