use soroban_sdk::{Address, Env, Symbol, symbol_short};
use crate::types::SaleState;

//
// EVENTOS DA PRÉ-VENDA
//

// Contribuição aceita: (valor mantido, MNTL emitido)
pub fn emit_contribution(env: &Env, investor: &Address, cost: i128, tokens: i128) {
    env.events().publish(
        (symbol_short!("buy"), investor),
        (cost, tokens),
    );
}

// StateChanged: código do novo estado
pub fn emit_state_changed(env: &Env, state: SaleState) {
    env.events().publish(
        (symbol_short!("state"),),
        state as u32,
    );
}

// CrowdsaleStatus
pub fn emit_status(env: &Env, status: Symbol) {
    env.events().publish(
        (symbol_short!("status"),),
        status,
    );
}

// RefundSuccess
pub fn emit_refund(env: &Env, investor: &Address, sum: i128) {
    env.events().publish(
        (symbol_short!("refund"), investor),
        sum,
    );
}

// SendBounty
pub fn emit_bounty(env: &Env, beneficiary: &Address, tokens: i128) {
    env.events().publish(
        (symbol_short!("bounty"), beneficiary),
        tokens,
    );
}

// ChangeCloseAt (from, to)
pub fn emit_close_at_changed(env: &Env, from: u64, to: u64) {
    env.events().publish(
        (symbol_short!("close_at"),),
        (from, to),
    );
}

// Saque manual para a carteira
pub fn emit_withdraw(env: &Env, wallet: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdraw"), wallet),
        amount,
    );
}

// Nova carteira de saque
pub fn emit_wallet_changed(env: &Env, wallet: &Address) {
    env.events().publish(
        (symbol_short!("wallet"), wallet),
        true,
    );
}

// Pausa
pub fn emit_pause(env: &Env) {
    env.events().publish(
        (symbol_short!("pause"),),
        true,
    );
}

// Despausa
pub fn emit_unpause(env: &Env) {
    env.events().publish(
        (symbol_short!("unpause"),),
        true,
    );
}

//
// TESTES
//
