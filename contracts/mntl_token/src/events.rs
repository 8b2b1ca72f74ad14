use soroban_sdk::{Address, Env, symbol_short};
use crate::types::Stage;

//
// EVENTOS DO TOKEN
//

// Transferência padrão SEP‑0041 (buy/refund usam o próprio contrato como ponta)
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from, to),
        amount,
    );
}

// Mint padrão SEP‑0041 (equivale ao Transfer vindo do "zero")
pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("mint"), to),
        amount,
    );
}

// Burn padrão SEP‑0041
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("burn"), from),
        amount,
    );
}

// Evento de aprovação (compatível SEP‑41 + ERC‑20)
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), owner, spender),
        amount,
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

// Novo controller
pub fn emit_controller_set(env: &Env, controller: &Address) {
    env.events().publish(
        (symbol_short!("ctrl_set"), controller),
        true,
    );
}

// Controller devolveu a capacidade
pub fn emit_controller_detached(env: &Env, controller: &Address) {
    env.events().publish(
        (symbol_short!("ctrl_det"), controller),
        true,
    );
}

// Mudança de estágio (from, to)
pub fn emit_stage_changed(env: &Env, from: Stage, to: Stage) {
    env.events().publish(
        (symbol_short!("stage"),),
        (from as u32, to as u32),
    );
}

//
// TESTES
//
