#![no_std]
//! Registro de administradores (multi-owner) usado pelo token e pela pré-venda.
//!
//! Cada contrato guarda o seu próprio conjunto de membros no próprio storage.
//! Não existe remoção: uma vez membro, sempre membro.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// TTL para as entradas de membros (1 ano em ledgers ~= 6.3M ledgers)
const MEMBER_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const MEMBER_THRESHOLD: u32 = 518_400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessKey {
    Primary,
    Member(Address),
}

// ============================================================================
// INICIALIZAÇÃO
// ============================================================================

/// Registra o dono inicial, que também vira o primeiro membro.
pub fn init(env: &Env, owner: &Address) {
    env.storage().instance().set(&AccessKey::Primary, owner);
    write_member(env, owner);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&AccessKey::Primary)
}

// ============================================================================
// CONSULTAS
// ============================================================================

/// Dono inicial (quem fez o deploy).
pub fn primary(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::Primary)
}

pub fn is_member(env: &Env, account: &Address) -> bool {
    let key = AccessKey::Member(account.clone());
    let member = env
        .storage()
        .persistent()
        .get::<_, bool>(&key)
        .unwrap_or(false);

    if member {
        env.storage()
            .persistent()
            .extend_ttl(&key, MEMBER_THRESHOLD, MEMBER_TTL);
    }
    member
}

// ============================================================================
// ESCRITA
// ============================================================================

/// Adiciona `account` ao conjunto. Retorna `false` se já era membro (no-op).
///
/// A checagem de que o chamador é membro fica com o contrato que expõe a
/// operação (`validation::require_admin`).
pub fn add(env: &Env, account: &Address) -> bool {
    if is_member(env, account) {
        return false;
    }

    write_member(env, account);
    env.events()
        .publish((symbol_short!("owner_add"), account.clone()), true);
    true
}

fn write_member(env: &Env, account: &Address) {
    let key = AccessKey::Member(account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, MEMBER_THRESHOLD, MEMBER_TTL);
}

//
// TESTES
//
