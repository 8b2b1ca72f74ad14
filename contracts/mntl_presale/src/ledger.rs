use soroban_sdk::{contractclient, token, Address, Env};
use crate::types::SaleError;

// ============================================================================
// INTERFACE DO TOKEN MNTL (parte usada pela venda)
// ============================================================================

/// Subconjunto do MNTL que a venda chama como controller.
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn buy(env: Env, to: Address, amount: i128);
    fn refund(env: Env, holder: Address, amount: i128);
    fn balance(env: Env, id: Address) -> i128;
    fn controller(env: Env) -> Option<Address>;
    fn detach_controller(env: Env);
}

/// Emite `amount` para `to`. Qualquer recusa do token aborta a chamada.
pub fn buy(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), SaleError> {
    match LedgerClient::new(env, token).try_buy(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(SaleError::LedgerRejected),
    }
}

/// Recolhe todo o saldo de MNTL de `holder`. Retorna quanto foi recolhido.
pub fn reclaim_all(env: &Env, token: &Address, holder: &Address) -> Result<i128, SaleError> {
    let client = LedgerClient::new(env, token);
    let held = client.balance(holder);
    if held == 0 {
        return Ok(0);
    }

    match client.try_refund(holder, &held) {
        Ok(Ok(())) => Ok(held),
        _ => Err(SaleError::LedgerRejected),
    }
}

/// Devolve a capacidade de controller ao dono, se ainda for desta venda.
/// Isso destrava as transferências do MNTL.
pub fn release_controller(env: &Env, token: &Address) -> Result<(), SaleError> {
    let client = LedgerClient::new(env, token);
    if client.controller() != Some(env.current_contract_address()) {
        return Ok(());
    }

    match client.try_detach_controller() {
        Ok(Ok(())) => Ok(()),
        _ => Err(SaleError::LedgerRejected),
    }
}

// ============================================================================
// ATIVO DE VALOR
// ============================================================================

/// Move valor nativo. Saldo curto vira `InsufficientBalance`; qualquer
/// outra recusa do ativo (auth, trustline congelada) vira `ValueTransferFailed`.
pub fn pay(
    env: &Env,
    value_token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), SaleError> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, value_token);
    if client.balance(from) < amount {
        return Err(SaleError::InsufficientBalance);
    }
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(SaleError::ValueTransferFailed),
    }
}

/// Saldo de valor nativo mantido pela venda
pub fn held_value(env: &Env, value_token: &Address) -> i128 {
    token::Client::new(env, value_token).balance(&env.current_contract_address())
}

/// 10^decimals do ativo de valor
pub fn value_unit(env: &Env, value_token: &Address) -> Option<i128> {
    let decimals = token::Client::new(env, value_token).decimals();
    if decimals > 18 {
        return None;
    }
    10i128.checked_pow(decimals)
}
