use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env};
use crate::clock::{Clock, LedgerClock};
use crate::events;
use crate::ledger;
use crate::pricing;
use crate::storage;
use crate::types::{SaleConfig, SaleError, SaleState};
use crate::validation;

//
// CONTRATO PRINCIPAL - PRÉ-VENDA MNTL
//

#[contract]
pub struct MntlPresale;

#[contractimpl]
impl MntlPresale {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa a venda. Chamado uma vez, antes de qualquer outra operação.
    ///
    /// # Parâmetros
    /// - `token`: contrato MNTL (a venda precisa virar controller dele)
    /// - `value_token`: ativo aceito como pagamento
    /// - `start_at` / `close_at`: janela de contribuição (inclusiva)
    /// - `soft_cap` / `hard_cap`: em unidades mínimas de MNTL
    /// - `wallet`: destino dos recursos em caso de sucesso
    ///
    /// # Erros
    /// - `AlreadyInitialized`
    /// - `InvalidConfig`: janela vazia, caps inválidos ou ativo com mais de 18 decimais
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        value_token: Address,
        start_at: u64,
        close_at: u64,
        soft_cap: i128,
        hard_cap: i128,
        wallet: Address,
    ) -> Result<(), SaleError> {
        // CHECKS
        if storage::has_config(&env) {
            return Err(SaleError::AlreadyInitialized);
        }
        validation::require_valid_config(start_at, close_at, soft_cap, hard_cap)?;
        let value_unit = ledger::value_unit(&env, &value_token).ok_or(SaleError::InvalidConfig)?;

        // EFFECTS
        access_registry::init(&env, &owner);
        storage::set_config(&env, &SaleConfig {
            token,
            value_token,
            start_at,
            close_at,
            soft_cap,
            hard_cap,
            wallet,
            value_unit,
        });
        storage::set_state(&env, SaleState::Active);
        storage::set_paused(&env, false);
        storage::set_we_raised(&env, 0);
        storage::set_we_solved(&env, 0);
        storage::bump_critical_storage(&env);

        Ok(())
    }

    //
    // CONTRIBUIÇÃO
    //

    /// Recebe `amount` do ativo de valor de `investor` e entrega MNTL.
    ///
    /// Se a contribuição passar do hard cap, só o restante é emitido, o
    /// excedente volta ao investidor e a venda fecha em `HardcapSuccess`,
    /// tudo na mesma chamada. Retorna o MNTL emitido.
    pub fn contribute(env: Env, investor: Address, amount: i128) -> Result<i128, SaleError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            investor.require_auth();
            storage::bump_critical_storage(&env);

            let clock = LedgerClock::new(&env);
            let config = storage::get_config(&env)?;
            validation::require_state(&env, SaleState::Active)?;
            validation::require_not_paused(&env)?;
            validation::require_within_window(&config, &clock)?;
            validation::require_positive_amount(amount)?;

            let sold = storage::get_we_solved(&env);
            let purchase = pricing::quote(amount, config.value_unit, sold, config.hard_cap)
                .ok_or(SaleError::Overflow)?;
            if purchase.tokens == 0 {
                return Err(SaleError::InsufficientSupply);
            }

            // === EFFECTS ===
            let contributed = storage::get_contribution(&env, &investor)
                .checked_add(purchase.cost)
                .ok_or(SaleError::Overflow)?;
            let raised = storage::get_we_raised(&env)
                .checked_add(purchase.cost)
                .ok_or(SaleError::Overflow)?;
            let solved = sold
                .checked_add(purchase.tokens)
                .ok_or(SaleError::Overflow)?;

            storage::set_contribution(&env, &investor, contributed);
            storage::set_we_raised(&env, raised);
            storage::set_we_solved(&env, solved);
            if purchase.fills_cap {
                storage::set_state(&env, SaleState::HardcapSuccess);
            }

            // === INTERACTIONS ===
            let this = env.current_contract_address();
            ledger::pay(&env, &config.value_token, &investor, &this, amount)?;
            ledger::buy(&env, &config.token, &investor, purchase.tokens)?;
            ledger::pay(&env, &config.value_token, &this, &investor, purchase.excess)?;
            events::emit_contribution(&env, &investor, purchase.cost, purchase.tokens);

            if purchase.fills_cap {
                log!(&env, "hard cap reached", purchase.tokens, purchase.excess);
                forward_proceeds(&env, &config)?;
                ledger::release_controller(&env, &config.token)?;
                events::emit_state_changed(&env, SaleState::HardcapSuccess);
            }

            Ok(purchase.tokens)
        })
    }

    //
    // ENCERRAMENTO
    //

    /// Fecha a venda depois de `close_at` (apenas admin).
    ///
    /// Soft cap atingido: `SoftcapSuccess`, recursos para a carteira e o
    /// controle do token é devolvido. Caso contrário `Failure`, sem mover
    /// fundos (os investidores chamam `refund`).
    pub fn close(env: Env, caller: Address) -> Result<SaleState, SaleError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);

            let clock = LedgerClock::new(&env);
            let config = storage::get_config(&env)?;
            validation::require_state(&env, SaleState::Active)?;
            validation::require_after_close(&config, &clock)?;

            // Caps em MNTL: compara com o emitido, não com o valor arrecadado
            let resolved = if storage::get_we_solved(&env) >= config.soft_cap {
                SaleState::SoftcapSuccess
            } else {
                SaleState::Failure
            };

            // === EFFECTS ===
            storage::set_state(&env, resolved);

            // === INTERACTIONS ===
            if resolved == SaleState::SoftcapSuccess {
                forward_proceeds(&env, &config)?;
                ledger::release_controller(&env, &config.token)?;
            }

            log!(&env, "sale closed", resolved as u32);
            events::emit_state_changed(&env, resolved);
            events::emit_status(&env, symbol_short!("close"));
            Ok(resolved)
        })
    }

    /// Devolve a contribuição de `investor` depois de uma venda fracassada.
    /// Qualquer um pode chamar; o valor sempre vai para o investidor.
    pub fn refund(env: Env, investor: Address) -> Result<i128, SaleError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            storage::bump_critical_storage(&env);
            storage::bump_contribution(&env, &investor);

            let config = storage::get_config(&env)?;
            validation::require_state(&env, SaleState::Failure)?;
            validation::require_not_paused(&env)?;

            let sum = storage::get_contribution(&env, &investor);
            if sum <= 0 {
                return Err(SaleError::ZeroContribution);
            }

            // === EFFECTS ===
            storage::set_contribution(&env, &investor, 0);

            // === INTERACTIONS ===
            let reclaimed = ledger::reclaim_all(&env, &config.token, &investor)?;
            ledger::pay(&env, &config.value_token, &env.current_contract_address(), &investor, sum)?;

            log!(&env, "refund paid", investor, sum, reclaimed);
            events::emit_refund(&env, &investor, sum);
            Ok(sum)
        })
    }

    //
    // FUNÇÕES ADMINISTRATIVAS
    //

    /// Saque manual para a carteira enquanto a venda está ativa.
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), SaleError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);

            let config = storage::get_config(&env)?;
            validation::require_state(&env, SaleState::Active)?;
            validation::require_positive_amount(amount)?;
            if ledger::held_value(&env, &config.value_token) < amount {
                return Err(SaleError::InsufficientBalance);
            }

            // === INTERACTIONS ===
            ledger::pay(&env, &config.value_token, &env.current_contract_address(), &config.wallet, amount)?;
            events::emit_withdraw(&env, &config.wallet, amount);
            Ok(())
        })
    }

    pub fn set_withdraw_wallet(env: Env, caller: Address, wallet: Address) -> Result<(), SaleError> {
        storage::guarded(&env, || {
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);

            let mut config = storage::get_config(&env)?;
            config.wallet = wallet.clone();
            storage::set_config(&env, &config);

            events::emit_wallet_changed(&env, &wallet);
            Ok(())
        })
    }

    /// Estende a janela. Só depois do soft cap, e só para frente.
    pub fn change_close_at(env: Env, caller: Address, new_close_at: u64) -> Result<(), SaleError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);

            let mut config = storage::get_config(&env)?;
            validation::require_state(&env, SaleState::Active)?;
            validation::require_soft_cap_reached(&env, &config)?;
            validation::require_extends_close(&config, new_close_at)?;

            // === EFFECTS ===
            let old_close_at = config.close_at;
            config.close_at = new_close_at;
            storage::set_config(&env, &config);

            // === INTERACTIONS ===
            events::emit_close_at_changed(&env, old_close_at, new_close_at);
            Ok(())
        })
    }

    /// Emite MNTL fora da venda (bounty). Não mexe em contadores nem caps.
    pub fn send_bounty(env: Env, caller: Address, beneficiary: Address, tokens: i128) -> Result<(), SaleError> {
        storage::guarded(&env, || {
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);

            let config = storage::get_config(&env)?;
            validation::require_positive_amount(tokens)?;

            ledger::buy(&env, &config.token, &beneficiary, tokens)?;
            events::emit_bounty(&env, &beneficiary, tokens);
            Ok(())
        })
    }

    /// Pausa a venda (apenas admin). Bloqueia contribuições e refunds.
    pub fn pause(env: Env, caller: Address) -> Result<(), SaleError> {
        storage::guarded(&env, || {
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);
            validation::require_not_paused(&env)?;

            storage::set_paused(&env, true);

            events::emit_pause(&env);
            Ok(())
        })
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), SaleError> {
        storage::guarded(&env, || {
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);
            validation::require_paused(&env)?;

            storage::set_paused(&env, false);

            events::emit_unpause(&env);
            Ok(())
        })
    }

    /// Adiciona um administrador. Retorna `false` se ele já era membro.
    pub fn add_owner(env: Env, caller: Address, account: Address) -> Result<bool, SaleError> {
        validation::require_admin(&env, &caller)?;
        Ok(access_registry::add(&env, &account))
    }

    //
    // LEITURA
    //

    /// Aceitaria uma contribuição agora?
    pub fn is_active(env: Env) -> bool {
        let Ok(config) = storage::get_config(&env) else {
            return false;
        };
        sale_is_active(&env, &config, &LedgerClock::new(&env))
    }

    pub fn state(env: Env) -> SaleState {
        storage::get_state(&env)
    }

    pub fn get_we_raised(env: Env) -> i128 {
        storage::get_we_raised(&env)
    }

    pub fn get_we_solved(env: Env) -> i128 {
        storage::get_we_solved(&env)
    }

    pub fn contribution_of(env: Env, investor: Address) -> i128 {
        storage::get_contribution(&env, &investor)
    }

    pub fn start_at(env: Env) -> Result<u64, SaleError> {
        Ok(storage::get_config(&env)?.start_at)
    }

    pub fn close_at(env: Env) -> Result<u64, SaleError> {
        Ok(storage::get_config(&env)?.close_at)
    }

    pub fn wallet(env: Env) -> Result<Address, SaleError> {
        Ok(storage::get_config(&env)?.wallet)
    }

    pub fn config(env: Env) -> Result<SaleConfig, SaleError> {
        storage::get_config(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn is_owner(env: Env, account: Address) -> bool {
        access_registry::is_member(&env, &account)
    }

    pub fn owner(env: Env) -> Option<Address> {
        access_registry::primary(&env)
    }
}

//
// AUXILIARES (não exportados)
//

pub(crate) fn sale_is_active(env: &Env, config: &SaleConfig, clock: &impl Clock) -> bool {
    storage::get_state(env) == SaleState::Active
        && !storage::is_paused(env)
        && config.is_open_at(clock.now())
        && storage::get_we_solved(env) < config.hard_cap
}

/// Todo o valor mantido pela venda vai para a carteira
fn forward_proceeds(env: &Env, config: &SaleConfig) -> Result<(), SaleError> {
    let held = ledger::held_value(env, &config.value_token);
    ledger::pay(env, &config.value_token, &env.current_contract_address(), &config.wallet, held)?;
    if held > 0 {
        events::emit_withdraw(env, &config.wallet, held);
    }
    Ok(())
}

//
// TESTES UNITÁRIOS
//
