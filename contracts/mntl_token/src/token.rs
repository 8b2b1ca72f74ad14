use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use crate::storage;
use crate::types::{Stage, SupplyPolicy, TokenError, TokenMetadata};
use crate::validation;
use crate::events;

//
// CONTRATO PRINCIPAL - MNTL TOKEN
//

#[contract]
pub struct MntlToken;

#[contractimpl]
impl MntlToken {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o token.
    ///
    /// # Parâmetros
    /// - `owner`: primeiro administrador (vira `owner()`)
    /// - `name` / `symbol`: metadados
    /// - `policy`: `Fixed(initial_supply)` ou `Pooled`
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    /// - `InvalidAmount`: supply fixo não positivo
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        policy: SupplyPolicy,
    ) -> Result<(), TokenError> {
        // CHECKS
        if access_registry::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        if let SupplyPolicy::Fixed(initial) = policy {
            validation::require_positive_amount(initial)?;
            storage::set_available_tokens(&env, initial);
        }

        // EFFECTS
        access_registry::init(&env, &owner);
        storage::set_paused(&env, false);
        storage::set_total_supply(&env, 0);
        storage::set_stage(&env, Stage::None);
        storage::set_supply_policy(&env, &policy);
        storage::set_metadata(&env, &TokenMetadata {
            name,
            symbol,
            decimals: storage::DECIMALS,
        });
        storage::bump_critical_storage(&env);

        Ok(())
    }

    //
    // FUNÇÕES SEP-41 PADRÃO (Leitura)
    //

    pub fn name(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env)
            .map(|m| m.name)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    pub fn symbol(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env)
            .map(|m| m.symbol)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    pub fn decimals(_env: Env) -> u32 {
        storage::DECIMALS
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::bump_balance(&env, &id);
        storage::get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_total_supply(&env)
    }

    /// Unidades que ainda podem ser vendidas.
    /// Em `Pooled` é o saldo do próprio contrato.
    pub fn available_tokens(env: Env) -> i128 {
        match storage::get_supply_policy(&env) {
            SupplyPolicy::Fixed(_) => storage::get_available_tokens(&env),
            SupplyPolicy::Pooled => storage::get_balance(&env, &env.current_contract_address()),
        }
    }

    pub fn supply_policy(env: Env) -> SupplyPolicy {
        storage::get_supply_policy(&env)
    }

    pub fn controller(env: Env) -> Option<Address> {
        storage::get_controller(&env)
    }

    pub fn stage(env: Env) -> Stage {
        storage::get_stage(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    //
    // TRANSFERÊNCIAS - CEI
    // Bloqueadas com o contrato pausado e enquanto houver controller.
    //

    /// Transfere tokens de `from` para `to`.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            from.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_not_paused(&env)?;
            validation::require_transfers_unlocked(&env)?;
            validation::require_positive_amount(amount)?;
            validation::require_sufficient_balance(&env, &from, amount)?;

            // === EFFECTS ===
            move_balance(&env, &from, &to, amount)?;

            // === INTERACTIONS ===
            events::emit_transfer(&env, &from, &to, amount);
            Ok(())
        })
    }

    /// Autoriza `spender` a gastar até `amount` de `from`. Zero revoga.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            from.require_auth();

            validation::require_not_paused(&env)?;
            validation::require_transfers_unlocked(&env)?;
            if amount < 0 {
                return Err(TokenError::InvalidAmount);
            }

            storage::set_allowance(&env, &from, &spender, amount);

            events::emit_approval(&env, &from, &spender, amount);
            Ok(())
        })
    }

    /// Transfere tokens usando allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            spender.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_not_paused(&env)?;
            validation::require_transfers_unlocked(&env)?;
            validation::require_positive_amount(amount)?;
            validation::require_sufficient_allowance(&env, &from, &spender, amount)?;
            validation::require_sufficient_balance(&env, &from, amount)?;

            // === EFFECTS ===
            let allowance = storage::get_allowance(&env, &from, &spender);
            storage::set_allowance(&env, &from, &spender, allowance - amount);
            move_balance(&env, &from, &to, amount)?;

            // === INTERACTIONS ===
            events::emit_transfer(&env, &from, &to, amount);
            Ok(())
        })
    }

    //
    // CONTROLLER E ESTÁGIOS
    //

    /// Troca o controller sem mexer no estágio (apenas admin).
    pub fn set_controller(env: Env, caller: Address, controller: Address) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);

            storage::set_controller(&env, &controller);

            log!(&env, "controller set", controller);
            events::emit_controller_set(&env, &controller);
            Ok(())
        })
    }

    pub fn enter_private_sale(env: Env, caller: Address, controller: Address) -> Result<(), TokenError> {
        enter_stage(&env, &caller, &controller, Stage::PrivateSale)
    }

    pub fn enter_second_private_sale(env: Env, caller: Address, controller: Address) -> Result<(), TokenError> {
        enter_stage(&env, &caller, &controller, Stage::SecondPrivateSale)
    }

    pub fn enter_pre_sale(env: Env, caller: Address, controller: Address) -> Result<(), TokenError> {
        enter_stage(&env, &caller, &controller, Stage::PreSale)
    }

    pub fn enter_sale(env: Env, caller: Address, controller: Address) -> Result<(), TokenError> {
        enter_stage(&env, &caller, &controller, Stage::Sale)
    }

    /// O controller atual devolve a capacidade. Destrava as transferências.
    pub fn detach_controller(env: Env) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            let controller = validation::require_controller(&env)?;
            storage::bump_critical_storage(&env);

            storage::clear_controller(&env);

            log!(&env, "controller detached", controller);
            events::emit_controller_detached(&env, &controller);
            Ok(())
        })
    }

    //
    // OPERAÇÕES DO CONTROLLER
    // mint/buy/burn/refund: sempre validadas contra o estado atual.
    //

    /// Cria tokens (apenas controller, apenas `Pooled`).
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            validation::require_controller(&env)?;
            storage::bump_critical_storage(&env);

            if let SupplyPolicy::Fixed(_) = storage::get_supply_policy(&env) {
                return Err(TokenError::Unsupported);
            }
            validation::require_positive_amount(amount)?;

            // === EFFECTS ===
            credit(&env, &to, amount)?;
            let new_supply = storage::get_total_supply(&env)
                .checked_add(amount)
                .ok_or(TokenError::Overflow)?;
            storage::set_total_supply(&env, new_supply);

            // === INTERACTIONS ===
            // Sem endereço zero no Soroban: o evento `mint` (SEP-41) é o registro
            // da emissão, não há `transfer` de origem.
            events::emit_mint(&env, &to, amount);
            Ok(())
        })
    }

    /// Entrega `amount` ao comprador (apenas controller).
    ///
    /// - `Fixed`: consome `available_tokens` e aumenta o supply.
    /// - `Pooled`: sai do saldo do próprio contrato.
    pub fn buy(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            validation::require_controller(&env)?;
            storage::bump_critical_storage(&env);
            validation::require_positive_amount(amount)?;

            let this = env.current_contract_address();

            // === EFFECTS ===
            match storage::get_supply_policy(&env) {
                SupplyPolicy::Fixed(_) => {
                    let available = storage::get_available_tokens(&env);
                    if amount > available {
                        return Err(TokenError::InsufficientSupply);
                    }
                    storage::set_available_tokens(&env, available - amount);

                    credit(&env, &to, amount)?;
                    let new_supply = storage::get_total_supply(&env)
                        .checked_add(amount)
                        .ok_or(TokenError::Overflow)?;
                    storage::set_total_supply(&env, new_supply);
                }
                SupplyPolicy::Pooled => {
                    if storage::get_balance(&env, &this) < amount {
                        return Err(TokenError::InsufficientSupply);
                    }
                    move_balance(&env, &this, &to, amount)?;
                }
            }

            // === INTERACTIONS ===
            events::emit_transfer(&env, &this, &to, amount);
            Ok(())
        })
    }

    /// Destrói tokens de `holder` (apenas controller).
    pub fn burn(env: Env, holder: Address, amount: i128) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            validation::require_controller(&env)?;
            storage::bump_critical_storage(&env);
            validation::require_positive_amount(amount)?;
            validation::require_sufficient_balance(&env, &holder, amount)?;

            // === EFFECTS ===
            debit(&env, &holder, amount)?;
            let new_supply = storage::get_total_supply(&env)
                .checked_sub(amount)
                .ok_or(TokenError::Overflow)?;
            storage::set_total_supply(&env, new_supply);

            // === INTERACTIONS ===
            events::emit_burn(&env, &holder, amount);
            Ok(())
        })
    }

    /// Devolve `amount` de `holder` ao contrato (apenas controller).
    /// Usado pela pré-venda no caminho de falha.
    pub fn refund(env: Env, holder: Address, amount: i128) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            // === CHECKS ===
            validation::require_controller(&env)?;
            storage::bump_critical_storage(&env);
            validation::require_positive_amount(amount)?;
            validation::require_sufficient_balance(&env, &holder, amount)?;

            let this = env.current_contract_address();

            // === EFFECTS ===
            match storage::get_supply_policy(&env) {
                SupplyPolicy::Fixed(_) => {
                    debit(&env, &holder, amount)?;
                    let new_supply = storage::get_total_supply(&env)
                        .checked_sub(amount)
                        .ok_or(TokenError::Overflow)?;
                    storage::set_total_supply(&env, new_supply);

                    let available = storage::get_available_tokens(&env)
                        .checked_add(amount)
                        .ok_or(TokenError::Overflow)?;
                    storage::set_available_tokens(&env, available);
                }
                SupplyPolicy::Pooled => {
                    move_balance(&env, &holder, &this, amount)?;
                }
            }

            // === INTERACTIONS ===
            log!(&env, "tokens refunded", holder, amount);
            events::emit_transfer(&env, &holder, &this, amount);
            Ok(())
        })
    }

    //
    // FUNÇÕES ADMINISTRATIVAS
    //

    /// Pausa o contrato (apenas admin). Pausar duas vezes é erro.
    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        storage::guarded(&env, || {
            validation::require_admin(&env, &caller)?;
            storage::bump_critical_storage(&env);
            validation::require_not_paused(&env)?;

            storage::set_paused(&env, true);

            events::emit_pause(&env);
            Ok(())
        })
    }

    /// Despausa o contrato (apenas admin).
    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
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
    pub fn add_owner(env: Env, caller: Address, account: Address) -> Result<bool, TokenError> {
        validation::require_admin(&env, &caller)?;
        Ok(access_registry::add(&env, &account))
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

fn enter_stage(
    env: &Env,
    caller: &Address,
    controller: &Address,
    target: Stage,
) -> Result<(), TokenError> {
    storage::guarded(env, || {
        // === CHECKS ===
        validation::require_admin(env, caller)?;
        storage::bump_critical_storage(env);
        let from = validation::require_stage_advance(env, target)?;

        // === EFFECTS ===
        storage::set_stage(env, target);
        storage::set_controller(env, controller);

        // === INTERACTIONS ===
        log!(env, "stage changed", from as u32, target as u32);
        events::emit_stage_changed(env, from, target);
        events::emit_controller_set(env, controller);
        Ok(())
    })
}

fn credit(env: &Env, addr: &Address, amount: i128) -> Result<(), TokenError> {
    let new_balance = storage::get_balance(env, addr)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    storage::set_balance(env, addr, new_balance);
    Ok(())
}

fn debit(env: &Env, addr: &Address, amount: i128) -> Result<(), TokenError> {
    let new_balance = storage::get_balance(env, addr)
        .checked_sub(amount)
        .filter(|b| *b >= 0)
        .ok_or(TokenError::InsufficientBalance)?;
    storage::set_balance(env, addr, new_balance);
    Ok(())
}

// Debita antes de creditar: com from == to o saldo fica igual.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    debit(env, from, amount)?;
    credit(env, to, amount)
}

//
// TESTES UNITÁRIOS
//
