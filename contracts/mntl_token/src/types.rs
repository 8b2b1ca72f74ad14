use soroban_sdk::{contracterror, contracttype, String};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InsufficientBalance = 3,
    InvalidAmount = 4,
    Paused = 5,
    InsufficientSupply = 6,
    InvalidStageTransition = 7,

    // Transferências bloqueadas enquanto existe um controller (venda ativa)
    TransferLocked = 8,
    InsufficientAllowance = 9,
    NotPaused = 10,

    // mint não existe na variante de supply fixo
    Unsupported = 11,
    Reentrant = 12,
    Overflow = 13,
}

// ============================================================================
// METADADOS DO TOKEN
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// ============================================================================
// ESTÁGIOS DA VENDA
// ============================================================================

/// Fase do ciclo de vida do token. A ordem de declaração é a ordem do ciclo.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Stage {
    None = 0,
    PrivateSale = 1,
    SecondPrivateSale = 2,
    PreSale = 3,
    Sale = 4,
}

impl Stage {
    /// Só avança: pular estágios é permitido, repetir ou voltar não.
    pub fn can_advance_to(self, target: Stage) -> bool {
        target > self
    }
}

// ============================================================================
// POLÍTICA DE SUPPLY
// ============================================================================

/// Como o token emite unidades.
///
/// - `Fixed(initial)`: supply fixo no deploy. `buy` consome `available_tokens`
///   e `mint` não existe.
/// - `Pooled`: o controller faz `mint` (normalmente para o próprio contrato) e
///   `buy` sai do saldo do contrato.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SupplyPolicy {
    Fixed(i128),
    Pooled,
}
