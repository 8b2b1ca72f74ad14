use soroban_sdk::{contracterror, contracttype, Address};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidConfig = 3,
    InvalidAmount = 4,

    // Fora de [start_at, close_at]
    OutsideWindow = 5,

    // A operação exige outro estado (Active ou Failure)
    AlreadyTerminal = 6,
    Paused = 7,
    NotPaused = 8,
    ZeroContribution = 9,
    InsufficientBalance = 10,

    // Hard cap já esgotado
    InsufficientSupply = 11,
    SoftCapNotReached = 12,
    InvalidCloseAt = 13,

    // close() antes de close_at
    WindowOpen = 14,

    // O token recusou buy/refund/detach
    LedgerRejected = 15,
    Reentrant = 16,
    Overflow = 17,
    NotInitialized = 18,

    // O ativo de valor recusou a transferência por outro motivo (auth, trustline)
    ValueTransferFailed = 19,
}

// ============================================================================
// ESTADO DA VENDA
// ============================================================================

/// `Active` é o único estado não terminal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SaleState {
    Active = 0,
    Failure = 1,
    SoftcapSuccess = 2,
    HardcapSuccess = 3,
}

impl SaleState {
    pub fn is_terminal(self) -> bool {
        self != SaleState::Active
    }
}

// ============================================================================
// CONFIGURAÇÃO
// ============================================================================

/// Parâmetros do construtor, validados uma única vez em `initialize`.
/// Só `close_at` (para frente) e `wallet` mudam depois.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Contrato do MNTL
    pub token: Address,
    /// Ativo usado como valor nativo (ex: XLM via Stellar Asset Contract)
    pub value_token: Address,
    pub start_at: u64,
    pub close_at: u64,
    /// Em unidades mínimas do MNTL
    pub soft_cap: i128,
    /// Em unidades mínimas do MNTL
    pub hard_cap: i128,
    pub wallet: Address,
    /// 10^decimals do ativo de valor
    pub value_unit: i128,
}

impl SaleConfig {
    /// Janela inclusiva nas duas pontas
    pub fn is_open_at(&self, now: u64) -> bool {
        self.start_at <= now && now <= self.close_at
    }
}
