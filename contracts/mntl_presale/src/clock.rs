use soroban_sdk::Env;

/// Fonte única de "agora" para a lógica de janela da venda.
///
/// Lido uma vez no início de cada chamada sensível a tempo; nunca guardado
/// entre chamadas.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Relógio do ledger (timestamp do fechamento do ledger atual)
pub struct LedgerClock<'a> {
    env: &'a Env,
}

impl<'a> LedgerClock<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl Clock for LedgerClock<'_> {
    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}

/// Relógio parado, para testes determinísticos
#[cfg(test)]
pub struct FixedClock(pub u64);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}
