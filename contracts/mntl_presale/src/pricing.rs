// ============================================================================
// PREÇO E BÔNUS
// ============================================================================

/// MNTL por unidade inteira do ativo de valor
pub const RATE: i128 = 10_000;

/// 1 MNTL em unidades mínimas (10^18)
pub const ONE_TOKEN: i128 = 1_000_000_000_000_000_000;

/// (limite exclusivo em unidades inteiras, bônus %), do maior para o menor.
/// Vale o primeiro que casar; não acumula entre contribuições.
pub const BONUS_TIERS: [(i128, i128); 4] = [(120, 20), (60, 15), (30, 10), (15, 5)];

/// Resultado de uma contribuição já cortada pelo hard cap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Purchase {
    /// MNTL a emitir
    pub tokens: i128,
    /// Valor que fica com a venda
    pub cost: i128,
    /// Valor devolvido ao investidor na mesma chamada
    pub excess: i128,
    /// A contribuição esgotou o hard cap
    pub fills_cap: bool,
}

/// Bônus (%) de uma única contribuição de `amount` unidades mínimas.
pub fn bonus_percent(amount: i128, value_unit: i128) -> i128 {
    for (threshold, percent) in BONUS_TIERS {
        if amount > threshold * value_unit {
            return percent;
        }
    }
    0
}

/// Unidades mínimas de MNTL por unidade mínima do ativo de valor, antes do
/// `RATE`. Exato porque o ativo tem no máximo 18 decimais.
pub fn scale(value_unit: i128) -> Option<i128> {
    if value_unit <= 0 || ONE_TOKEN % value_unit != 0 {
        return None;
    }
    Some(ONE_TOKEN / value_unit)
}

/// `amount * RATE * (1 + bonus)` convertido para unidades mínimas do MNTL.
pub fn tokens_for(amount: i128, value_unit: i128) -> Option<i128> {
    let percent = bonus_percent(amount, value_unit);
    amount
        .checked_mul(RATE)?
        .checked_mul(scale(value_unit)?)?
        .checked_mul(100 + percent)?
        .checked_div(100)
}

/// Valor mínimo que compra `tokens` com o bônus `percent`.
/// Arredonda para cima: a venda nunca emite por menos do que recebe.
pub fn cost_of(tokens: i128, percent: i128, value_unit: i128) -> Option<i128> {
    let numerator = tokens.checked_mul(100)?;
    let denominator = RATE
        .checked_mul(scale(value_unit)?)?
        .checked_mul(100 + percent)?;

    let cost = numerator / denominator;
    if numerator % denominator == 0 {
        Some(cost)
    } else {
        cost.checked_add(1)
    }
}

/// Cota uma contribuição contra o que ainda cabe no hard cap.
///
/// Se `sold + tokens` passar de `hard_cap`, emite só o restante, cobra o
/// custo recalculado (mesma faixa de bônus da contribuição recebida) e marca
/// `fills_cap`. Retorna `None` em overflow.
pub fn quote(amount: i128, value_unit: i128, sold: i128, hard_cap: i128) -> Option<Purchase> {
    let tokens = tokens_for(amount, value_unit)?;
    let remaining = hard_cap.checked_sub(sold)?.max(0);

    if tokens <= remaining {
        return Some(Purchase {
            tokens,
            cost: amount,
            excess: 0,
            fills_cap: false,
        });
    }

    let percent = bonus_percent(amount, value_unit);
    let cost = cost_of(remaining, percent, value_unit)?.min(amount);
    Some(Purchase {
        tokens: remaining,
        cost,
        excess: amount - cost,
        fills_cap: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ativo de valor com 7 decimais (XLM)
    const UNIT: i128 = 10_000_000;

    fn mntl(amount: i128) -> i128 {
        amount * ONE_TOKEN
    }

    #[test]
    fn test_no_bonus_up_to_15_units() {
        assert_eq!(bonus_percent(UNIT, UNIT), 0);
        assert_eq!(bonus_percent(15 * UNIT, UNIT), 0);
        assert_eq!(tokens_for(2 * UNIT, UNIT), Some(mntl(20_000)));
    }

    #[test]
    fn test_bonus_tiers_match_reference_amounts() {
        // 16 → 5%, 31 → 10%, 61 → 15%, 121 → 20%
        assert_eq!(tokens_for(16 * UNIT, UNIT), Some(mntl(16 * RATE * 105 / 100)));
        assert_eq!(tokens_for(31 * UNIT, UNIT), Some(mntl(31 * RATE * 110 / 100)));
        assert_eq!(tokens_for(61 * UNIT, UNIT), Some(mntl(61 * RATE * 115 / 100)));
        assert_eq!(tokens_for(121 * UNIT, UNIT), Some(mntl(121 * RATE * 120 / 100)));
    }

    #[test]
    fn test_tier_thresholds_are_exclusive() {
        assert_eq!(bonus_percent(30 * UNIT, UNIT), 5);
        assert_eq!(bonus_percent(30 * UNIT + 1, UNIT), 10);
        assert_eq!(bonus_percent(60 * UNIT, UNIT), 10);
        assert_eq!(bonus_percent(120 * UNIT, UNIT), 15);
        assert_eq!(bonus_percent(120 * UNIT + 1, UNIT), 20);
    }

    #[test]
    fn test_quote_within_cap() {
        let p = quote(2 * UNIT, UNIT, 0, mntl(30_000)).unwrap();
        assert_eq!(p, Purchase {
            tokens: mntl(20_000),
            cost: 2 * UNIT,
            excess: 0,
            fills_cap: false,
        });
    }

    #[test]
    fn test_quote_exact_fill_does_not_clip() {
        let p = quote(2 * UNIT, UNIT, mntl(10_000), mntl(30_000)).unwrap();
        assert!(!p.fills_cap);
        assert_eq!(p.tokens, mntl(20_000));
    }

    #[test]
    fn test_quote_clips_to_remaining_and_returns_excess() {
        let p = quote(2 * UNIT, UNIT, mntl(20_000), mntl(30_000)).unwrap();
        assert_eq!(p, Purchase {
            tokens: mntl(10_000),
            cost: UNIT,
            excess: UNIT,
            fills_cap: true,
        });
    }

    #[test]
    fn test_quote_clip_keeps_bonus_tier() {
        // 16 unidades (5%) mas só cabem 10_500 MNTL → custo exato de 1 unidade
        let p = quote(16 * UNIT, UNIT, 0, mntl(10_500)).unwrap();
        assert_eq!(p.tokens, mntl(10_500));
        assert_eq!(p.cost, UNIT);
        assert_eq!(p.excess, 15 * UNIT);
    }

    #[test]
    fn test_cost_rounds_up() {
        // 1 unidade mínima de MNTL ainda custa 1 unidade mínima de valor
        assert_eq!(cost_of(1, 0, UNIT), Some(1));
        assert_eq!(cost_of(0, 0, UNIT), Some(0));
    }

    #[test]
    fn test_quote_on_exhausted_cap_issues_nothing() {
        let p = quote(UNIT, UNIT, mntl(30_000), mntl(30_000)).unwrap();
        assert_eq!(p.tokens, 0);
        assert_eq!(p.cost, 0);
        assert_eq!(p.excess, UNIT);
        assert!(p.fills_cap);
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(tokens_for(i128::MAX / 2, UNIT), None);
    }

    // Ativo de valor com 18 decimais (escala do ether)
    const WIDE_UNIT: i128 = ONE_TOKEN;

    #[test]
    fn test_scale_by_decimals() {
        assert_eq!(scale(UNIT), Some(100_000_000_000));
        assert_eq!(scale(WIDE_UNIT), Some(1));
        assert_eq!(scale(1), Some(ONE_TOKEN));
        assert_eq!(scale(3), None);
        assert_eq!(scale(0), None);
    }

    #[test]
    fn test_eighteen_decimal_asset_prices_whole_units() {
        assert_eq!(tokens_for(WIDE_UNIT, WIDE_UNIT), Some(mntl(10_000)));
        assert_eq!(tokens_for(16 * WIDE_UNIT, WIDE_UNIT), Some(mntl(168_000)));
        assert_eq!(tokens_for(121 * WIDE_UNIT, WIDE_UNIT), Some(mntl(1_452_000)));
        assert_eq!(cost_of(mntl(168_000), 5, WIDE_UNIT), Some(16 * WIDE_UNIT));
    }

    #[test]
    fn test_eighteen_decimal_clip_at_reference_cap() {
        // 400 unidades (+20%) contra o hard cap de 3.25M MNTL
        let p = quote(400 * WIDE_UNIT, WIDE_UNIT, 0, mntl(3_250_000)).unwrap();
        assert!(p.fills_cap);
        assert_eq!(p.tokens, mntl(3_250_000));

        // 3.25M / 12_000 por unidade, arredondado para cima
        let expected_cost = (mntl(3_250_000) * 100 + 1_200_000 - 1) / 1_200_000;
        assert_eq!(p.cost, expected_cost);
        assert_eq!(p.excess, 400 * WIDE_UNIT - expected_cost);
    }

    #[test]
    fn test_large_contribution_is_clipped_not_overflowed() {
        // 20M unidades de 7 decimais
        let p = quote(20_000_000 * UNIT, UNIT, 0, mntl(3_250_000)).unwrap();
        assert!(p.fills_cap);
        assert_eq!(p.tokens, mntl(3_250_000));
        assert!(p.cost < 300 * UNIT);
        assert_eq!(p.cost + p.excess, 20_000_000 * UNIT);
    }
}
