use super::types::{OptionLeg, OptionType, Side};

/// Profit/loss contributed by one leg at expiration. Premium and intrinsic
/// value only: no commissions, early exercise, dividends or carry.
pub fn leg_payoff(leg: &OptionLeg, price_at_expiration: f64) -> f64 {
    let intrinsic = match leg.option_type {
        OptionType::Call => (price_at_expiration - leg.strike).max(0.0),
        OptionType::Put => (leg.strike - price_at_expiration).max(0.0),
    };
    let per_unit = match leg.side {
        Side::Long => intrinsic - leg.premium,
        Side::Short => leg.premium - intrinsic,
    };
    per_unit * f64::from(leg.quantity)
}

/// Aggregate profit/loss of all legs at expiration.
pub fn strategy_payoff(legs: &[OptionLeg], price_at_expiration: f64) -> f64 {
    legs.iter().map(|leg| leg_payoff(leg, price_at_expiration)).sum()
}

/// Net cash flow at entry. Short legs are premium received (positive),
/// long legs premium paid (negative). Positive = credit, negative = debit;
/// the UI labels hang off this sign, so it must not drift.
pub fn net_premium(legs: &[OptionLeg]) -> f64 {
    legs.iter()
        .map(|leg| {
            let signed = match leg.side {
                Side::Short => leg.premium,
                Side::Long => -leg.premium,
            };
            signed * f64::from(leg.quantity)
        })
        .sum()
}

/// Standalone breakeven of one leg, as shown in the CSV export.
/// A put cannot break even below zero.
pub fn leg_breakeven(leg: &OptionLeg) -> f64 {
    match leg.option_type {
        OptionType::Call => leg.strike + leg.premium,
        OptionType::Put => (leg.strike - leg.premium).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(option_type: OptionType, side: Side, strike: f64, premium: f64, quantity: u32) -> OptionLeg {
        OptionLeg::new(option_type, side, strike, premium, quantity)
    }

    // --- leg_payoff ---

    #[test]
    fn long_call_below_strike_loses_premium() {
        let l = leg(OptionType::Call, Side::Long, 100.0, 5.0, 1);
        assert_eq!(leg_payoff(&l, 80.0), -5.0);
        assert_eq!(leg_payoff(&l, 100.0), -5.0);
    }

    #[test]
    fn long_call_above_strike_gains_intrinsic_minus_premium() {
        let l = leg(OptionType::Call, Side::Long, 100.0, 5.0, 1);
        // d = 12 above strike → (12 - 5) * 1
        assert_eq!(leg_payoff(&l, 112.0), 7.0);
    }

    #[test]
    fn short_put_above_strike_keeps_premium() {
        let l = leg(OptionType::Put, Side::Short, 100.0, 4.0, 1);
        assert_eq!(leg_payoff(&l, 100.0), 4.0);
        assert_eq!(leg_payoff(&l, 130.0), 4.0);
    }

    #[test]
    fn short_put_below_strike_pays_intrinsic() {
        let l = leg(OptionType::Put, Side::Short, 100.0, 4.0, 1);
        // d = 10 below strike → (4 - 10) * 1
        assert_eq!(leg_payoff(&l, 90.0), -6.0);
    }

    #[test]
    fn quantity_scales_payoff() {
        let l = leg(OptionType::Call, Side::Long, 100.0, 5.0, 3);
        assert_eq!(leg_payoff(&l, 112.0), 21.0);
    }

    #[test]
    fn cash_secured_put_scenario() {
        // Short put, strike 170, premium 3, one contract of 100 shares.
        let l = leg(OptionType::Put, Side::Short, 170.0, 3.0, 100);
        assert_eq!(leg_payoff(&l, 175.0), 300.0);
        assert_eq!(leg_payoff(&l, 165.0), -200.0);
    }

    #[test]
    fn payoff_at_zero_price() {
        let l = leg(OptionType::Put, Side::Long, 100.0, 5.0, 1);
        assert_eq!(leg_payoff(&l, 0.0), 95.0);
    }

    // --- strategy_payoff ---

    #[test]
    fn empty_strategy_is_flat() {
        assert_eq!(strategy_payoff(&[], 123.0), 0.0);
    }

    #[test]
    fn bull_call_spread_payoff_at_key_prices() {
        let legs = vec![
            leg(OptionType::Call, Side::Long, 100.0, 5.0, 1),
            leg(OptionType::Call, Side::Short, 110.0, 2.0, 1),
        ];
        assert_eq!(strategy_payoff(&legs, 90.0), -3.0);
        assert_eq!(strategy_payoff(&legs, 110.0), 7.0);
        assert_eq!(strategy_payoff(&legs, 150.0), 7.0);
    }

    // --- net_premium ---

    #[test]
    fn single_short_leg_is_credit() {
        let legs = vec![leg(OptionType::Put, Side::Short, 100.0, 4.0, 2)];
        assert_eq!(net_premium(&legs), 8.0);
    }

    #[test]
    fn single_long_leg_is_debit() {
        let legs = vec![leg(OptionType::Call, Side::Long, 100.0, 5.0, 1)];
        assert_eq!(net_premium(&legs), -5.0);
    }

    #[test]
    fn bull_call_spread_net_debit() {
        let legs = vec![
            leg(OptionType::Call, Side::Long, 100.0, 5.0, 1),
            leg(OptionType::Call, Side::Short, 110.0, 2.0, 1),
        ];
        assert_eq!(net_premium(&legs), -3.0);
    }

    #[test]
    fn empty_strategy_has_zero_premium() {
        assert_eq!(net_premium(&[]), 0.0);
    }

    // --- leg_breakeven ---

    #[test]
    fn call_breakeven_is_strike_plus_premium() {
        let l = leg(OptionType::Call, Side::Long, 100.0, 5.0, 1);
        assert_eq!(leg_breakeven(&l), 105.0);
    }

    #[test]
    fn put_breakeven_is_strike_minus_premium() {
        let l = leg(OptionType::Put, Side::Short, 170.0, 3.0, 100);
        assert_eq!(leg_breakeven(&l), 167.0);
    }

    #[test]
    fn put_breakeven_floors_at_zero() {
        let l = leg(OptionType::Put, Side::Long, 2.0, 5.0, 1);
        assert_eq!(leg_breakeven(&l), 0.0);
    }
}
