use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::payoff::strategy_payoff;
use super::types::{OptionLeg, OptionType, Strategy};

/// A payoff extreme. `Unlimited` means the payoff grows without bound as the
/// underlying rises; the downside is always bounded because price stops at 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum PayoffBound {
    Finite(f64),
    Unlimited,
}

impl PayoffBound {
    pub fn finite(self) -> Option<f64> {
        match self {
            PayoffBound::Finite(v) => Some(v),
            PayoffBound::Unlimited => None,
        }
    }
}

impl fmt::Display for PayoffBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffBound::Finite(v) => f.pad(&format!("{v:.2}")),
            PayoffBound::Unlimited => f.pad("unlimited"),
        }
    }
}

/// Slope of the aggregate payoff above the highest strike. Only calls carry
/// slope out there; puts are all flat once every strike is below the price.
fn upside_slope(legs: &[OptionLeg]) -> f64 {
    legs.iter()
        .filter(|l| l.option_type == OptionType::Call)
        .map(|l| l.side.multiplier() * f64::from(l.quantity))
        .sum()
}

/// Candidate prices where extrema can occur. The payoff is piecewise-linear
/// with breakpoints exactly at the strikes, so evaluating every strike plus
/// 0 and the chart bounds is exact over [0, highest strike] and the tail is
/// handled by `upside_slope`.
fn candidate_prices(strategy: &Strategy) -> Vec<f64> {
    let mut prices = vec![
        OrderedFloat(0.0),
        OrderedFloat(strategy.price_range.min),
        OrderedFloat(strategy.price_range.max),
    ];
    prices.extend(strategy.legs.iter().map(|l| OrderedFloat(l.strike)));
    prices.sort_unstable();
    prices.dedup();
    prices.into_iter().map(OrderedFloat::into_inner).collect()
}

/// Maximum profit and maximum loss of the strategy, signed: a loss is a
/// negative payoff. Exact over all prices in [0, ∞), not just the chart
/// window. Zero legs yield a flat (0, 0).
pub fn max_profit_loss(strategy: &Strategy) -> (PayoffBound, PayoffBound) {
    let payoffs: Vec<f64> = candidate_prices(strategy)
        .iter()
        .map(|&p| strategy_payoff(&strategy.legs, p))
        .collect();
    let best = payoffs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let worst = payoffs.iter().copied().fold(f64::INFINITY, f64::min);

    let slope = upside_slope(&strategy.legs);
    let max_profit = if slope > 0.0 {
        PayoffBound::Unlimited
    } else {
        PayoffBound::Finite(best)
    };
    let max_loss = if slope < 0.0 {
        PayoffBound::Unlimited
    } else {
        PayoffBound::Finite(worst)
    };
    (max_profit, max_loss)
}

/// Prices where the aggregate payoff crosses zero, ascending. Exact: zeros
/// at breakpoints are taken as-is, crossings between breakpoints are linear
/// interpolations, and a crossing on the open tail above the highest strike
/// is solved from the tail slope.
pub fn breakevens(legs: &[OptionLeg]) -> Vec<f64> {
    if legs.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![OrderedFloat(0.0)];
    nodes.extend(legs.iter().map(|l| OrderedFloat(l.strike)));
    nodes.sort_unstable();
    nodes.dedup();

    let xs: Vec<f64> = nodes.into_iter().map(OrderedFloat::into_inner).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| strategy_payoff(legs, x)).collect();

    let mut crossings = Vec::new();
    for i in 0..xs.len() {
        if ys[i] == 0.0 {
            crossings.push(xs[i]);
        }
        if i + 1 < xs.len() && ys[i] * ys[i + 1] < 0.0 {
            let t = -ys[i] / (ys[i + 1] - ys[i]);
            crossings.push(xs[i] + (xs[i + 1] - xs[i]) * t);
        }
    }

    let slope = upside_slope(legs);
    let last_x = xs[xs.len() - 1];
    let last_y = ys[ys.len() - 1];
    if slope != 0.0 && last_y != 0.0 && (last_y < 0.0) == (slope > 0.0) {
        crossings.push(last_x - last_y / slope);
    }

    crossings
}
