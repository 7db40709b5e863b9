use ordered_float::OrderedFloat;
use serde::Serialize;

use super::payoff::strategy_payoff;
use super::types::Strategy;

pub const MAX_CHART_POINTS: usize = 200;
pub const DEFAULT_CHART_POINTS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub price: f64,
    pub payoff: f64,
}

/// Profit/loss series over the chart window. Evenly spaced samples merged
/// with the strikes inside the window, so the kinks of the piecewise-linear
/// payoff land exactly on chart points instead of between them.
pub fn payoff_curve(strategy: &Strategy, points: usize) -> Vec<ChartPoint> {
    let n = points.clamp(2, MAX_CHART_POINTS);
    let min = strategy.price_range.min;
    let max = strategy.price_range.max;
    let step = (max - min) / (n - 1) as f64;

    // Pin the last sample to max; accumulating steps drifts by an ulp.
    let mut prices: Vec<OrderedFloat<f64>> = (0..n)
        .map(|i| {
            if i == n - 1 {
                OrderedFloat(max)
            } else {
                OrderedFloat(min + step * i as f64)
            }
        })
        .collect();
    prices.extend(
        strategy
            .legs
            .iter()
            .filter(|l| l.strike > min && l.strike < max)
            .map(|l| OrderedFloat(l.strike)),
    );
    prices.sort_unstable();
    prices.dedup();

    prices
        .into_iter()
        .map(|p| {
            let price = p.into_inner();
            ChartPoint {
                price,
                payoff: strategy_payoff(&strategy.legs, price),
            }
        })
        .collect()
}
