use serde::Serialize;
use std::fmt;

use super::extrema::{breakevens, max_profit_loss, PayoffBound};
use super::payoff::net_premium;
use super::types::Strategy;

/// Cash-flow direction at entry, derived from the net premium sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Credit,
    Debit,
    Even,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            EntryKind::Credit => "credit",
            EntryKind::Debit => "debit",
            EntryKind::Even => "even",
        })
    }
}

/// The headline figures shown next to the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySummary {
    pub net_premium: f64,
    pub entry: EntryKind,
    pub max_profit: PayoffBound,
    pub max_loss: PayoffBound,
    pub breakevens: Vec<f64>,
}

pub fn summarize(strategy: &Strategy) -> StrategySummary {
    let net_premium = net_premium(&strategy.legs);
    let entry = if net_premium > 0.0 {
        EntryKind::Credit
    } else if net_premium < 0.0 {
        EntryKind::Debit
    } else {
        EntryKind::Even
    };
    let (max_profit, max_loss) = max_profit_loss(strategy);
    StrategySummary {
        net_premium,
        entry,
        max_profit,
        max_loss,
        breakevens: breakevens(&strategy.legs),
    }
}
