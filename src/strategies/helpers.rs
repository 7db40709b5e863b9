pub use crate::engine::types::{OptionType, Side, Strategy};

use crate::engine::types::OptionLeg;

/// A leg blueprint: the strike is expressed as a percentage offset from the
/// underlying price, so a preset works at any spot level.
#[derive(Debug, Clone)]
pub struct LegTemplate {
    pub side: Side,
    pub option_type: OptionType,
    pub strike_offset_pct: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct PresetDef {
    pub name: String,
    pub category: String,
    pub description: String,
    pub legs: Vec<LegTemplate>,
}

impl PresetDef {
    /// Concrete strategy at the given spot. Premiums start at zero as
    /// placeholders for the user to fill in from quotes.
    pub fn instantiate(&self, underlying_price: f64) -> Strategy {
        let mut strategy = Strategy::new(self.name.clone(), underlying_price);
        strategy.legs = self
            .legs
            .iter()
            .map(|t| {
                let strike = round_cents(underlying_price * (1.0 + t.strike_offset_pct / 100.0));
                OptionLeg::new(t.option_type, t.side, strike, 0.0, t.quantity)
            })
            .collect();
        strategy
    }
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn leg(side: Side, option_type: OptionType, strike_offset_pct: f64, quantity: u32) -> LegTemplate {
    LegTemplate {
        side,
        option_type,
        strike_offset_pct,
        quantity,
    }
}

pub fn call_leg(side: Side, strike_offset_pct: f64) -> LegTemplate {
    leg(side, OptionType::Call, strike_offset_pct, 1)
}

pub fn put_leg(side: Side, strike_offset_pct: f64) -> LegTemplate {
    leg(side, OptionType::Put, strike_offset_pct, 1)
}

pub fn preset(name: &str, category: &str, description: &str, legs: Vec<LegTemplate>) -> PresetDef {
    PresetDef {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        legs,
    }
}
