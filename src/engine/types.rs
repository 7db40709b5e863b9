use garde::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Hard ceiling on legs per strategy. Adding a leg beyond this is refused
/// outright rather than reported as a validation issue.
pub const MAX_LEGS: usize = 6;

pub const DEFAULT_UNDERLYING_PRICE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Long = 1,
    Short = -1,
}

impl Side {
    pub fn multiplier(self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Side::Long => "long",
            Side::Short => "short",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        })
    }
}

fn validate_positive(value: &f64, (): &()) -> garde::Result {
    if *value > 0.0 {
        return Ok(());
    }
    Err(garde::Error::new(format!("must be positive, got {value}")))
}

fn validate_max_gt_min(min: &f64) -> impl FnOnce(&f64, &()) -> garde::Result + '_ {
    move |max: &f64, (): &()| {
        if min >= max {
            return Err(garde::Error::new(format!(
                "min ({min}) must be less than max ({max})"
            )));
        }
        Ok(())
    }
}

/// One option position within a strategy. The `id` is assigned at creation
/// and never changes; edits replace the whole leg via `Strategy::with_updated_leg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OptionLeg {
    #[garde(skip)]
    pub id: Uuid,
    #[garde(skip)]
    pub option_type: OptionType,
    #[garde(skip)]
    pub side: Side,
    #[garde(custom(validate_positive))]
    pub strike: f64,
    #[garde(range(min = 0.0))]
    pub premium: f64,
    #[garde(range(min = 1))]
    pub quantity: u32,
}

impl OptionLeg {
    pub fn new(option_type: OptionType, side: Side, strike: f64, premium: f64, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            option_type,
            side,
            strike,
            premium,
            quantity,
        }
    }
}

/// Price window used for charting. Extrema search is not limited to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct PriceRange {
    #[garde(range(min = 0.0))]
    pub min: f64,
    #[garde(custom(validate_max_gt_min(&self.min)))]
    pub max: f64,
}

impl PriceRange {
    /// Default charting window: 50%–150% of the underlying price.
    pub fn auto(underlying_price: f64) -> Self {
        Self {
            min: underlying_price * 0.5,
            max: underlying_price * 1.5,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("strategy already has the maximum of {max} legs")]
    LegLimitReached { max: usize },
    #[error("no leg with id {id}")]
    UnknownLeg { id: Uuid },
}

/// An immutable strategy value. State transitions return a new `Strategy`
/// instead of mutating, so every computation pass reads a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Strategy {
    #[garde(skip)]
    pub name: String,
    #[garde(custom(validate_positive))]
    pub underlying_price: f64,
    #[garde(length(max = 6), dive)]
    pub legs: Vec<OptionLeg>,
    #[garde(dive)]
    pub price_range: PriceRange,
}

impl Strategy {
    pub fn new(name: impl Into<String>, underlying_price: f64) -> Self {
        Self {
            name: name.into(),
            underlying_price,
            legs: Vec::new(),
            price_range: PriceRange::auto(underlying_price),
        }
    }

    /// Appends a leg. Refuses outright once `MAX_LEGS` is reached.
    pub fn with_leg(&self, leg: OptionLeg) -> Result<Self, StrategyError> {
        if self.legs.len() >= MAX_LEGS {
            return Err(StrategyError::LegLimitReached { max: MAX_LEGS });
        }
        let mut next = self.clone();
        next.legs.push(leg);
        Ok(next)
    }

    /// Removes the leg with the given id, keeping insertion order of the rest.
    pub fn without_leg(&self, id: Uuid) -> Result<Self, StrategyError> {
        if !self.legs.iter().any(|l| l.id == id) {
            return Err(StrategyError::UnknownLeg { id });
        }
        let mut next = self.clone();
        next.legs.retain(|l| l.id != id);
        Ok(next)
    }

    /// Replaces the leg sharing `leg.id` in place.
    pub fn with_updated_leg(&self, leg: OptionLeg) -> Result<Self, StrategyError> {
        let Some(index) = self.legs.iter().position(|l| l.id == leg.id) else {
            return Err(StrategyError::UnknownLeg { id: leg.id });
        };
        let mut next = self.clone();
        next.legs[index] = leg;
        Ok(next)
    }

    pub fn renamed(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.name = name.into();
        next
    }

    /// Updates the underlying price and re-derives the auto chart window.
    /// Apply `with_price_range` afterwards to keep an explicit window.
    pub fn with_underlying_price(&self, underlying_price: f64) -> Self {
        let mut next = self.clone();
        next.underlying_price = underlying_price;
        next.price_range = PriceRange::auto(underlying_price);
        next
    }

    pub fn with_price_range(&self, price_range: PriceRange) -> Self {
        let mut next = self.clone();
        next.price_range = price_range;
        next
    }

    /// Back to the initial empty state.
    pub fn reset(&self) -> Self {
        Self::default()
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new("New strategy", DEFAULT_UNDERLYING_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg() -> OptionLeg {
        OptionLeg::new(OptionType::Call, Side::Long, 100.0, 5.0, 1)
    }

    #[test]
    fn side_multiplier_long() {
        assert!((Side::Long.multiplier() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn side_multiplier_short() {
        assert!((Side::Short.multiplier() - (-1.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_price_range_brackets_spot() {
        let range = PriceRange::auto(200.0);
        assert_eq!(range.min, 100.0);
        assert_eq!(range.max, 300.0);
    }

    #[test]
    fn with_leg_appends_in_order() {
        let s = Strategy::default().with_leg(leg()).unwrap();
        let second = OptionLeg::new(OptionType::Put, Side::Short, 90.0, 2.0, 1);
        let s = s.with_leg(second.clone()).unwrap();
        assert_eq!(s.legs.len(), 2);
        assert_eq!(s.legs[1], second);
    }

    #[test]
    fn with_leg_refuses_seventh() {
        let mut s = Strategy::default();
        for _ in 0..MAX_LEGS {
            s = s.with_leg(leg()).unwrap();
        }
        assert_eq!(
            s.with_leg(leg()),
            Err(StrategyError::LegLimitReached { max: MAX_LEGS })
        );
    }

    #[test]
    fn without_leg_removes_only_target() {
        let first = leg();
        let second = leg();
        let s = Strategy::default()
            .with_leg(first.clone())
            .unwrap()
            .with_leg(second.clone())
            .unwrap();
        let s = s.without_leg(first.id).unwrap();
        assert_eq!(s.legs, vec![second]);
    }

    #[test]
    fn without_leg_unknown_id() {
        let s = Strategy::default();
        let id = Uuid::new_v4();
        assert_eq!(s.without_leg(id), Err(StrategyError::UnknownLeg { id }));
    }

    #[test]
    fn with_updated_leg_replaces_in_place() {
        let original = leg();
        let s = Strategy::default().with_leg(original.clone()).unwrap();
        let mut edited = original.clone();
        edited.strike = 110.0;
        let s = s.with_updated_leg(edited.clone()).unwrap();
        assert_eq!(s.legs, vec![edited]);
    }

    #[test]
    fn with_updated_leg_unknown_id() {
        let s = Strategy::default();
        let stray = leg();
        assert_eq!(
            s.with_updated_leg(stray.clone()),
            Err(StrategyError::UnknownLeg { id: stray.id })
        );
    }

    #[test]
    fn with_underlying_price_rederives_range() {
        let s = Strategy::default().with_underlying_price(50.0);
        assert_eq!(s.price_range, PriceRange::auto(50.0));
    }

    #[test]
    fn reset_returns_to_empty_default() {
        let s = Strategy::new("condor", 250.0).with_leg(leg()).unwrap();
        assert_eq!(s.reset(), Strategy::default());
    }

    // --- Validation rules ---

    #[test]
    fn leg_valid() {
        assert!(leg().validate().is_ok());
    }

    #[test]
    fn leg_rejects_zero_strike() {
        let mut l = leg();
        l.strike = 0.0;
        assert!(l.validate().is_err());
    }

    #[test]
    fn leg_rejects_negative_premium() {
        let mut l = leg();
        l.premium = -1.0;
        assert!(l.validate().is_err());
    }

    #[test]
    fn leg_accepts_zero_premium() {
        let mut l = leg();
        l.premium = 0.0;
        assert!(l.validate().is_ok());
    }

    #[test]
    fn leg_rejects_zero_quantity() {
        let mut l = leg();
        l.quantity = 0;
        assert!(l.validate().is_err());
    }

    #[test]
    fn price_range_rejects_inverted() {
        let range = PriceRange { min: 150.0, max: 50.0 };
        assert!(range.validate().is_err());
    }

    #[test]
    fn price_range_rejects_negative_min() {
        let range = PriceRange { min: -1.0, max: 50.0 };
        assert!(range.validate().is_err());
    }

    #[test]
    fn strategy_rejects_more_than_max_legs() {
        let mut s = Strategy::default();
        s.legs = (0..=MAX_LEGS).map(|_| leg()).collect();
        assert!(s.validate().is_err());
    }

    #[test]
    fn strategy_rejects_zero_underlying_price() {
        let mut s = Strategy::default();
        s.underlying_price = 0.0;
        assert!(s.validate().is_err());
    }
}
