pub mod curve;
pub mod extrema;
pub mod payoff;
pub mod summary;
pub mod types;
pub mod validation;
