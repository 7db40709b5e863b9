use super::helpers::*;

pub fn iron_condor() -> PresetDef {
    preset("iron_condor", "Iron", "Sell OTM put spread + sell OTM call spread", vec![
        put_leg(Side::Long, -10.0),  // buy lower put (wing)
        put_leg(Side::Short, -5.0),  // sell higher put
        call_leg(Side::Short, 5.0),  // sell lower call
        call_leg(Side::Long, 10.0),  // buy higher call (wing)
    ])
}

pub fn iron_butterfly() -> PresetDef {
    preset("iron_butterfly", "Iron", "Sell ATM straddle + buy OTM strangle", vec![
        put_leg(Side::Long, -10.0),  // buy lower put (wing)
        put_leg(Side::Short, 0.0),   // sell ATM put
        call_leg(Side::Short, 0.0),  // sell ATM call
        call_leg(Side::Long, 10.0),  // buy higher call (wing)
    ])
}

pub fn all() -> Vec<PresetDef> {
    vec![iron_condor(), iron_butterfly()]
}
