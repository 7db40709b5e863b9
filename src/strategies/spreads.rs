use super::helpers::*;

// Vertical spreads
pub fn bull_call_spread() -> PresetDef {
    preset("bull_call_spread", "Spreads", "Buy lower strike call, sell higher strike call", vec![
        call_leg(Side::Long, 0.0),
        call_leg(Side::Short, 5.0),
    ])
}

pub fn bear_call_spread() -> PresetDef {
    preset("bear_call_spread", "Spreads", "Sell lower strike call, buy higher strike call", vec![
        call_leg(Side::Short, 0.0),
        call_leg(Side::Long, 5.0),
    ])
}

pub fn bull_put_spread() -> PresetDef {
    preset("bull_put_spread", "Spreads", "Sell higher strike put, buy lower strike put", vec![
        put_leg(Side::Short, 0.0),
        put_leg(Side::Long, -5.0),
    ])
}

pub fn bear_put_spread() -> PresetDef {
    preset("bear_put_spread", "Spreads", "Buy higher strike put, sell lower strike put", vec![
        put_leg(Side::Long, 0.0),
        put_leg(Side::Short, -5.0),
    ])
}

// Straddles
pub fn long_straddle() -> PresetDef {
    preset("long_straddle", "Spreads", "Buy ATM call and put at same strike", vec![
        call_leg(Side::Long, 0.0),
        put_leg(Side::Long, 0.0),
    ])
}

pub fn short_straddle() -> PresetDef {
    preset("short_straddle", "Spreads", "Sell ATM call and put at same strike", vec![
        call_leg(Side::Short, 0.0),
        put_leg(Side::Short, 0.0),
    ])
}

// Strangles
pub fn long_strangle() -> PresetDef {
    preset("long_strangle", "Spreads", "Buy OTM call and OTM put", vec![
        call_leg(Side::Long, 5.0),
        put_leg(Side::Long, -5.0),
    ])
}

pub fn short_strangle() -> PresetDef {
    preset("short_strangle", "Spreads", "Sell OTM call and OTM put", vec![
        call_leg(Side::Short, 5.0),
        put_leg(Side::Short, -5.0),
    ])
}

pub fn all() -> Vec<PresetDef> {
    vec![
        bull_call_spread(), bear_call_spread(),
        bull_put_spread(), bear_put_spread(),
        long_straddle(), short_straddle(),
        long_strangle(), short_strangle(),
    ]
}
