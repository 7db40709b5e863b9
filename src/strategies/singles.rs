use super::helpers::*;

pub fn long_call() -> PresetDef {
    preset("long_call", "Singles", "Buy an ATM call option", vec![
        call_leg(Side::Long, 0.0),
    ])
}

pub fn short_call() -> PresetDef {
    preset("short_call", "Singles", "Sell an ATM call option", vec![
        call_leg(Side::Short, 0.0),
    ])
}

pub fn long_put() -> PresetDef {
    preset("long_put", "Singles", "Buy an ATM put option", vec![
        put_leg(Side::Long, 0.0),
    ])
}

pub fn short_put() -> PresetDef {
    preset("short_put", "Singles", "Sell an ATM put option (cash-secured put)", vec![
        put_leg(Side::Short, 0.0),
    ])
}

pub fn all() -> Vec<PresetDef> {
    vec![long_call(), short_call(), long_put(), short_put()]
}
