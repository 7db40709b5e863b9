pub mod helpers;
pub mod iron;
pub mod singles;
pub mod spreads;

use self::helpers::PresetDef;

pub fn all_presets() -> Vec<PresetDef> {
    let mut presets = Vec::new();
    presets.extend(singles::all());
    presets.extend(spreads::all());
    presets.extend(iron::all());
    presets
}

pub fn find_preset(name: &str) -> Option<PresetDef> {
    all_presets().into_iter().find(|p| p.name == name)
}
