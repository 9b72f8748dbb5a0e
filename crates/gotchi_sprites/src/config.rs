use serde::{Deserialize, Serialize};

/// One attribute condition inside a rule.
///
/// All `keys` must hold. A key with a non-empty `values` list is a value
/// check (any attribute of that trait type whose alias-mapped value is in
/// the list); a key with an empty `values` list is a presence check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Condition {
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

/// The asset folder to use for one trait-type key when a rule matches.
///
/// A rule holds at most one property per canonical trait-type key; the
/// `"Wearable (Hands)"` key is shared by both derived hand slots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SlotProperty {
    pub key: String,
    pub folder: String,
}

/// A candidate configuration rule: a set of ANDed conditions plus the
/// per-slot folders to use when every condition holds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionSet {
    #[serde(default)]
    pub keys_and_values: Vec<Condition>,
    #[serde(default)]
    pub properties: Vec<SlotProperty>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_key: Option<String>,
}

/// The loaded generation configuration.
///
/// Rules in `if_keys_and_values` are evaluated in declaration order and
/// the first satisfied rule wins, so rule ordering is a correctness-
/// relevant authoring concern. The remaining fields exist in real config
/// files and are parsed and retained, but only the rule list drives
/// generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub required_keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ConfigSettings>,
    #[serde(default)]
    pub if_ids: Vec<u64>,
    #[serde(default)]
    pub if_keys_and_values: Vec<ConditionSet>,
}
