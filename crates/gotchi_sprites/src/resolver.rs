use crate::attributes::Attribute;
use crate::config::{ConditionSet, SlotProperty};
use crate::slots::{Slot, HANDS_TRAIT};

/// A slot resolved to a concrete asset lookup: which folder to search and
/// which trait value to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerCandidate {
    pub slot: Slot,
    pub folder: String,
    pub value: String,
}

impl LayerCandidate {
    /// Human-readable label recorded in `layers_used` when the candidate
    /// composites successfully. Hand slots label with the derived slot
    /// name rather than the shared `"Wearable (Hands)"` trait type.
    pub fn label(&self) -> String {
        format!("{}: {}", self.slot.name(), self.value)
    }
}

/// Map the canonical slot order to concrete `(folder, value)` lookups for
/// one subject under its matched rule.
///
/// Non-hand slots take the rule's property keyed by the slot's trait type
/// and every attribute of that type (normally exactly one). The two hand
/// slots both derive from the `"Wearable (Hands)"` property: hand
/// attributes are partitioned by declaration order, first to the left
/// hand and second to the right; a lone hand wearable goes to the right
/// hand only, and anything past the second is ignored. Slots with no
/// property or no matching attribute are skipped, not errors.
pub fn resolve_layers(attributes: &[Attribute], rule: &ConditionSet) -> Vec<LayerCandidate> {
    let hand_values: Vec<&str> = attributes
        .iter()
        .filter(|attr| attr.trait_type == HANDS_TRAIT)
        .map(|attr| attr.value.as_str())
        .collect();

    let mut candidates = Vec::new();

    for slot in Slot::ORDER {
        let Some(prop) = find_property(rule, slot.trait_key()) else {
            continue;
        };

        if slot.is_hand() {
            if let Some(value) = hand_value(slot, &hand_values) {
                candidates.push(LayerCandidate {
                    slot,
                    folder: hand_folder(&prop.folder, slot),
                    value: value.to_string(),
                });
            }
        } else {
            for attr in attributes
                .iter()
                .filter(|attr| attr.trait_type == slot.trait_key())
            {
                candidates.push(LayerCandidate {
                    slot,
                    folder: prop.folder.clone(),
                    value: attr.value.clone(),
                });
            }
        }
    }

    candidates
}

fn find_property<'a>(rule: &'a ConditionSet, key: &str) -> Option<&'a SlotProperty> {
    rule.properties.iter().find(|prop| prop.key == key)
}

fn hand_value<'a>(slot: Slot, hand_values: &[&'a str]) -> Option<&'a str> {
    match slot {
        Slot::LeftHandWearable => match hand_values.len() {
            // A lone hand wearable defaults to the right hand
            0 | 1 => None,
            _ => Some(hand_values[0]),
        },
        Slot::RightHandWearable => match hand_values.len() {
            0 => None,
            1 => Some(hand_values[0]),
            _ => Some(hand_values[1]),
        },
        _ => None,
    }
}

/// Replace the final segment of the shared hands folder with the concrete
/// hand-slot directory name.
fn hand_folder(base_folder: &str, slot: Slot) -> String {
    let mut parts: Vec<&str> = base_folder.split('/').collect();
    if let Some(last) = parts.last_mut() {
        *last = slot.name();
    }
    parts.join("/")
}
