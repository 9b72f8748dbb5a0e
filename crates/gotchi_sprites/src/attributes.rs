use serde::{Deserialize, Serialize};

/// A single `(trait_type, value)` pair describing one cosmetic or
/// structural feature of a subject.
///
/// A subject may carry several attributes with the same `trait_type`;
/// only the hand-wearable slots give duplicates positional meaning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// A subject to be rendered as one composite sprite.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Gotchi {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collateral: Option<String>,
    pub attributes: Vec<Attribute>,
}

const PET_TRAIT: &str = "Wearable (Pet)";
const BODY_TRAIT: &str = "Wearable (Body)";
const FOXY_TAIL: &str = "Foxy Tail";

/// Repair mis-slotted attributes before rule evaluation.
///
/// Upstream data occasionally records the `Foxy Tail` pet cosmetic under
/// the body-wearable trait. A `{Wearable (Body), Foxy Tail}` attribute is
/// rewritten to `{Wearable (Pet), Foxy Tail}`, unless the subject already
/// has a pet (a non-empty `Wearable (Pet)` attribute anywhere in the list,
/// or an earlier occurrence of this same rewrite), in which case it is
/// dropped entirely. All other attributes pass through unchanged in their
/// original relative order.
///
/// Idempotent: a normalized list normalizes to itself.
pub fn normalize_attributes(attributes: &[Attribute]) -> Vec<Attribute> {
    let mut has_pet = attributes
        .iter()
        .any(|attr| attr.trait_type == PET_TRAIT && !attr.value.trim().is_empty());

    let mut normalized = Vec::with_capacity(attributes.len());
    for attr in attributes {
        if attr.trait_type == BODY_TRAIT && attr.value == FOXY_TAIL {
            if has_pet {
                continue;
            }
            normalized.push(Attribute::new(PET_TRAIT, FOXY_TAIL));
            has_pet = true;
            continue;
        }
        normalized.push(attr.clone());
    }

    normalized
}
