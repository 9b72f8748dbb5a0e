/// One position in the canonical compositing order.
///
/// Declaration order is z-order: earlier slots are drawn first and end up
/// underneath later ones. Layer z-order always follows this order, never
/// the order of a subject's attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    BaseBody,
    EyeShape,
    EyeColor,
    BodyWearable,
    FaceWearable,
    EyesWearable,
    HeadWearable,
    LeftHandWearable,
    RightHandWearable,
    PetWearable,
}

/// Property key shared by both derived hand slots.
pub const HANDS_TRAIT: &str = "Wearable (Hands)";

impl Slot {
    /// All slots, bottom layer first.
    pub const ORDER: [Slot; 10] = [
        Slot::BaseBody,
        Slot::EyeShape,
        Slot::EyeColor,
        Slot::BodyWearable,
        Slot::FaceWearable,
        Slot::EyesWearable,
        Slot::HeadWearable,
        Slot::LeftHandWearable,
        Slot::RightHandWearable,
        Slot::PetWearable,
    ];

    /// The slot's display name, also the asset folder segment for the
    /// derived hand slots.
    pub fn name(self) -> &'static str {
        match self {
            Slot::BaseBody => "Base Body",
            Slot::EyeShape => "Eye Shape",
            Slot::EyeColor => "Eye Color",
            Slot::BodyWearable => "Wearable (Body)",
            Slot::FaceWearable => "Wearable (Face)",
            Slot::EyesWearable => "Wearable (Eyes)",
            Slot::HeadWearable => "Wearable (Head)",
            Slot::LeftHandWearable => "Wearable (Hands) L",
            Slot::RightHandWearable => "Wearable (Hands) R",
            Slot::PetWearable => "Wearable (Pet)",
        }
    }

    /// The trait-type key used to look up the matched rule's property.
    ///
    /// Both hand slots share the `"Wearable (Hands)"` key; every other
    /// slot's key is its own name.
    pub fn trait_key(self) -> &'static str {
        match self {
            Slot::LeftHandWearable | Slot::RightHandWearable => HANDS_TRAIT,
            other => other.name(),
        }
    }

    pub fn is_hand(self) -> bool {
        matches!(self, Slot::LeftHandWearable | Slot::RightHandWearable)
    }
}
