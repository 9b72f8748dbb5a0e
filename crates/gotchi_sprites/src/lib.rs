//! Core sprite-generation pipeline for gotchi collections.
//!
//! Turns a subject (an id plus a bag of `{trait_type, value}` attributes)
//! into a single flattened PNG: attributes are normalized, matched against
//! an ordered list of configuration rules, resolved into the canonical
//! layer-slot order, located in the on-disk trait library, and composited
//! bottom-to-top onto a transparent canvas.
//!
//! The single entry point consumed by orchestration layers is
//! [`generate_sprite`]; everything per-subject degrades to a reported
//! [`GenerationResult`], never a panic or a batch-fatal error.

pub mod alias;
pub mod attributes;
pub mod compositor;
pub mod config;
pub mod error;
pub mod locator;
pub mod manifest;
pub mod matcher;
pub mod resolver;
pub mod slots;

pub use alias::map_collateral_alias;
pub use attributes::{normalize_attributes, Attribute, Gotchi};
pub use compositor::{generate_sprite, GenerationResult};
pub use config::{Condition, ConditionSet, Config, ConfigSettings, SlotProperty};
pub use error::SpriteError;
pub use locator::locate_asset;
pub use manifest::{write_manifest, ManifestEntry};
pub use matcher::{find_matching_rule, match_condition};
pub use resolver::{resolve_layers, LayerCandidate};
pub use slots::Slot;
