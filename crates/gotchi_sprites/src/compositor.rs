use camino::Utf8Path;
use image::{imageops, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::attributes::{normalize_attributes, Gotchi};
use crate::config::Config;
use crate::locator::locate_asset;
use crate::matcher::find_matching_rule;
use crate::resolver::{resolve_layers, LayerCandidate};

/// Structured outcome of generating one subject's sprite.
///
/// Serializes camelCase so the orchestration layer's failure logs keep
/// their established JSON shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub layers_used: Vec<String>,
    #[serde(default)]
    pub missing_images: Vec<String>,
    #[serde(default)]
    pub load_errors: Vec<String>,
}

impl GenerationResult {
    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            layers_used: Vec::new(),
            missing_images: Vec::new(),
            load_errors: Vec::new(),
        }
    }
}

/// Outcome of loading one resolved layer. Misses and decode failures are
/// collected as diagnostics, never raised; a single bad slot must not
/// abort the subject's pipeline.
enum LayerOutcome {
    Loaded(RgbaImage),
    Missing,
    LoadError(String),
}

fn load_layer(base_path: &Utf8Path, candidate: &LayerCandidate) -> LayerOutcome {
    match locate_asset(base_path, &candidate.folder, &candidate.value) {
        Some(path) => match image::open(path.as_std_path()) {
            Ok(img) => LayerOutcome::Loaded(img.to_rgba8()),
            Err(err) => LayerOutcome::LoadError(err.to_string()),
        },
        None => LayerOutcome::Missing,
    }
}

/// Generate one subject's composite sprite.
///
/// Normalizes the subject's attributes, selects the first matching
/// configuration rule, resolves the canonical slot order into asset
/// lookups, and composites every loadable layer bottom-to-top onto a
/// transparent canvas sized from the first successfully decoded layer.
/// The result is written to `<output_dir>/<id>.png`.
///
/// Per-slot misses and decode failures are recorded in the result's
/// diagnostic lists and do not fail the subject; only a missing rule,
/// zero composited layers, or a write failure do. This function never
/// fails the surrounding batch.
pub fn generate_sprite(
    gotchi: &Gotchi,
    config: &Config,
    base_path: &Utf8Path,
    output_dir: &Utf8Path,
    verbose: bool,
) -> GenerationResult {
    let attributes = normalize_attributes(&gotchi.attributes);

    let Some(rule) = find_matching_rule(&attributes, config) else {
        let mut result = GenerationResult::failure("No matching configuration found");
        // Attach the normalized attributes for diagnosis
        result.layers_used = attributes
            .iter()
            .map(|attr| format!("{}: {}", attr.trait_type, attr.value))
            .collect();
        return result;
    };

    let mut canvas: Option<RgbaImage> = None;
    let mut layer_buffers: Vec<RgbaImage> = Vec::new();
    let mut layers_used = Vec::new();
    let mut missing_images = Vec::new();
    let mut load_errors = Vec::new();

    for candidate in resolve_layers(&attributes, rule) {
        match load_layer(base_path, &candidate) {
            LayerOutcome::Loaded(layer) => {
                if canvas.is_none() {
                    canvas = Some(RgbaImage::from_pixel(
                        layer.width(),
                        layer.height(),
                        Rgba([0, 0, 0, 0]),
                    ));
                }
                let label = candidate.label();
                if verbose {
                    println!("    Found and added: {label}");
                }
                layer_buffers.push(layer);
                layers_used.push(label);
            }
            LayerOutcome::Missing => {
                // A blank trait value is a legitimately empty slot
                if !candidate.value.is_empty() {
                    let entry = format!(
                        "{}/{} in {}",
                        candidate.slot.name(),
                        candidate.value,
                        candidate.folder
                    );
                    if verbose {
                        println!("    Missing image: {entry}");
                    }
                    missing_images.push(entry);
                }
            }
            LayerOutcome::LoadError(message) => {
                let entry = format!("{}/{}: {}", candidate.slot.name(), candidate.value, message);
                if verbose {
                    println!("    Error loading: {entry}");
                }
                load_errors.push(entry);
            }
        }
    }

    let Some(mut canvas) = canvas else {
        let mut result = GenerationResult::failure("No layers found to composite");
        result.missing_images = missing_images;
        result.load_errors = load_errors;
        return result;
    };

    // Flatten bottom-to-top; the layer art is pre-aligned full-canvas
    for layer in &layer_buffers {
        imageops::overlay(&mut canvas, layer, 0, 0);
    }

    let output_path = output_dir.join(format!("{}.png", gotchi.id));
    match canvas.save(output_path.as_std_path()) {
        Ok(()) => GenerationResult {
            success: true,
            error: None,
            layers_used,
            missing_images,
            load_errors,
        },
        Err(err) => GenerationResult {
            success: false,
            error: Some(format!("Failed to save spritesheet: {err}")),
            layers_used,
            missing_images,
            load_errors,
        },
    }
}
