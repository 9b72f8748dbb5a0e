mod generate;
mod manifest;

pub use generate::{generate_sprites, GenerateSpritesArgs};
pub use manifest::{write_sprite_manifest, WriteManifestArgs};
