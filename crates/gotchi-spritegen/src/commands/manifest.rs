use camino::Utf8PathBuf;
use colored::Colorize;
use miette::Result;

#[derive(Debug)]
pub struct WriteManifestArgs {
    pub output_dir: String,
}

/// Rebuild the `list.json` manifest from an existing output directory
/// without regenerating any sprites.
pub fn write_sprite_manifest(args: WriteManifestArgs) -> Result<()> {
    let output_dir = Utf8PathBuf::from(&args.output_dir);

    if !output_dir.is_dir() {
        return Err(miette::miette!(
            "Output directory not found: {}\n\nGenerate sprites first, or pass --output-dir.",
            output_dir
        ));
    }

    let entries = gotchi_sprites::write_manifest(&output_dir)
        .map_err(|e| miette::miette!("Failed to write sprite list: {}", e))?;

    println!(
        "{} {} {}",
        "📜 Sprite list written to:".bright_blue().bold(),
        output_dir.join("list.json").as_str().bright_white().bold(),
        format!("({} entries)", entries.len()).dimmed()
    );

    Ok(())
}
