use std::fs::File;
use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use colored::Colorize;
use gotchi_sprites::{generate_sprite, Attribute, Config, GenerationResult, Gotchi};
use miette::{IntoDiagnostic, Result, WrapErr};
use rayon::prelude::*;
use serde::Serialize;

use crate::errors::CliError;

const FAILED_LOG_PATH: &str = "failed_gotchis.json";
const MISSING_LOG_PATH: &str = "missing_layers.json";

#[derive(Debug)]
pub struct GenerateSpritesArgs {
    pub input: String,
    pub config_path: String,
    pub base_path: String,
    pub output_dir: String,
    pub limit: Option<usize>,
    pub ids: Option<Vec<u64>>,
    pub start: usize,
    pub batch: usize,
    pub verbose: bool,
}

/// Per-subject entry of the failed_gotchis.json log.
#[derive(Serialize, Debug)]
struct FailedGotchi {
    id: u64,
    attributes: Vec<Attribute>,
    error: String,
    details: FailureDetails,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct FailureDetails {
    layers_used: Vec<String>,
    missing_images: Vec<String>,
    load_errors: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct MissingLayerRecord {
    gotchi_id: u64,
    missing_layer: String,
    attributes: Vec<Attribute>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MissingLayerSummary {
    layer: String,
    count: usize,
    gotchi_ids: Vec<u64>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MissingLayersLog {
    total_missing: usize,
    unique_missing_layers: usize,
    summary: Vec<MissingLayerSummary>,
    detailed: Vec<MissingLayerRecord>,
}

pub fn generate_sprites(args: GenerateSpritesArgs) -> Result<()> {
    let config_path = Path::new(&args.config_path);
    if !Path::new(&args.input).exists() {
        return Err(CliError::input_not_found(PathBuf::from(&args.input)).into());
    }
    if !config_path.exists() {
        return Err(CliError::config_not_found(config_path.to_owned()).into());
    }

    println!(
        "{} {}",
        "⚙️  Loading configuration from:".bright_blue().bold(),
        args.config_path.bright_cyan().bold()
    );
    let config = load_config(config_path)?;

    println!(
        "{} {}",
        "👻 Loading gotchis from:".bright_blue().bold(),
        args.input.bright_cyan().bold()
    );
    let gotchis = load_gotchis(Path::new(&args.input))?;
    let gotchis = filter_gotchis(gotchis, &args);

    let output_dir = Utf8PathBuf::from(&args.output_dir);
    if !output_dir.exists() {
        println!(
            "{} {}",
            "📁 Creating output directory:".bright_yellow(),
            output_dir.as_str().bright_white().bold()
        );
        std::fs::create_dir_all(&output_dir).map_err(|source| {
            CliError::output_dir_creation_failed(output_dir.clone().into_std_path_buf(), source)
        })?;
    }

    let base_path = Utf8PathBuf::from(&args.base_path);
    let batch_size = args.batch.max(1);
    let total = gotchis.len();
    let total_batches = total.div_ceil(batch_size);

    println!(
        "{} {} {}",
        "🎨 Processing".bright_blue().bold(),
        total.to_string().bright_cyan().bold(),
        format!("gotchis in batches of {batch_size}...").bright_blue()
    );

    let mut success_count = 0usize;
    let mut failed_gotchis: Vec<FailedGotchi> = Vec::new();
    let mut all_missing_layers: Vec<MissingLayerRecord> = Vec::new();

    for (batch_index, batch) in gotchis.chunks(batch_size).enumerate() {
        println!(
            "\n{}",
            format!(
                "Processing batch {}/{} ({} gotchis)...",
                batch_index + 1,
                total_batches,
                batch.len()
            )
            .bright_magenta()
        );

        let batch_offset = batch_index * batch_size;
        let results: Vec<(&Gotchi, GenerationResult)> = batch
            .par_iter()
            .enumerate()
            .map(|(index, gotchi)| {
                let result =
                    generate_sprite(gotchi, &config, &base_path, &output_dir, args.verbose);
                report_subject(gotchi, &result, batch_offset + index + 1, total, args.verbose);
                (gotchi, result)
            })
            .collect();

        let mut batch_succeeded = 0usize;
        for (gotchi, result) in results {
            for missing in &result.missing_images {
                all_missing_layers.push(MissingLayerRecord {
                    gotchi_id: gotchi.id,
                    missing_layer: missing.clone(),
                    attributes: gotchi.attributes.clone(),
                });
            }

            if result.success {
                success_count += 1;
                batch_succeeded += 1;
            } else {
                failed_gotchis.push(FailedGotchi {
                    id: gotchi.id,
                    attributes: gotchi.attributes.clone(),
                    error: result
                        .error
                        .clone()
                        .unwrap_or_else(|| "Unknown error".to_string()),
                    details: FailureDetails {
                        layers_used: result.layers_used,
                        missing_images: result.missing_images,
                        load_errors: result.load_errors,
                    },
                });
            }
        }

        println!(
            "{}",
            format!(
                "Batch {} complete: {} succeeded, {} failed",
                batch_index + 1,
                batch_succeeded,
                batch.len() - batch_succeeded
            )
            .dimmed()
        );
    }

    println!(
        "\n{}\n{} {}\n{} {}\n{} {}",
        "✅ Processing complete!".bright_green().bold(),
        "Successfully generated:".bright_green(),
        format!("{success_count} sprites").bright_white().bold(),
        "Failed:".bright_red(),
        failed_gotchis.len().to_string().bright_white().bold(),
        "Output saved to:".bright_green(),
        output_dir.as_str().bright_white().bold()
    );

    write_failed_log(&failed_gotchis)?;
    write_missing_log(&all_missing_layers)?;

    match gotchi_sprites::write_manifest(&output_dir) {
        Ok(entries) => println!(
            "\n{} {} {}",
            "📜 Sprite list written to:".bright_blue(),
            output_dir.join("list.json").as_str().bright_white().bold(),
            format!("({} entries)", entries.len()).dimmed()
        ),
        // The sprites themselves are already on disk; a manifest failure
        // is worth a warning, not a failed run
        Err(err) => println!(
            "\n{} {}",
            "⚠️  Failed to write sprite list:".bright_yellow().bold(),
            err.to_string().bright_white()
        ),
    }

    Ok(())
}

fn load_config(config_path: &Path) -> Result<Config> {
    let file = File::open(config_path)
        .into_diagnostic()
        .with_context(|| format!("Failed to open config file: {}", config_path.display()))?;
    serde_json::from_reader(file)
        .into_diagnostic()
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

fn load_gotchis(input_path: &Path) -> Result<Vec<Gotchi>> {
    let file = File::open(input_path)
        .into_diagnostic()
        .with_context(|| format!("Failed to open input file: {}", input_path.display()))?;
    serde_json::from_reader(file)
        .into_diagnostic()
        .with_context(|| format!("Failed to parse input file: {}", input_path.display()))
}

fn filter_gotchis(mut gotchis: Vec<Gotchi>, args: &GenerateSpritesArgs) -> Vec<Gotchi> {
    if let Some(ids) = &args.ids {
        gotchis.retain(|gotchi| ids.contains(&gotchi.id));
        println!(
            "{}",
            format!("Filtering to {} specific gotchis", gotchis.len()).dimmed()
        );
    }

    if args.start > 0 {
        gotchis = gotchis.split_off(args.start.min(gotchis.len()));
        println!("{}", format!("Starting from index {}", args.start).dimmed());
    }

    if let Some(limit) = args.limit {
        gotchis.truncate(limit);
        println!(
            "{}",
            format!("Limiting to {} gotchis", gotchis.len()).dimmed()
        );
    }

    gotchis
}

fn report_subject(
    gotchi: &Gotchi,
    result: &GenerationResult,
    position: usize,
    total: usize,
    verbose: bool,
) {
    if !result.success {
        println!(
            "  {} {}",
            "✗".bright_red().bold(),
            format!(
                "Failed gotchi {}: {}",
                gotchi.id,
                result.error.as_deref().unwrap_or("Unknown error")
            )
            .bright_red()
        );
    } else if verbose {
        println!(
            "  {} Completed gotchi {} - Layers: {}",
            "✓".bright_green().bold(),
            gotchi.id,
            result.layers_used.join(", ")
        );
    } else {
        println!(
            "  {} Completed gotchi {} ({position}/{total})",
            "✓".bright_green().bold(),
            gotchi.id
        );
    }
}

fn write_failed_log(failed_gotchis: &[FailedGotchi]) -> Result<()> {
    if failed_gotchis.is_empty() {
        return Ok(());
    }

    let json = serde_json::to_string_pretty(failed_gotchis).into_diagnostic()?;
    std::fs::write(FAILED_LOG_PATH, json).map_err(CliError::from)?;

    println!(
        "\n{} {}",
        "📋 Failed gotchis logged to:".bright_yellow(),
        FAILED_LOG_PATH.bright_white().bold()
    );
    println!(
        "{} {}",
        "Failed IDs:".bright_yellow(),
        failed_gotchis
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
            .bright_white()
    );

    Ok(())
}

fn write_missing_log(all_missing_layers: &[MissingLayerRecord]) -> Result<()> {
    if all_missing_layers.is_empty() {
        return Ok(());
    }

    let mut summary: Vec<MissingLayerSummary> = Vec::new();
    for record in all_missing_layers {
        match summary
            .iter_mut()
            .find(|item| item.layer == record.missing_layer)
        {
            Some(item) => {
                item.count += 1;
                item.gotchi_ids.push(record.gotchi_id);
            }
            None => summary.push(MissingLayerSummary {
                layer: record.missing_layer.clone(),
                count: 1,
                gotchi_ids: vec![record.gotchi_id],
            }),
        }
    }
    summary.sort_by_key(|item| std::cmp::Reverse(item.count));

    let log = MissingLayersLog {
        total_missing: all_missing_layers.len(),
        unique_missing_layers: summary.len(),
        summary,
        detailed: all_missing_layers.to_vec(),
    };

    let json = serde_json::to_string_pretty(&log).into_diagnostic()?;
    std::fs::write(MISSING_LOG_PATH, json).map_err(CliError::from)?;

    println!(
        "\n{} {}",
        "🧩 Missing layers logged to:".bright_yellow(),
        MISSING_LOG_PATH.bright_white().bold()
    );
    println!(
        "{} {}  {} {}",
        "Total missing layer instances:".bright_yellow(),
        log.total_missing.to_string().bright_white().bold(),
        "Unique missing layers:".bright_yellow(),
        log.unique_missing_layers.to_string().bright_white().bold()
    );

    println!("\n{}", "Top missing layers:".bright_yellow().bold());
    for item in log.summary.iter().take(5) {
        println!(
            "  {} {} {}",
            "•".bright_cyan(),
            item.layer.bright_cyan(),
            format!("({} gotchis)", item.count).dimmed()
        );
    }

    Ok(())
}
