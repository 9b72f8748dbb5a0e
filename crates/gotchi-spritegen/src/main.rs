use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    generate_sprites, write_sprite_manifest, GenerateSpritesArgs, WriteManifestArgs,
};
use miette::Result;

mod commands;
mod errors;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate composite sprites for a collection of gotchis
    Generate {
        /// The path to the gotchi JSON file
        input: String,

        /// The path to the generation config file
        #[arg(short, long, default_value = "config.json")]
        config_path: String,

        /// The root of the trait asset library
        #[arg(long, default_value = ".")]
        base_path: String,

        /// The directory to write sprites and the manifest to
        #[arg(short, long, default_value = "website/spritesheets")]
        output_dir: String,

        /// Process only the first n gotchis
        #[arg(long)]
        limit: Option<usize>,

        /// Process only specific ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<u64>>,

        /// Start processing from this index
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Number of gotchis to process in parallel per batch
        #[arg(short, long, default_value_t = 10)]
        batch: usize,

        /// Show detailed layer information
        #[arg(short, long)]
        verbose: bool,
    },
    /// Rebuild the list.json manifest from an output directory
    Manifest {
        /// The directory containing the generated sprites
        #[arg(short, long, default_value = "website/spritesheets")]
        output_dir: String,
    },
}

fn parse_args() -> Args {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn main() -> Result<()> {
    let args = parse_args();

    match args.command {
        Commands::Generate {
            input,
            config_path,
            base_path,
            output_dir,
            limit,
            ids,
            start,
            batch,
            verbose,
        } => generate_sprites(GenerateSpritesArgs {
            input,
            config_path,
            base_path,
            output_dir,
            limit,
            ids,
            start,
            batch,
            verbose,
        }),
        Commands::Manifest { output_dir } => write_sprite_manifest(WriteManifestArgs { output_dir }),
    }
}
