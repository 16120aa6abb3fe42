//! Fractal Walker - L-system curves drawn turtle-style
//!
//! CLI commands:
//! - gui: Launch native viewer
//! - generate: Write per-preset segment lists as JSON
//! - render: Rasterize presets to PNG
//! - list: List built-in fractals

mod config;
mod grammar;
mod gui;
mod logging;
mod player;
mod presets;
mod raster;
mod rewrite;
mod vector;
mod walk;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::grammar::Action;
use crate::presets::Preset;

#[derive(Parser)]
#[command(name = "fractal_walker")]
#[command(about = "Animated L-system fractal curves")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to fractal.yaml config
    #[arg(short, long, default_value = "fractal.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch native viewer
    Gui,

    /// Expand presets and write segment lists as JSON
    Generate {
        /// Output directory (defaults to FRACTAL_OUT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only this preset id
        #[arg(short, long)]
        fractal: Option<String>,
    },

    /// Rasterize presets to PNG
    Render {
        /// Output directory (defaults to FRACTAL_OUT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only this preset id
        #[arg(short, long)]
        fractal: Option<String>,

        /// Image width in pixels
        #[arg(long, default_value = "1600")]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "1200")]
        height: u32,
    },

    /// List built-in fractals with their expansion sizes
    List,
}

fn main() -> anyhow::Result<()> {
    let settings = config::Settings::load();
    logging::init_logging(&settings.log_dir);
    tracing::info!("Fractal Walker starting up");

    let cli = Cli::parse();
    tracing::debug!("CLI args parsed: config={:?}", cli.config);

    let config = if cli.config.exists() {
        tracing::info!("Loading config from {:?}", cli.config);
        config::Config::load(&cli.config)?
    } else {
        tracing::warn!("Config file not found: {:?}, using defaults", cli.config);
        config::Config::default()
    };

    match cli.command {
        Commands::Gui => {
            tracing::info!("Launching native viewer");
            gui::run_viewer(config)?;
        }

        Commands::Generate { output, fractal } => {
            let out = output.unwrap_or_else(|| PathBuf::from(&settings.out_dir));
            generate(&config, &out, fractal.as_deref())?;
        }

        Commands::Render {
            output,
            fractal,
            width,
            height,
        } => {
            let out = output.unwrap_or_else(|| PathBuf::from(&settings.out_dir));
            render(&config, &out, fractal.as_deref(), width, height)?;
        }

        Commands::List => {
            list_presets();
        }
    }

    Ok(())
}

/// Resolve the --fractal filter to a preset list
fn selected_presets(filter: Option<&str>) -> anyhow::Result<Vec<Preset>> {
    match filter {
        Some(id) => {
            let preset = Preset::from_id(id)
                .ok_or_else(|| anyhow::anyhow!("Unknown fractal: {}", id))?;
            Ok(vec![preset])
        }
        None => Ok(presets::all()),
    }
}

/// Write each selected preset's segments as a JSON file
fn generate(config: &config::Config, output: &Path, filter: Option<&str>) -> anyhow::Result<()> {
    std::fs::create_dir_all(output)?;

    let selected = selected_presets(filter)?;
    println!("Generating {} segment lists...", selected.len());

    for preset in selected {
        config.check_generations(preset.generations)?;
        let start = preset.start_position(config.width, config.height);
        let segments = walk::generate_segments(
            &preset.grammar,
            preset.generations,
            preset.length_ratio,
            start,
        )?;

        let path = output.join(format!("{}.json", preset.id));
        let data = serde_json::json!({
            "id": preset.id,
            "name": preset.name,
            "generations": preset.generations,
            "turn_degrees": preset.grammar.turn_degrees(),
            "segment_count": segments.len(),
            "segments": segments,
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });

        std::fs::write(&path, serde_json::to_string_pretty(&data)?)?;
        println!("  {} -> {:?} ({} segments)", preset.name, path, segments.len());
    }

    println!("Done!");
    Ok(())
}

/// Rasterize each selected preset to a PNG
fn render(
    config: &config::Config,
    output: &Path,
    filter: Option<&str>,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(output)?;

    let selected = selected_presets(filter)?;
    println!("Rendering {} images ({}x{})...", selected.len(), width, height);

    for preset in selected {
        config.check_generations(preset.generations)?;
        let start = preset.start_position(config.width, config.height);
        let segments = walk::generate_segments(
            &preset.grammar,
            preset.generations,
            preset.length_ratio,
            start,
        )?;

        let path = output.join(format!("{}.png", preset.id));
        raster::render_png(&segments, width, height).save(&path)?;
        println!("  {} -> {:?} ({} segments)", preset.name, path, segments.len());
    }

    println!("Done!");
    Ok(())
}

/// Print the preset table with expanded sizes, so the exponential growth
/// per generation is visible up front
fn list_presets() {
    let all = presets::all();
    println!("Built-in fractals ({}):", all.len());
    println!();

    for preset in all {
        let expansion = rewrite::expand(
            &preset.grammar,
            preset.generations,
            preset.length_ratio,
            walk::BASE_LENGTH,
        );
        let draws = expansion
            .symbols
            .chars()
            .filter(|&c| preset.grammar.action(c) == Some(Action::Draw))
            .count();

        println!(
            "  - {} [{}]: angle {}°, {} generations -> {} symbols, {} segments",
            preset.name,
            preset.id,
            preset.grammar.turn_degrees(),
            preset.generations,
            expansion.symbols.len(),
            draws,
        );
    }
}
