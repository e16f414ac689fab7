//! Lumen CLI
//!
//! Preview UI materials on the CPU, check their WGSL programs against the
//! binding contract, and scaffold a `lumen.toml`.

mod config;
mod preview;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use lumen_gpu::layout::{
    COLOR_TARGET_LOCATION, IMAGE_GROUP, MATERIAL_BINDING, MATERIAL_GROUP, VIEW_GROUP,
};
use lumen_gpu::{validate_material_shader, validate_vertex_shader, ShaderReport};
use lumen_shade::MaterialKind;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use config::{LumenConfig, CONFIG_FILE_NAME};

#[derive(Parser)]
#[command(name = "lumen", version, about = "Preview and check Lumen UI materials")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the configured swatches to a PNG
    Preview {
        /// Config file or directory containing lumen.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Output path (overrides preview.output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the material shaders and print the binding contract
    Check,

    /// Write a default lumen.toml
    Init {
        /// Directory to create the config in
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing lumen.toml
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Preview { config, output } => cmd_preview(&config, output),
        Commands::Check => cmd_check(),
        Commands::Init { dir, force } => cmd_init(&dir, force),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn cmd_preview(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let config = LumenConfig::load_from_dir(config_path)?;
    let output = output.unwrap_or_else(|| PathBuf::from(&config.preview.output));

    let summaries = preview::write_preview(&config, &output)?;
    for summary in &summaries {
        println!(
            "{:<9} at ({:>4}, {:>4}): {:>6} shaded, {:>6} discarded",
            summary.kind,
            summary.origin.0,
            summary.origin.1,
            summary.stats.shaded,
            summary.stats.discarded
        );
    }
    println!("Wrote {}", output.display());
    Ok(())
}

fn cmd_check() -> Result<()> {
    println!("Binding contract:");
    println!("  group {VIEW_GROUP}: view uniform");
    println!("  group {IMAGE_GROUP}: node image + sampler");
    println!("  group {MATERIAL_GROUP}, binding {MATERIAL_BINDING}: material uniform");
    println!("  fragment output: location {COLOR_TARGET_LOCATION}");
    println!();

    print_report(&validate_vertex_shader().context("Vertex stage failed checks")?);
    for kind in MaterialKind::ALL {
        let report = validate_material_shader(kind)
            .with_context(|| format!("{kind} material shader failed checks"))?;
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ShaderReport) {
    println!(
        "ok  {:<26} entry {:<9} uniform @({}, {}) {:>3} bytes{}",
        report.name,
        report.entry_point,
        report.uniform_binding.0,
        report.uniform_binding.1,
        report.uniform_size,
        if report.discards { ", discards" } else { "" }
    );
}

fn cmd_init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let content = LumenConfig::default().to_toml()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("created {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}
