//! sixsides-cli - replay traces, simulate drags, inspect the scene
//!
//! # Usage
//!
//! - `sixsides replay drag.json --variant two-axis` - replay a recorded trace
//! - `sixsides simulate --velocity-x 2400 --samples 4` - replay a synthetic drag
//! - `sixsides scene` - print the scene commands the core sends on init
//! - `sixsides config` - print the effective rotation config as TOML

use clap::{Parser, Subcommand, ValueEnum};
use sixsides::{Command, RotationConfig, Variant, cube_scene};
use sixsides_shell::{ReplaySummary, Shell, Trace, replay_file};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sixsides")]
#[command(about = "Drag-to-rotate cube core: replay, simulate and inspect", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Rotation behaviour, overriding the config file
///
/// Mirrors [`Variant`] so the core crate does not depend on clap; add new
/// variants to both enums and to the `From` impl below.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum VariantArg {
    SingleAxis,
    TwoAxis,
    AutoSpin,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::SingleAxis => Variant::SingleAxis,
            VariantArg::TwoAxis => Variant::TwoAxis,
            VariantArg::AutoSpin => Variant::AutoSpin,
        }
    }
}

#[derive(clap::Args, Debug, Clone, Default)]
struct ConfigArgs {
    /// TOML file with rotation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rotation variant (overrides the config file)
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a JSON trace of protocol events
    Replay {
        /// Path to the trace file
        trace: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Replay a synthetic constant-velocity drag
    Simulate {
        /// Horizontal drag velocity
        #[arg(long, default_value = "2400", allow_hyphen_values = true)]
        velocity_x: f32,

        /// Vertical drag velocity
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        velocity_y: f32,

        /// Number of Changed samples
        #[arg(long, default_value = "4")]
        samples: usize,

        /// Frames to run after the release
        #[arg(long, default_value = "120")]
        frames: usize,

        /// Also write the generated trace to this file
        #[arg(long)]
        write_trace: Option<PathBuf>,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the scene commands sent on init, as JSON
    Scene,
    /// Print the effective rotation config as TOML
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Main entry point for the sixsides CLI
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Replay { trace, config } => cmd_replay(&trace, &config),
        Commands::Simulate {
            velocity_x,
            velocity_y,
            samples,
            frames,
            write_trace,
            config,
        } => cmd_simulate(
            [velocity_x, velocity_y],
            samples,
            frames,
            write_trace.as_deref(),
            &config,
        ),
        Commands::Scene => cmd_scene(),
        Commands::Config { config } => cmd_config(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Config file (or defaults) with the command-line variant applied on top.
fn resolve_config(args: &ConfigArgs) -> Result<RotationConfig, String> {
    let mut config = match &args.config {
        Some(path) => RotationConfig::load(path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        None => RotationConfig::default(),
    };
    if let Some(variant) = args.variant {
        config.variant = variant.into();
    }
    config.validate().map_err(|e| e.to_string())?;
    log::debug!("Using config {:?}", config);
    Ok(config)
}

fn print_summary(summary: &ReplaySummary) -> Result<(), String> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| format!("Failed to serialize summary: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn cmd_replay(trace: &Path, args: &ConfigArgs) -> Result<(), String> {
    let config = resolve_config(args)?;
    log::info!("Replaying {} with {:?}", trace.display(), config.variant);
    let summary = replay_file(trace, config).map_err(|e| e.to_string())?;
    print_summary(&summary)
}

fn cmd_simulate(
    velocity: [f32; 2],
    samples: usize,
    frames: usize,
    write_trace: Option<&Path>,
    args: &ConfigArgs,
) -> Result<(), String> {
    let config = resolve_config(args)?;
    let trace = Trace::synthetic_drag(velocity, samples, frames);

    if let Some(path) = write_trace {
        let json = trace.to_json().map_err(|e| e.to_string())?;
        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        log::info!("Wrote {} events to {}", trace.len(), path.display());
    }

    log::info!(
        "Simulating {} samples at {:?} then {} frames ({:?})",
        samples,
        velocity,
        frames,
        config.variant
    );
    let summary = Shell::with_config(config).map_err(|e| e.to_string())?.replay(&trace);
    print_summary(&summary)
}

fn scene_json() -> Result<String, String> {
    let commands: Vec<Command> = cube_scene().to_commands();
    serde_json::to_string_pretty(&commands).map_err(|e| format!("Failed to serialize scene: {}", e))
}

fn cmd_scene() -> Result<(), String> {
    println!("{}", scene_json()?);
    Ok(())
}

fn cmd_config(args: &ConfigArgs) -> Result<(), String> {
    let config = resolve_config(args)?;
    let toml = config.to_toml_string().map_err(|e| e.to_string())?;
    print!("{}", toml);
    Ok(())
}
