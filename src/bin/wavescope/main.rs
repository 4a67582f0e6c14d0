//! wavescope - terminal waveform visualizer
//!
//! Run with: cargo run -- --variant filled-curve

mod app;
mod ui;

use std::{fs::File, path::Path, path::PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use wavescope::{driver::REFRESH_RATE, Scene, SceneConfig, Variant};

use app::App;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    /// Throttled snapshots drawn as dots
    DotPlot,
    /// Continuous time drawn as a filled curve; click to reverse, shift-click for 4x
    FilledCurve,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::DotPlot => Variant::DotPlot,
            VariantArg::FilledCurve => Variant::FilledCurve,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Animated waveform driven by self-modulating oscillators")]
struct Args {
    #[arg(long, value_enum, default_value_t = VariantArg::DotPlot)]
    variant: VariantArg,
    /// Host refresh cadence in Hz
    #[arg(long, default_value_t = REFRESH_RATE, value_parser = parse_refresh_hz)]
    refresh_hz: f64,
    /// Write logs here instead of stderr (RUST_LOG sets the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_refresh_hz(value: &str) -> Result<f64, String> {
    let hz: f64 = value
        .parse()
        .map_err(|err| format!("`{value}` is not a number: {err}"))?;
    if hz.is_finite() && hz > 0.0 {
        Ok(hz)
    } else {
        Err(format!("refresh rate must be positive, got {value}"))
    }
}

fn init_logging(log_file: Option<&Path>) -> EyreResult<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let scene = Scene::new(SceneConfig::new(args.variant.into()))
        .wrap_err("failed to build scene")?;
    let mut app = App::new(scene, args.refresh_hz)?;

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
