//! Binary entrypoint for meme-canvas.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use meme_canvas::compose::{self, Captions};
use meme_canvas::config::{self, Configuration};
use meme_canvas::speech::{Utterance, VolumeLevel};
use meme_canvas::workflow::Workflow;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "meme-canvas", about = "Caption an image on a fixed-size canvas")]
struct Cli {
    /// Source image to place on the canvas
    image: PathBuf,

    /// Top caption text
    #[arg(long, default_value = "")]
    top: String,

    /// Bottom caption text
    #[arg(long, default_value = "")]
    bottom: String,

    /// Path to YAML config file; defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = "meme.png")]
    out: PathBuf,

    /// Print the text a speech synthesizer would read
    #[arg(long)]
    read: bool,

    /// Speech volume slider, 0-100
    #[arg(long, default_value_t = 100)]
    volume: i32,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("meme_canvas={}", level).parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = match &cli.config {
        Some(path) => config::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Configuration::default(),
    };
    cfg.validate().context("validating configuration")?;

    let source = image::open(&cli.image)
        .with_context(|| format!("opening image {}", cli.image.display()))?
        .to_rgba8();
    info!(
        width = source.width(),
        height = source.height(),
        "loaded source image"
    );

    let mut workflow = Workflow::new();
    workflow.image_loaded();

    let captions = Captions::new(cli.top.clone(), cli.bottom.clone());
    let meme = compose::render_meme(&source, &cfg, &captions)?;
    workflow.meme_generated();

    meme.save(&cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;
    info!(path = %cli.out.display(), "wrote meme");

    if cli.read && workflow.buttons().read {
        let utterance = Utterance::new(&captions.top, &captions.bottom, cli.volume);
        info!(
            volume = utterance.volume,
            icon = VolumeLevel::from_slider(cli.volume).icon_path(),
            "speaking captions"
        );
        println!("{}", utterance.text);
    }

    Ok(())
}
