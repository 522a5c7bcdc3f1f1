//! polybot-imgproc CLI - apply one bot filter caption to an image file

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use polybot_imgproc::config::{load_config, FilterConfig};
use polybot_imgproc::{codec, logging, Directive, MatrixFilterEngine};

#[derive(Parser)]
#[command(name = "polybot-imgproc")]
#[command(author, version, about = "Apply an image bot filter to a photo", long_about = None)]
struct Cli {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Filter caption, e.g. "blur", "rotate 2", "salt and pepper 5"
    directive: String,

    /// JSON file with default filter parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the noise filters (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (default: <input stem>_filtered.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init("polybot-imgproc", cli.verbose);

    let directive = match Directive::parse(&cli.directive) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", polybot_imgproc::directive::help_text());
            return Err(e.into());
        }
    };

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let image = codec::decode_gray(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let start = Instant::now();
    let mut engine = MatrixFilterEngine::with_config(image, config);
    engine
        .apply(&directive)
        .with_context(|| format!("filter '{directive}' failed"))?;
    let elapsed = start.elapsed();

    let (height, width) = engine.dim();
    info!(%directive, width, height, ?elapsed, "filter finished");

    let written = match &cli.output {
        Some(path) => {
            codec::encode_gray(engine.data(), path)?;
            path.clone()
        }
        None => codec::save_filtered(engine.data(), &cli.input)?,
    };

    println!("{}", written.display());
    Ok(())
}
