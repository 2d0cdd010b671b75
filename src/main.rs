use std::path::PathBuf;

use anyhow::{bail, Context};
use bongard::{Config, FlatFileWriter, Generator, IdCounters};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "bongard-gen",
    about = "Create NUM_PICTURES Bongard pictures in the directory DIRECTORY",
    version
)]
struct Args {
    /// Number of pictures to generate
    #[arg(value_name = "NUM_PICTURES")]
    num_pictures: String,

    /// Existing directory that receives one sub-directory per fold
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// JSON file with generator and run settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads building pictures
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long)]
    min_elements: Option<usize>,
    #[arg(long)]
    max_elements: Option<usize>,
    #[arg(long)]
    min_size: Option<i32>,
    #[arg(long)]
    max_size: Option<i32>,
    /// Minimum number of enclosed shape pairs per picture
    #[arg(long)]
    min_insides: Option<usize>,

    /// Pictures per fold
    #[arg(long)]
    chunk_size: Option<usize>,

    /// First picture id, to continue an earlier run
    #[arg(long, default_value_t = 0)]
    start_picture_id: u64,
    /// First shape id, to continue an earlier run
    #[arg(long, default_value_t = 0)]
    start_shape_id: u64,
    /// First fold number, to continue an earlier run
    #[arg(long, default_value_t = 0)]
    start_fold: usize,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Every outcome, failures included, exits with status 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let Some(num_pictures) = parse_count(&args.num_pictures) else {
        bail!("{} is not a valid input number.", args.num_pictures);
    };
    if !args.directory.exists() {
        bail!("The path {} does not exist.", args.directory.display());
    }
    if !args.directory.is_dir() {
        bail!("{} is not a directory.", args.directory.display());
    }

    let config = load_config(&args)?;
    tracing::info!("Generator parameters: {:?}", config.generator);

    let ids = IdCounters::new(args.start_picture_id, args.start_shape_id);
    let mut generator = Generator::new(config, FlatFileWriter::new(&args.directory))
        .context("invalid configuration")?
        .resume(ids, args.start_fold);
    generator.generate(num_pictures)?;
    Ok(())
}

/// Positive count that is not `u64::MAX`
fn parse_count(text: &str) -> Option<u64> {
    text.trim()
        .parse::<u64>()
        .ok()
        .filter(|&n| n != 0 && n != u64::MAX)
}

/// Defaults, then the config file, then command line flags
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => Config::default(),
    };

    let generator = &mut config.generator;
    if let Some(v) = args.min_elements {
        generator.min_elements = v;
    }
    if let Some(v) = args.max_elements {
        generator.max_elements = v;
    }
    if let Some(v) = args.min_size {
        generator.min_size = v;
    }
    if let Some(v) = args.max_size {
        generator.max_size = v;
    }
    if let Some(v) = args.min_insides {
        generator.min_insides = v;
    }

    let run = &mut config.run;
    if args.seed.is_some() {
        run.seed = args.seed;
    }
    if let Some(v) = args.threads {
        run.threads = v;
    }
    if let Some(v) = args.chunk_size {
        run.chunk_size = v;
    }
    Ok(config)
}
