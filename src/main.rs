//! cellnoise CLI - sample and inspect deterministic cellular noise.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use glam::IVec4;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cellnoise::export::{export_field_png, export_field_raw, PngExportOptions, RawFormat};
use cellnoise::hash::LaneHash;
use cellnoise::noise::{FractalNoiseConfig, NoiseSettings};
use cellnoise::sampling::sample_grid;
use cellnoise::voronoi::{Dimensions, DistanceMetric, FeatureSelector, LatticeKind, VoronoiConfig};

/// Deterministic cellular (Worley / Voronoi) noise generator.
#[derive(Parser)]
#[command(name = "cellnoise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a noise field over a square grid and export it.
    Generate(GenerateArgs),

    /// Print the lane hash for a seed and a sequence of eaten values.
    Hash {
        /// Seed for each of the four lanes.
        #[arg(long, num_args = 4, allow_negative_numbers = true, default_values_t = [0, 0, 0, 0])]
        seed: Vec<i32>,

        /// Four values to eat; repeat to eat several in order.
        #[arg(long, num_args = 4, allow_negative_numbers = true, action = ArgAction::Append)]
        eat: Vec<i32>,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Samples per side.
    #[arg(short, long, default_value = "512")]
    resolution: u32,

    /// Random seed for reproducible generation.
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Distance metric (worley, chebyshev).
    #[arg(long, default_value = "worley")]
    metric: DistanceMetric,

    /// Feature selector (f1, f2, f2-minus-f1).
    #[arg(long, default_value = "f1")]
    function: FeatureSelector,

    /// Lattice (normal, tiling).
    #[arg(long, default_value = "normal")]
    lattice: LatticeKind,

    /// Number of input axes (1, 2 or 3).
    #[arg(long, default_value = "2")]
    dimensions: Dimensions,

    /// Lattice cells per unit for the first octave.
    #[arg(long, default_value = "8")]
    frequency: u32,

    /// Number of octaves.
    #[arg(long, default_value = "1")]
    octaves: u8,

    /// Frequency multiplier per octave.
    #[arg(long, default_value = "2")]
    lacunarity: u32,

    /// Amplitude decay per octave.
    #[arg(long, default_value = "0.5")]
    persistence: f32,

    /// JSON settings file; replaces the noise flags above (except --seed).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the settings actually used next to the output.
    #[arg(long)]
    save_config: bool,

    /// Output directory for generated files.
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Base name for output files.
    #[arg(short, long, default_value = "noise")]
    name: String,

    /// Export format.
    #[arg(short, long, default_value = "png")]
    format: ExportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// 16-bit PNG, stretched to the field's value range.
    Png,
    /// 16-bit RAW little-endian over [0, 1].
    Raw,
    /// 32-bit float RAW (unnormalized).
    RawFloat,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Hash { seed, eat } => run_hash(&seed, &eat),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn settings_from_args(args: &GenerateArgs) -> Result<NoiseSettings, Box<dyn Error>> {
    let mut settings = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading settings");
            NoiseSettings::load(path)?
        }
        None => NoiseSettings::new(
            FractalNoiseConfig {
                octaves: args.octaves,
                frequency: args.frequency,
                lacunarity: args.lacunarity,
                persistence: args.persistence,
                seed: 0,
            },
            VoronoiConfig {
                metric: args.metric,
                function: args.function,
                lattice: args.lattice,
                dimensions: args.dimensions,
            },
        ),
    };

    if args.config.is_none() || args.seed.is_some() {
        settings.noise.seed = args.seed.unwrap_or_else(rand::random);
    }
    settings.validate()?;
    Ok(settings)
}

fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn Error>> {
    let settings = settings_from_args(&args)?;
    let resolution = args.resolution;

    println!("cellnoise - Cellular Noise Generator");
    println!("====================================");
    println!("Resolution: {}x{}", resolution, resolution);
    println!("Seed: {}", settings.noise.seed);
    println!(
        "Noise: {} {} {} lattice, {}",
        settings.voronoi.metric, settings.voronoi.function, settings.voronoi.lattice, settings.voronoi.dimensions
    );
    println!(
        "Fractal: octaves={}, frequency={}, lacunarity={}, persistence={}",
        settings.noise.octaves, settings.noise.frequency, settings.noise.lacunarity, settings.noise.persistence
    );
    println!("Output: {}", args.output.display());

    let start = Instant::now();
    let field = sample_grid(resolution, &settings)?;
    let (min_v, max_v) = field.value_range();
    info!(elapsed = ?start.elapsed(), "sampling finished");
    println!("\nSampled in {:.2?}", start.elapsed());
    println!("Value range: [{:.4}, {:.4}]", min_v, max_v);

    std::fs::create_dir_all(&args.output)?;

    match args.format {
        ExportFormat::Png => {
            let path = args.output.join(format!("{}.png", args.name));
            export_field_png(&field, &path, &PngExportOptions::auto_range(&field))?;
            println!("  Exported {}", path.display());
        }
        ExportFormat::Raw => {
            let path = args.output.join(format!("{}.raw", args.name));
            export_field_raw(&field, &path, RawFormat::R16LittleEndian, 0.0, 1.0)?;
            println!("  Exported {} (R16)", path.display());
        }
        ExportFormat::RawFloat => {
            let path = args.output.join(format!("{}.raw", args.name));
            export_field_raw(&field, &path, RawFormat::R32Float, min_v, max_v)?;
            println!("  Exported {} (R32 float)", path.display());
        }
    }

    if args.save_config {
        let path = args.output.join(format!("{}.json", args.name));
        settings.save(&path)?;
        println!("  Saved settings to {}", path.display());
    }

    Ok(())
}

fn run_hash(seed: &[i32], eat: &[i32]) -> Result<(), Box<dyn Error>> {
    let seed = IVec4::from_slice(seed);
    let mut hash = LaneHash::seed(seed);
    for data in eat.chunks_exact(4) {
        hash = hash.eat(IVec4::from_slice(data));
    }

    let bits = hash.finalize();
    let (a, b, c, d) = (bits.bytes_a(), bits.bytes_b(), bits.bytes_c(), bits.bytes_d());
    let floats = bits.floats01_a();

    println!("lane  accumulator  finalized    A    B    C    D  floats01_a");
    for lane in 0..4 {
        println!(
            "{:>4}  0x{:08X}   0x{:08X}  {:>3}  {:>3}  {:>3}  {:>3}  {:.7}",
            lane,
            hash.accumulator()[lane],
            bits.words()[lane],
            a[lane],
            b[lane],
            c[lane],
            d[lane],
            floats[lane]
        );
    }
    Ok(())
}
