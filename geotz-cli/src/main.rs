//! GeoTZ CLI - Command-line interface
//!
//! This binary provides a command-line interface to the GeoTZ library:
//! it loads the geohash index and time zone name files, resolves a single
//! coordinate, and prints the resulting identifier(s).

use clap::Parser;
use geotz::loader::DataLoader;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geotz")]
#[command(version = geotz::VERSION)]
#[command(about = "Resolve a coordinate to an IANA time zone identifier", long_about = None)]
struct Args {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Path to the binary geohash index file
    #[arg(long)]
    index: PathBuf,

    /// Path to the time zone name file (one identifier per line)
    #[arg(long)]
    names: PathBuf,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let handle = DataLoader::spawn(&args.index, &args.names);
    let engine = match handle.ready().await {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: failed to load timezone data: {}", e);
            process::exit(1);
        }
    };

    tracing::debug!(
        records = engine.record_count(),
        zones = engine.zone_count(),
        "engine ready"
    );

    let result = engine.lookup(args.lat, args.lon);
    println!("{}", result.primary);
    for alternative in &result.alternatives {
        println!("alternative: {}", alternative);
    }
}

/// Initialize console logging.
///
/// Respects `RUST_LOG` when set; otherwise defaults to `info`, or `debug`
/// with `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
