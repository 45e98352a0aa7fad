//! GeoTZ - Geohash-indexed time zone lookup
//!
//! This library resolves a geographic coordinate (latitude/longitude) to an
//! IANA time zone identifier using a precomputed, geohash-indexed binary
//! lookup table, falling back to an analytic longitude-based UTC offset when
//! no table entry covers the coordinate.
//!
//! # High-Level API
//!
//! For most use cases, load the data files with the [`loader`] module and
//! query through the [`lookup::TimezoneLookup`] facade:
//!
//! ```ignore
//! use geotz::loader::DataLoader;
//!
//! let handle = DataLoader::spawn("geotz-index.dat", "geotz-names.dat");
//! let engine = handle.ready().await?;
//!
//! let result = engine.lookup(48.2082, 16.3738);
//! println!("{}", result.primary); // "Europe/Vienna"
//! ```
//!
//! # Architecture
//!
//! ```text
//! TimezoneLookup (facade)
//! ├── geohash   — coordinate → fixed-length base32 cell key
//! ├── store     — fixed-width binary record buffer, positional reads
//! ├── search    — prefix binary search + contiguous run expansion
//! ├── names     — line-numbered identifier table
//! └── fallback  — longitude → Etc/GMT±n identifier (no index coverage)
//! ```
//!
//! Lookups are synchronous pure computations over immutable buffers and are
//! safe to run concurrently from any number of threads.

pub mod fallback;
pub mod geohash;
pub mod loader;
pub mod lookup;
pub mod names;
pub mod search;
pub mod store;

pub use loader::{DataLoader, LoadError, LoadHandle, LoadState};
pub use lookup::{LookupResult, TimezoneLookup, GEOHASH_PRECISION};

/// Version of the GeoTZ library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
