//! Time zone lookup facade
//!
//! [`TimezoneLookup`] wires the engine's components into a single
//! coordinate → identifier query: geohash the coordinate, locate its prefix
//! run in the record store, resolve the run's line numbers against the name
//! table, and fall back to a longitude-derived `Etc/GMT±n` identifier when
//! the index has no coverage. Every finite coordinate produces a non-empty
//! primary identifier; there is no "not found".

use tracing::debug;

use crate::fallback;
use crate::geohash;
use crate::names::NameTable;
use crate::search;
use crate::store::{RecordStore, KEY_LEN};

/// Geohash precision the index is built at (~±2.4 km cells at the equator).
pub const GEOHASH_PRECISION: usize = KEY_LEN;

/// Result of a coordinate lookup.
///
/// `alternatives` is non-empty when the coordinate's geohash cell straddles
/// a zone boundary and the index maps it to several zones; identifiers are
/// ordered by their name-table line number, with the lowest line as
/// `primary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Primary time zone identifier.
    pub primary: String,
    /// Further candidate identifiers for boundary-straddling cells.
    pub alternatives: Vec<String>,
}

/// Coordinate → time zone lookup engine.
///
/// Owns the record store and name table exclusively; both are immutable for
/// the engine's lifetime, so lookups are synchronous pure computations and
/// safe to run concurrently from any number of threads.
#[derive(Debug)]
pub struct TimezoneLookup {
    store: RecordStore,
    names: NameTable,
}

impl TimezoneLookup {
    /// Build an engine from raw index bytes and decoded name lines.
    ///
    /// The index bytes must hold whole records sorted ascending by key and
    /// the name lines must cover every referenced line number; both are
    /// build-pipeline guarantees the engine trusts (the loader checks gross
    /// shape only).
    pub fn from_parts(index: Vec<u8>, names: Vec<String>) -> Self {
        Self {
            store: RecordStore::new(index),
            names: NameTable::new(names),
        }
    }

    /// Resolve a coordinate to its time zone identifier(s).
    ///
    /// Coordinates are not validated; out-of-range values geohash to an
    /// edge cell like any other. Always returns a non-empty primary.
    pub fn lookup(&self, lat: f64, lon: f64) -> LookupResult {
        let hash = geohash::encode(lat, lon, GEOHASH_PRECISION);
        let key: [u8; KEY_LEN] = hash
            .as_bytes()
            .try_into()
            .expect("geohash length equals the index key length");

        let line_numbers = match search::locate(&self.store, &key) {
            Some(seed) => search::expand(&self.store, seed),
            None => Vec::new(),
        };

        let mut zones = self.names.resolve(&line_numbers);
        if zones.is_empty() {
            let hours = fallback::offset_hours(lon);
            let primary = fallback::offset_identifier(hours);
            debug!(%hash, lat, lon, %primary, "no index coverage, using longitude fallback");
            return LookupResult {
                primary,
                alternatives: Vec::new(),
            };
        }

        let primary = zones.remove(0);
        LookupResult {
            primary,
            alternatives: zones,
        }
    }

    /// Number of records in the underlying index.
    pub fn record_count(&self) -> u64 {
        self.store.record_count()
    }

    /// Number of identifiers in the name table.
    pub fn zone_count(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Engine over an index keyed on real precision-5 geohashes:
    /// sv9h9 = Jerusalem, u2edk = Vienna.
    fn sample_engine() -> TimezoneLookup {
        let mut index = Vec::new();
        for record in ["sv9h9001", "u2edk002"] {
            index.extend_from_slice(record.as_bytes());
            index.push(b'\n');
        }
        TimezoneLookup::from_parts(
            index,
            vec!["Asia/Jerusalem".to_string(), "Europe/Vienna".to_string()],
        )
    }

    #[test]
    fn test_lookup_indexed_cell() {
        let engine = sample_engine();

        let result = engine.lookup(31.7683, 35.2137); // Jerusalem
        assert_eq!(result.primary, "Asia/Jerusalem");
        assert!(result.alternatives.is_empty());

        let result = engine.lookup(48.2082, 16.3738); // Vienna
        assert_eq!(result.primary, "Europe/Vienna");
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn test_lookup_falls_back_outside_index() {
        let engine = sample_engine();

        // Mid-Atlantic: no index record, longitude band formula applies
        let result = engine.lookup(0.0, -30.0);
        assert_eq!(result.primary, "Etc/GMT+2");
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn test_lookup_boundary_cell_orders_by_line_number() {
        // Two records share Vienna's cell; record order [2, 1] must resolve
        // in line order [1, 2]
        let mut index = Vec::new();
        for record in ["u2edk002", "u2edk001"] {
            index.extend_from_slice(record.as_bytes());
            index.push(b'\n');
        }
        let engine = TimezoneLookup::from_parts(
            index,
            vec!["Europe/Bratislava".to_string(), "Europe/Vienna".to_string()],
        );

        let result = engine.lookup(48.2082, 16.3738);
        assert_eq!(result.primary, "Europe/Bratislava");
        assert_eq!(result.alternatives, vec!["Europe/Vienna".to_string()]);
    }

    #[test]
    fn test_lookup_empty_index_always_falls_back() {
        let engine = TimezoneLookup::from_parts(Vec::new(), vec!["UTC".to_string()]);
        assert_eq!(engine.lookup(51.5074, -0.1278).primary, "UTC");
        assert_eq!(engine.lookup(35.6762, 139.6503).primary, "Etc/GMT-9");
    }

    proptest! {
        /// Property: lookup is total — every finite coordinate yields a
        /// non-empty primary, including poles and the antimeridian.
        #[test]
        fn prop_lookup_always_returns_primary(
            lat in -95.0_f64..95.0_f64,
            lon in -185.0_f64..185.0_f64,
        ) {
            let engine = sample_engine();
            let result = engine.lookup(lat, lon);
            prop_assert!(!result.primary.is_empty());
        }
    }

    #[test]
    fn test_lookup_poles_and_antimeridian() {
        let engine = sample_engine();
        for (lat, lon) in [(90.0, 0.0), (-90.0, 0.0), (0.0, 180.0), (0.0, -180.0)] {
            let result = engine.lookup(lat, lon);
            assert!(
                !result.primary.is_empty(),
                "({}, {}) must resolve to some identifier",
                lat,
                lon
            );
        }
    }
}
