//! Prefix search over the sorted geohash index
//!
//! Two cooperating operations resolve a 5-character geohash to the line
//! numbers of its candidate time zones:
//!
//! - [`locate`] — a binary search that finds *any* record whose key equals
//!   the query hash (or a sentinel record that matches every query);
//! - [`expand`] — a linear scan outward from that seed record collecting the
//!   full contiguous run of records sharing the same key, decoding each
//!   member's payload into a name-table line number.
//!
//! The split matters because a precision-5 cell that straddles a zone
//! boundary is stored as several adjacent records with the same key, and the
//! binary search may land on any of them. Equal-key contiguity is the only
//! adjacency the expansion trusts; lexicographic neighbors are not spatial
//! neighbors.

use crate::store::{RecordStore, KEY_LEN, RECORD_DATA_LEN};

/// Key byte marking a designated "no assigned zone" record.
///
/// A record whose key begins with this byte (after any equal prefix) matches
/// every query. The index build pipeline uses it for cells with no zone
/// data, such as open ocean.
const SENTINEL: u8 = b'-';

/// Interval collapse tracking for [`locate`].
///
/// A single collapse of the search interval to one record is not enough to
/// declare no match: the off-by-one midpoint adjustments
/// (`max = if mid == max { min } else { mid }` and the symmetric form) can
/// legitimately need one more probe at the boundary. The first collapse
/// transitions to `Converging`; a second collapse ends the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Searching,
    Converging,
}

/// Probe outcome for a single record comparison.
enum Probe {
    /// Record key equals the query, or is a sentinel.
    Matched,
    /// Record key sorts after the query.
    TooHigh,
    /// Record key sorts before the query.
    TooLow,
}

/// Compare a record's key bytes against the query hash.
///
/// Short-circuits on the first differing byte; a [`SENTINEL`] byte in the
/// first differing position matches unconditionally.
fn probe(record: &[u8; RECORD_DATA_LEN], hash: &[u8; KEY_LEN]) -> Probe {
    for i in 0..KEY_LEN {
        if record[i] == SENTINEL {
            return Probe::Matched;
        }
        if record[i] > hash[i] {
            return Probe::TooHigh;
        }
        if record[i] < hash[i] {
            return Probe::TooLow;
        }
    }
    Probe::Matched
}

/// Binary-search the store for any record whose key equals `hash`.
///
/// Returns the 1-based index of a matching record, or `None` when the store
/// holds no record for this hash. Which member of an equal-key run is
/// returned is unspecified; callers expand the run with [`expand`].
///
/// An empty store yields `None` without probing.
pub fn locate(store: &RecordStore, hash: &[u8; KEY_LEN]) -> Option<u64> {
    let count = store.record_count();
    if count == 0 {
        return None;
    }

    let mut min = 1_u64;
    let mut max = count;
    let mut state = SearchState::Searching;

    loop {
        let mid = (max - min) / 2 + min;
        let record = store.read_record(mid);

        match probe(&record, hash) {
            Probe::Matched => return Some(mid),
            Probe::TooHigh => max = if mid == max { min } else { mid },
            Probe::TooLow => min = if mid == min { max } else { mid },
        }

        if min == max {
            match state {
                SearchState::Searching => state = SearchState::Converging,
                SearchState::Converging => return None,
            }
        }
    }
}

/// Expand a seed record into its full equal-key run and decode the payloads.
///
/// Scans backward and forward from `seed` while neighbors share the seed's
/// 5-byte key, then decodes every run member's 3-byte zero-padded payload as
/// a name-table line number. Line numbers are returned in ascending record
/// order — *not* sorted by value; the name resolver re-sorts them, and the
/// distinction decides which identifier becomes primary when a cell maps to
/// several zones.
pub fn expand(store: &RecordStore, seed: u64) -> Vec<u32> {
    let key = store.read_key(seed);
    let count = store.record_count();

    let mut min = seed;
    while min > 1 && store.read_key(min - 1) == key {
        min -= 1;
    }

    let mut max = seed;
    while max < count && store.read_key(max + 1) == key {
        max += 1;
    }

    (min..=max)
        .map(|index| line_number(&store.read_record(index)))
        .collect()
}

/// Decode the 3-byte zero-padded decimal payload of a record.
///
/// Non-numeric payloads mean a corrupt index, which the build pipeline
/// guarantees against; failing fast here beats resolving a wrong zone.
fn line_number(record: &[u8; RECORD_DATA_LEN]) -> u32 {
    let digits = std::str::from_utf8(&record[KEY_LEN..])
        .expect("index record payload is not valid UTF-8");
    digits
        .parse()
        .expect("index record payload is not a line number")
}
