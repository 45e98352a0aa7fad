//! Fixed-width binary record store
//!
//! [`RecordStore`] wraps the raw bytes of the geohash index file: a sequence
//! of fixed-width records sorted ascending by their 5-byte geohash key. Each
//! record is 9 bytes on disk — 8 data bytes (5-byte key + 3-byte zero-padded
//! decimal line number) followed by 1 separator byte that is never returned
//! to callers.
//!
//! # Thread Safety
//!
//! Every read computes its byte offset from the requested record index, so
//! there is no shared cursor and no locking: the buffer is immutable after
//! construction and `RecordStore` is freely shared across threads. Repeated
//! reads of the same index return identical bytes from any thread.
//!
//! # Data Contract
//!
//! The sort invariant is established by the index build pipeline and is
//! never re-validated here. Requesting a record index outside `1..=N` is a
//! caller bug and panics rather than clamping.

/// Width of one record in the index file: 8 data bytes plus a separator.
pub const RECORD_WIDTH: usize = 9;

/// Number of data bytes per record.
pub const RECORD_DATA_LEN: usize = 8;

/// Length of the geohash key at the start of each record.
pub const KEY_LEN: usize = 5;

/// Random-access reader over an in-memory, fixed-width record buffer.
///
/// Records are addressed by 1-based index, matching the 1-based line
/// numbering of the name table the payloads point into.
#[derive(Debug)]
pub struct RecordStore {
    data: Vec<u8>,
}

impl RecordStore {
    /// Create a record store over raw index bytes.
    ///
    /// The buffer length must be a multiple of [`RECORD_WIDTH`]; the loader
    /// validates this before construction. Trailing partial records would
    /// otherwise be silently unaddressable.
    pub fn new(data: Vec<u8>) -> Self {
        debug_assert!(
            data.len() % RECORD_WIDTH == 0,
            "index buffer length {} is not a multiple of the record width",
            data.len()
        );
        Self { data }
    }

    /// Number of records in the store.
    pub fn record_count(&self) -> u64 {
        (self.data.len() / RECORD_WIDTH) as u64
    }

    /// Read the 8 data bytes of record `index` (1-based).
    ///
    /// The separator byte is skipped, never returned.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0 or greater than [`record_count`](Self::record_count).
    /// Out-of-range reads are contract violations by the search layer, not
    /// recoverable errors.
    pub fn read_record(&self, index: u64) -> [u8; RECORD_DATA_LEN] {
        let count = self.record_count();
        assert!(
            index >= 1 && index <= count,
            "record index {} out of range 1..={}",
            index,
            count
        );

        let offset = RECORD_WIDTH * (index as usize - 1);
        let mut record = [0_u8; RECORD_DATA_LEN];
        record.copy_from_slice(&self.data[offset..offset + RECORD_DATA_LEN]);
        record
    }

    /// Read the 5-byte geohash key of record `index` (1-based).
    ///
    /// # Panics
    ///
    /// Same contract as [`read_record`](Self::read_record).
    pub fn read_key(&self, index: u64) -> [u8; KEY_LEN] {
        let record = self.read_record(index);
        let mut key = [0_u8; KEY_LEN];
        key.copy_from_slice(&record[..KEY_LEN]);
        key
    }
}
