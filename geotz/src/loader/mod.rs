//! Asynchronous data loading
//!
//! The lookup engine's two data files (binary geohash index, line-oriented
//! name table) are loaded off the caller's thread and handed over as a built
//! [`TimezoneLookup`] once both buffers are fully populated. The lifecycle
//! is an explicit two-phase state machine:
//!
//! ```text
//! Unloaded → Loading → Ready
//! ```
//!
//! [`DataLoader::spawn`] runs the file IO on a tokio task and returns a
//! [`LoadHandle`]: a state query plus a one-shot completion signal. The
//! engine is *moved* to the caller on completion — nothing shares the
//! buffers while they are being filled, and nothing rewrites them after.
//!
//! Only gross shape is validated here (whole records, non-empty name
//! table). The record sort invariant and payload line ranges are the build
//! pipeline's responsibility and are trusted.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::info;

use crate::lookup::TimezoneLookup;
use crate::store::RECORD_WIDTH;

/// Error type for data loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("index file length {len} is not a multiple of the 9-byte record width")]
    TruncatedIndex { len: usize },
    #[error("name file holds no identifier lines")]
    EmptyNameTable,
    #[error("loader task ended before delivering a result")]
    Cancelled,
}

/// Phase of the data loading lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LoadState {
    /// No load has completed; the engine must not be queried.
    Unloaded = 0,
    /// A load is in flight.
    Loading = 1,
    /// Both buffers are populated and the engine has been delivered.
    Ready = 2,
}

impl LoadState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => LoadState::Unloaded,
            1 => LoadState::Loading,
            2 => LoadState::Ready,
            _ => unreachable!("invalid load state {}", value),
        }
    }
}

/// Spawns background loads of the engine's data files.
pub struct DataLoader;

impl DataLoader {
    /// Start loading the index and name files on a background tokio task.
    ///
    /// Must be called from within a tokio runtime. The returned handle
    /// reports progress via [`LoadHandle::state`] and delivers the built
    /// engine through [`LoadHandle::ready`]. A failed load drops the state
    /// back to [`LoadState::Unloaded`] and surfaces the error through the
    /// handle.
    pub fn spawn<P: AsRef<Path>>(index_path: P, names_path: P) -> LoadHandle {
        let index_path: PathBuf = index_path.as_ref().to_path_buf();
        let names_path: PathBuf = names_path.as_ref().to_path_buf();

        let state = Arc::new(AtomicU8::new(LoadState::Loading as u8));
        let (tx, rx) = oneshot::channel();

        let task_state = Arc::clone(&state);
        tokio::spawn(async move {
            let result = load_files(&index_path, &names_path).await;
            let next = match result {
                Ok(_) => LoadState::Ready,
                Err(_) => LoadState::Unloaded,
            };
            task_state.store(next as u8, Ordering::Release);
            // Receiver may have been dropped; the load result is then discarded
            let _ = tx.send(result);
        });

        LoadHandle { state, rx }
    }

    /// Load both files synchronously on the calling thread.
    ///
    /// Blocking variant for callers without a runtime.
    pub fn load_sync<P: AsRef<Path>>(
        index_path: P,
        names_path: P,
    ) -> Result<TimezoneLookup, LoadError> {
        let index = std::fs::read(index_path)?;
        let names_text = std::fs::read_to_string(names_path)?;
        build_engine(index, &names_text)
    }
}

/// Handle to an in-flight background load.
pub struct LoadHandle {
    state: Arc<AtomicU8>,
    rx: oneshot::Receiver<Result<TimezoneLookup, LoadError>>,
}

impl LoadHandle {
    /// Current lifecycle phase of the load.
    pub fn state(&self) -> LoadState {
        LoadState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Wait for completion and take ownership of the built engine.
    pub async fn ready(self) -> Result<TimezoneLookup, LoadError> {
        self.rx.await.map_err(|_| LoadError::Cancelled)?
    }
}

async fn load_files(index_path: &Path, names_path: &Path) -> Result<TimezoneLookup, LoadError> {
    let index = tokio::fs::read(index_path).await?;
    let names_text = tokio::fs::read_to_string(names_path).await?;
    build_engine(index, &names_text)
}

/// Validate gross shape and assemble the engine.
fn build_engine(index: Vec<u8>, names_text: &str) -> Result<TimezoneLookup, LoadError> {
    if index.len() % RECORD_WIDTH != 0 {
        return Err(LoadError::TruncatedIndex { len: index.len() });
    }

    let names: Vec<String> = names_text.lines().map(str::to_owned).collect();
    if names.is_empty() {
        return Err(LoadError::EmptyNameTable);
    }

    let engine = TimezoneLookup::from_parts(index, names);
    info!(
        records = engine.record_count(),
        zones = engine.zone_count(),
        "timezone data loaded"
    );
    Ok(engine)
}
