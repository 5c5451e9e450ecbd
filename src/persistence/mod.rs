//! Best score persistence
//!
//! Features:
//! - Versionless JSON record (`{"best_score": N}`)
//! - Atomic writes (tmp → rename)
//! - Missing/empty file recreated as a zero record
//! - Corruption and I/O failures degrade to 0 with a warning

use std::cell::Cell;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Default file name for the best score record
pub const SCORE_FILE_NAME: &str = "bestScore.json";

/// Load/save contract for the best score. Implementations never fail outward.
pub trait ScoreStore {
    /// Best raw score, or 0 when nothing usable is stored
    fn load_best_score(&mut self) -> u64;
    /// Persist a new best raw score
    fn save_best_score(&mut self, score: u64);
}

/// Persistence failure (always handled internally)
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Corrupt(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "score file I/O failed: {err}"),
            Self::Corrupt(err) => write!(f, "score file is corrupt: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err)
    }
}

/// On-disk record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u64,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's home directory (falls back to the working directory)
    pub fn in_home_dir() -> Self {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(SCORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file is missing or empty
    fn read(&self) -> Result<Option<u64>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let record: BestScoreRecord = serde_json::from_slice(&bytes)?;
        Ok(Some(record.best_score))
    }

    fn write(&self, score: u64) -> Result<(), StoreError> {
        let json = serde_json::to_vec(&BestScoreRecord { best_score: score })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load_best_score(&mut self) -> u64 {
        match self.read() {
            Ok(Some(score)) => score,
            Ok(None) => {
                log::info!("No best score at {}, creating one", self.path.display());
                self.save_best_score(0);
                0
            }
            Err(err @ StoreError::Corrupt(_)) => {
                log::warn!("{} ({}), starting a fresh record", err, self.path.display());
                self.save_best_score(0);
                0
            }
            Err(err) => {
                log::warn!("{} ({}), best score reset to 0", err, self.path.display());
                0
            }
        }
    }

    fn save_best_score(&mut self, score: u64) {
        if let Err(err) = self.write(score) {
            log::warn!("Failed to save best score to {}: {}", self.path.display(), err);
        }
    }
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: Rc<Cell<u64>>,
    saves: Rc<Cell<u32>>,
}

impl MemoryScoreStore {
    pub fn with_best(best: u64) -> Self {
        let store = Self::default();
        store.best.set(best);
        store
    }

    pub fn best(&self) -> u64 {
        self.best.get()
    }

    /// Number of saves performed through any clone
    pub fn saves(&self) -> u32 {
        self.saves.get()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best_score(&mut self) -> u64 {
        self.best.get()
    }

    fn save_best_score(&mut self, score: u64) {
        self.best.set(score);
        self.saves.set(self.saves.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ufo-dash-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir.join(SCORE_FILE_NAME)
    }

    #[test]
    fn test_round_trip_across_instances() {
        let path = scratch_path("round-trip");
        FileScoreStore::new(&path).save_best_score(42);

        let mut fresh = FileScoreStore::new(&path);
        assert_eq!(fresh.load_best_score(), 42);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_creates_zero_record() {
        let path = scratch_path("missing");
        let _ = fs::remove_file(&path);

        let mut store = FileScoreStore::new(&path);
        assert_eq!(store.load_best_score(), 0);
        assert!(path.exists());
        assert_eq!(FileScoreStore::new(&path).load_best_score(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_empty_file_treated_as_missing() {
        let path = scratch_path("empty");
        fs::write(&path, b"").expect("write empty");
        assert_eq!(FileScoreStore::new(&path).load_best_score(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_degrades_to_zero() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"\xac\xed\x00\x05garbage").expect("write garbage");
        assert_eq!(FileScoreStore::new(&path).load_best_score(), 0);
        // Replaced by a readable zero record
        assert!(matches!(FileScoreStore::new(&path).read(), Ok(Some(0))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_location_does_not_panic() {
        let path = scratch_path("unwritable").join("no-such-dir").join("best.json");
        let mut store = FileScoreStore::new(&path);
        store.save_best_score(9);
        assert_eq!(store.load_best_score(), 0);
    }

    #[test]
    fn test_memory_store_shares_slot() {
        let store = MemoryScoreStore::with_best(5);
        let mut handle = store.clone();
        assert_eq!(handle.load_best_score(), 5);
        handle.save_best_score(8);
        assert_eq!(store.best(), 8);
        assert_eq!(store.saves(), 1);
    }
}
