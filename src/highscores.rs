//! Persisted high score
//!
//! A single non-negative integer, stored as base-10 text in a file
//! (`highscore.txt` by default).

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Why the high score could not be read or written
#[derive(Debug)]
pub enum HighScoreError {
    Io(io::Error),
    /// The store exists but does not hold a valid integer
    Malformed(String),
}

impl fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighScoreError::Io(e) => write!(f, "high score I/O failed: {}", e),
            HighScoreError::Malformed(text) => {
                write!(f, "high score is not a valid integer: {:?}", text)
            }
        }
    }
}

impl std::error::Error for HighScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HighScoreError::Io(e) => Some(e),
            HighScoreError::Malformed(_) => None,
        }
    }
}

impl From<io::Error> for HighScoreError {
    fn from(e: io::Error) -> Self {
        HighScoreError::Io(e)
    }
}

/// Where the all-time high score lives
pub trait ScoreStore {
    /// Stored value, or 0 if nothing was ever saved
    fn load(&self) -> Result<u32, HighScoreError>;

    /// Overwrite the stored value
    fn save(&mut self, score: u32) -> Result<(), HighScoreError>;
}

/// Load the high score, treating any failure as "no previous high score"
pub fn load_or_default<S: ScoreStore + ?Sized>(store: &S) -> u32 {
    match store.load() {
        Ok(score) => {
            log::info!("Loaded high score {}", score);
            score
        }
        Err(e) => {
            log::warn!("Ignoring stored high score: {}", e);
            0
        }
    }
}

/// Parse the text form of a high score
pub fn parse_score(text: &str) -> Result<u32, HighScoreError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| HighScoreError::Malformed(trimmed.to_string()))
}

/// High score kept in a text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<u32, HighScoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => parse_score(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score file at {}", self.path.display());
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        std::fs::write(&self.path, score.to_string())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store (tests, or running without a writable directory)
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub score: Option<u32>,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            score: Some(score),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32, HighScoreError> {
        Ok(self.score.unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        self.score = Some(score);
        self.saves += 1;
        Ok(())
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> Result<u32, HighScoreError> {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        (**self).save(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unique scratch path under the system temp dir
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "bouncing-ball-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("highscore.txt")
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("roundtrip");
        let mut store = FileScoreStore::new(&path);
        store.save(42).unwrap();
        assert_eq!(store.load().unwrap(), 42);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "42");
    }

    #[test]
    fn test_save_overwrites() {
        let path = scratch("overwrite");
        let mut store = FileScoreStore::new(&path);
        store.save(1234).unwrap();
        store.save(7).unwrap();
        assert_eq!(store.load().unwrap(), 7);
    }

    #[test]
    fn test_missing_file_is_zero() {
        let path = scratch("missing");
        let _ = std::fs::remove_file(&path);
        let store = FileScoreStore::new(&path);
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        assert_eq!(parse_score(" 15\n").unwrap(), 15);
    }

    #[test]
    fn test_malformed_file() {
        let path = scratch("malformed");
        std::fs::write(&path, "lots").unwrap();
        let store = FileScoreStore::new(&path);
        assert!(matches!(store.load(), Err(HighScoreError::Malformed(_))));
        assert_eq!(load_or_default(&store), 0);
    }

    #[test]
    fn test_negative_is_malformed() {
        assert!(matches!(parse_score("-3"), Err(HighScoreError::Malformed(_))));
    }

    #[test]
    fn test_unreadable_store_degrades_to_zero() {
        // A directory where the file should be
        let path = scratch("is-a-dir");
        let _ = std::fs::remove_file(&path);
        std::fs::create_dir_all(&path).unwrap();
        let mut store = FileScoreStore::new(&path);
        assert!(store.load().is_err());
        assert_eq!(load_or_default(&store), 0);
        assert!(matches!(store.save(3), Err(HighScoreError::Io(_))));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryScoreStore::with_score(10);
        assert_eq!(store.load().unwrap(), 10);
        store.save(37).unwrap();
        assert_eq!(store.load().unwrap(), 37);
        assert_eq!(store.saves, 1);
        assert_eq!(MemoryScoreStore::new().load().unwrap(), 0);
    }
}
