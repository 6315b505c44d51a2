//! File-based implementation of SnapshotRepository
//!
//! Each collection lives in its own JSON array file inside the data
//! directory.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use dispatch_domain::repository::SnapshotRepository;
use dispatch_types::{BoardSnapshot, Payload, Result, Trucker};
use tracing::warn;

const TRUCKERS_FILE: &str = "truckers.json";
const PAYLOADS_FILE: &str = "payloads.json";

/// File-based snapshot repository
///
/// Stores truckers and payloads in two fixed-name JSON files on disk.
pub struct FileSnapshotRepository {
    truckers_path: PathBuf,
    payloads_path: PathBuf,
}

impl FileSnapshotRepository {
    /// Create or open a repository rooted at the given data directory
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            truckers_path: data_dir.join(TRUCKERS_FILE),
            payloads_path: data_dir.join(PAYLOADS_FILE),
        })
    }

    /// Read one collection file; unparseable content reads as absent
    fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
        if !path.exists() {
            return Ok(None);
        }
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                warn!("discarding unparseable snapshot {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    fn write_collection<T: serde::Serialize>(path: &Path, items: &[T]) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, items)?;
        Ok(())
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> Result<Option<BoardSnapshot>> {
        let truckers = Self::read_collection::<Trucker>(&self.truckers_path)?;
        let payloads = Self::read_collection::<Payload>(&self.payloads_path)?;
        match (truckers, payloads) {
            (Some(truckers), Some(payloads)) => Ok(Some(BoardSnapshot { truckers, payloads })),
            _ => Ok(None),
        }
    }

    fn save(&self, truckers: &[Trucker], payloads: &[Payload]) -> Result<()> {
        Self::write_collection(&self.truckers_path, truckers)?;
        Self::write_collection(&self.payloads_path, payloads)?;
        Ok(())
    }
}
