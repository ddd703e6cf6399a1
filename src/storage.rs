use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::Local;
use thiserror::Error;

use crate::{
    codec::{self, ActivityRecord},
    grid::LevelGrid,
};

const BACKUPS_KEPT: usize = 10;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("chart file not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("record {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Reads a chart file into a fresh grid. The caller's live grid is never
/// touched: any malformed record rejects the whole load and the partially
/// built replacement is simply dropped.
pub fn load_chart(path: &Path) -> Result<LevelGrid, StorageError> {
    if !path.exists() {
        return Err(StorageError::SourceNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| StorageError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut grid = LevelGrid::new();

    for (index, result) in reader.deserialize::<ActivityRecord>().enumerate() {
        let record = result.map_err(|e| StorageError::MalformedRecord {
            index: index + 1,
            reason: e.to_string(),
        })?;
        let (column, row) =
            codec::day_coords(record.day_number).map_err(|e| StorageError::MalformedRecord {
                index: index + 1,
                reason: e.to_string(),
            })?;
        grid.set_level(column, row, record.level());
    }

    Ok(grid)
}

/// Writes all 364 records in ascending day order, replacing the file
/// atomically.
pub fn save_chart(path: &Path, grid: &LevelGrid) -> Result<(), StorageError> {
    let write_failure = |source: io::Error| StorageError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    for (column, row, level) in grid.cells_by_day() {
        let record = ActivityRecord::for_level(codec::day_number(column, row), level);
        writer
            .serialize(record)
            .map_err(|e| write_failure(io::Error::other(e)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| write_failure(e.into_error()))?;

    atomic_write(path, &bytes).map_err(write_failure)
}

fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    if path.exists() {
        create_backup(path)?;
    }

    let tmp_path = path.with_extension("tmp");
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(content)?;
    tmp_file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn create_backup(path: &Path) -> io::Result<()> {
    let backup_dir = path.parent().unwrap_or(Path::new(".")).join("backups");
    fs::create_dir_all(&backup_dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!(
        "{}.{}",
        path.file_name().unwrap_or_default().to_string_lossy(),
        timestamp
    );
    fs::copy(path, backup_dir.join(&filename))?;

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    if let Ok(entries) = fs::read_dir(&backup_dir) {
        let mut backups: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(&*stem))
            .collect();
        backups.sort_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()));

        while backups.len() > BACKUPS_KEPT {
            let oldest = backups.remove(0);
            let _ = fs::remove_file(oldest.path());
        }
    }

    Ok(())
}
