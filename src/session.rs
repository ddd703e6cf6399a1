use std::path::{Path, PathBuf};

use crate::{
    grid::LevelGrid,
    storage::{self, StorageError},
};

/// Owns the one live grid and the chart path it syncs with. All painting,
/// saving and loading in the editor funnels through here.
pub struct ChartSession {
    grid: LevelGrid,
    path: PathBuf,
}

impl ChartSession {
    pub fn new(path: PathBuf) -> Self {
        Self {
            grid: LevelGrid::new(),
            path,
        }
    }

    pub fn grid(&self) -> &LevelGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut LevelGrid {
        &mut self.grid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), StorageError> {
        storage::save_chart(&self.path, &self.grid)
    }

    /// Replaces the live grid with the chart on disk. The replacement is
    /// fully built off to the side first, so any failure leaves the live
    /// grid exactly as it was. Confirming the destructive swap is the
    /// caller's job.
    pub fn load(&mut self) -> Result<(), StorageError> {
        self.grid = storage::load_chart(&self.path)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.grid.reset();
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, time::SystemTime};

    use super::*;

    fn unique_chart_path(prefix: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = PathBuf::from(format!("/tmp/hatch_session_{}_{}", prefix, now));
        fs::create_dir_all(&dir).unwrap();
        dir.join("commits.csv")
    }

    #[test]
    fn test_save_then_load_reproduces_the_grid() {
        let path = unique_chart_path("roundtrip");
        let mut session = ChartSession::new(path.clone());

        for (i, (column, row, _)) in LevelGrid::new().cells_by_day().enumerate() {
            session.grid_mut().set_level(column, row, (i % 5) as u8);
        }
        let painted = session.grid().clone();

        session.save().unwrap();
        session.clear();
        assert_ne!(*session.grid(), painted);

        session.load().unwrap();
        assert_eq!(*session.grid(), painted);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_failed_load_leaves_live_grid_untouched() {
        let path = unique_chart_path("partial");
        fs::write(
            &path,
            "Day Number,Min Commits,Max Commits\n1,16,20\n999,1,5\n",
        )
        .unwrap();

        let mut session = ChartSession::new(path.clone());
        session.grid_mut().set_level(5, 5, 3);
        let before = session.grid().clone();

        assert!(session.load().is_err());
        assert_eq!(*session.grid(), before);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_missing_chart_reports_source_not_found() {
        let mut session = ChartSession::new(PathBuf::from("/tmp/hatch_session_missing/nope.csv"));
        assert!(matches!(
            session.load(),
            Err(StorageError::SourceNotFound(_))
        ));
    }

    #[test]
    fn test_clear_zeroes_the_grid() {
        let mut session = ChartSession::new(PathBuf::from("/tmp/unused.csv"));
        session.grid_mut().set_level(1, 1, 4);
        session.clear();
        assert_eq!(*session.grid(), LevelGrid::new());
    }
}
