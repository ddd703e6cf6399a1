use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::GRID;

pub const MAX_LEVEL: u8 = 4;

/// Authoritative level -> commit-count range table. Both the renderer and
/// the persistence layer go through this; nothing else defines ranges.
pub const LEVEL_RANGES: [(u32, u32); 5] = [(0, 0), (1, 5), (6, 10), (11, 15), (16, 20)];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("day number {0} is outside 1..={max}", max = day_count())]
pub struct InvalidDayNumber(pub u32);

/// One persisted row of the chart file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityRecord {
    #[serde(rename = "Day Number")]
    pub day_number: u32,
    #[serde(rename = "Min Commits")]
    pub min_commits: u32,
    #[serde(rename = "Max Commits")]
    pub max_commits: u32,
}

impl ActivityRecord {
    pub fn for_level(day_number: u32, level: u8) -> Self {
        let (min_commits, max_commits) = level_range(level);
        Self {
            day_number,
            min_commits,
            max_commits,
        }
    }

    pub fn level(&self) -> u8 {
        classify_min(self.min_commits)
    }
}

pub const fn day_count() -> u32 {
    (GRID.width * GRID.height) as u32
}

/// 1-based day number for a cell, counting down each week column before
/// moving to the next one.
pub fn day_number(column: usize, row: usize) -> u32 {
    (row + column * GRID.height + 1) as u32
}

/// Inverse of `day_number`. Rejects day numbers that fall outside the chart.
pub fn day_coords(day_number: u32) -> Result<(usize, usize), InvalidDayNumber> {
    if day_number < 1 || day_number > day_count() {
        return Err(InvalidDayNumber(day_number));
    }
    let zero_based = (day_number - 1) as usize;
    Ok((zero_based / GRID.height, zero_based % GRID.height))
}

pub fn level_range(level: u8) -> (u32, u32) {
    LEVEL_RANGES[level.min(MAX_LEVEL) as usize]
}

/// Classifies a persisted record back to a level from its minimum commit
/// count alone. Deliberately looser than `level_range` on the top bucket:
/// any min above 15 is level 4, so externally produced files whose maxima
/// disagree with ours still load.
pub fn classify_min(min_commits: u32) -> u8 {
    match min_commits {
        0 => 0,
        1..=5 => 1,
        6..=10 => 2,
        11..=15 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_number_counts_columns_outer() {
        assert_eq!(day_number(0, 0), 1);
        assert_eq!(day_number(0, 6), 7);
        assert_eq!(day_number(1, 0), 8);
        assert_eq!(day_number(51, 6), 364);
    }

    #[test]
    fn test_day_coords_round_trip_is_bijective() {
        for day in 1..=day_count() {
            let (column, row) = day_coords(day).unwrap();
            assert!(column < GRID.width);
            assert!(row < GRID.height);
            assert_eq!(day_number(column, row), day);
        }
    }

    #[test]
    fn test_day_coords_rejects_out_of_chart() {
        assert_eq!(day_coords(0), Err(InvalidDayNumber(0)));
        assert_eq!(day_coords(365), Err(InvalidDayNumber(365)));
        assert_eq!(day_coords(u32::MAX), Err(InvalidDayNumber(u32::MAX)));
    }

    #[test]
    fn test_level_table_round_trips_through_min() {
        for level in 0..=MAX_LEVEL {
            let (min, max) = level_range(level);
            assert!(min <= max);
            assert_eq!(classify_min(min), level);
        }
    }

    #[test]
    fn test_classify_min_top_bucket_is_open_ended() {
        // Encode emits max 20 for level 4, but any min above 15 classifies
        // as level 4, including values we never emit ourselves.
        assert_eq!(classify_min(16), 4);
        assert_eq!(classify_min(20), 4);
        assert_eq!(classify_min(9999), 4);
    }

    #[test]
    fn test_record_level_ignores_max() {
        let record = ActivityRecord {
            day_number: 12,
            min_commits: 3,
            max_commits: 100,
        };
        assert_eq!(record.level(), 1);
    }

    #[test]
    fn test_for_level_uses_the_table() {
        let record = ActivityRecord::for_level(1, 4);
        assert_eq!(record.min_commits, 16);
        assert_eq!(record.max_commits, 20);
    }
}
