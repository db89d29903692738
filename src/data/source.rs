//! Data source reader
//!
//! Opens the two data files once, then rewinds and re-parses them before
//! every generation pass. Nothing is cached between passes, so edits to the
//! files are picked up on the next itinerary without restarting. Handles
//! are closed when the source is dropped.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::data::record::{ActivityRecord, LocationRecord};
use crate::planner::error::{PlannerError, PlannerResult};

/// Parsed contents of both data files for one generation pass
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All attraction records, in file order
    pub locations: Vec<LocationRecord>,
    /// All activity records, in file order
    pub activities: Vec<ActivityRecord>,
}

/// Reader over the locations and activities data files
#[derive(Debug)]
pub struct DataSource {
    locations_path: PathBuf,
    locations_file: File,
    activities_path: PathBuf,
    activities_file: File,
}

impl DataSource {
    /// Open both data files
    pub fn open(
        locations_path: impl AsRef<Path>,
        activities_path: impl AsRef<Path>,
    ) -> PlannerResult<Self> {
        let locations_path = locations_path.as_ref().to_path_buf();
        let activities_path = activities_path.as_ref().to_path_buf();

        let locations_file = File::open(&locations_path).map_err(|source| {
            PlannerError::DataFileUnreadable {
                path: locations_path.display().to_string(),
                source,
            }
        })?;
        let activities_file = File::open(&activities_path).map_err(|source| {
            PlannerError::DataFileUnreadable {
                path: activities_path.display().to_string(),
                source,
            }
        })?;

        Ok(Self { locations_path, locations_file, activities_path, activities_file })
    }

    /// Rewind both files and parse them into a fresh catalog
    pub fn load(&mut self) -> PlannerResult<Catalog> {
        self.locations_file.rewind().map_err(|source| PlannerError::DataFileUnreadable {
            path: self.locations_path.display().to_string(),
            source,
        })?;
        self.activities_file.rewind().map_err(|source| PlannerError::DataFileUnreadable {
            path: self.activities_path.display().to_string(),
            source,
        })?;

        let locations =
            parse_lines(&self.locations_path, &self.locations_file, LocationRecord::parse)?;
        let activities =
            parse_lines(&self.activities_path, &self.activities_file, ActivityRecord::parse)?;

        debug!(
            locations = locations.len(),
            activities = activities.len(),
            "loaded data catalog"
        );

        Ok(Catalog { locations, activities })
    }

    /// Path of the locations file
    pub fn locations_path(&self) -> &Path {
        &self.locations_path
    }

    /// Path of the activities file
    pub fn activities_path(&self) -> &Path {
        &self.activities_path
    }
}

/// Parse every non-blank line of a file with the given record parser,
/// attaching path and 1-based line number to failures
fn parse_lines<T>(
    path: &Path,
    file: &File,
    parse: impl Fn(&str) -> Result<T, String>,
) -> PlannerResult<Vec<T>> {
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PlannerError::DataFileUnreadable {
            path: path.display().to_string(),
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let record = parse(&line).map_err(|reason| PlannerError::DataFileMalformed {
            path: path.display().to_string(),
            line: index + 1,
            reason,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Destination, LocationCategory};
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn test_load_parses_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let locations = write_file(
            &dir,
            "locations.txt",
            "France|urban_attraction|the Louvre\n\nFrance|natural_attraction|the Calanques\n",
        );
        let activities =
            write_file(&dir, "activities.txt", "#cultural|Day #: visit urban_attraction.\n");

        let mut source = DataSource::open(&locations, &activities).unwrap();
        let catalog = source.load().unwrap();

        // Blank line is skipped
        assert_eq!(catalog.locations.len(), 2);
        assert_eq!(catalog.locations[0].destination, Destination::France);
        assert_eq!(catalog.locations[1].category, LocationCategory::Natural);
        assert_eq!(catalog.activities.len(), 1);
    }

    #[test]
    fn test_load_is_repeatable_after_rewind() {
        let dir = tempfile::tempdir().unwrap();
        let locations = write_file(&dir, "locations.txt", "Italy|urban_attraction|the Colosseum\n");
        let activities = write_file(&dir, "activities.txt", "#cultural|Day #: wander.\n");

        let mut source = DataSource::open(&locations, &activities).unwrap();
        let first = source.load().unwrap();
        let second = source.load().unwrap();

        // A second pass re-reads from the start rather than continuing at EOF
        assert_eq!(first.locations.len(), second.locations.len());
        assert_eq!(first.activities.len(), second.activities.len());
    }

    #[test]
    fn test_open_missing_file_is_unreadable_error() {
        let dir = tempfile::tempdir().unwrap();
        let activities = write_file(&dir, "activities.txt", "#cultural|Day #: wander.\n");

        let result = DataSource::open(dir.path().join("nope.txt"), &activities);
        assert!(matches!(result, Err(PlannerError::DataFileUnreadable { .. })));
    }

    #[test]
    fn test_malformed_line_reports_path_and_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let locations = write_file(
            &dir,
            "locations.txt",
            "Italy|urban_attraction|the Colosseum\nItaly|broken\n",
        );
        let activities = write_file(&dir, "activities.txt", "#cultural|Day #: wander.\n");

        let mut source = DataSource::open(&locations, &activities).unwrap();
        match source.load() {
            Err(PlannerError::DataFileMalformed { path, line, .. }) => {
                assert!(path.ends_with("locations.txt"));
                assert_eq!(line, 2);
            }
            other => panic!("expected DataFileMalformed, got {:?}", other),
        }
    }
}
