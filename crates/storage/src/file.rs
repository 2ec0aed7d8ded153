//! File-backed blob store for the workout log.
//!
//! The whole log lives under a single path as one JSON document, mirroring
//! the single-storage-key convention of the client. A missing file loads as
//! the empty log; reads run the legacy-shape normalization.

use std::{fs, io, path::PathBuf};

use log::debug;

use gymlog_domain::{LogRepository, ReadError, StorageError, WorkoutLog, WriteError};

use crate::document::Document;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogRepository for FileStore {
    fn load(&self) -> Result<WorkoutLog, ReadError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no workout log at {}, starting empty", self.path.display());
                return Ok(WorkoutLog::default());
            }
            Err(err) => return Err(StorageError::Other(Box::new(err)).into()),
        };
        let document =
            Document::parse(&data).map_err(|err| StorageError::Other(Box::new(err)))?;
        WorkoutLog::try_from(document).map_err(|err| StorageError::Other(Box::new(err)).into())
    }

    fn save(&self, log: &WorkoutLog) -> Result<(), WriteError> {
        let data = serde_json::to_string(&Document::from(log))
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        fs::write(&self.path, data).map_err(|err| StorageError::Other(Box::new(err)).into())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use gymlog_domain::{Name, Reps, Set, Weight};

    use super::*;

    struct TempPath(PathBuf);

    impl TempPath {
        fn new(name: &str) -> Self {
            Self(
                std::env::temp_dir()
                    .join(format!("gymlog-file-store-{}-{name}.json", std::process::id())),
            )
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_load_missing_file_yields_empty_log() {
        let path = TempPath::new("missing");
        let store = FileStore::new(path.path());
        assert_eq!(store.load().unwrap(), WorkoutLog::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = TempPath::new("round-trip");
        let store = FileStore::new(path.path());

        let log = WorkoutLog::default();
        let (log, workout_id) = log.add_workout(Name::new("Push Day").unwrap(), "4/4/2025".to_string());
        let (log, exercise_id) = log.add_exercise(workout_id, Name::new("Bench Press").unwrap());
        let log = log.add_set(
            workout_id,
            exercise_id,
            Set {
                weight: Weight::new(185.0).unwrap(),
                reps: Reps::new(10),
                recorded_at: "10:30 am".to_string(),
            },
        );

        store.save(&log).unwrap();
        assert_eq!(store.load().unwrap(), log);
    }

    #[test]
    fn test_load_legacy_shape() {
        let path = TempPath::new("legacy");
        fs::write(
            path.path(),
            r#"[{"id": "1", "name": "Push Day", "date": "4/4/2025", "exercises": []}]"#,
        )
        .unwrap();

        let store = FileStore::new(path.path());
        let log = store.load().unwrap();
        assert_eq!(log.workouts.len(), 1);
        assert_eq!(log.workouts[0].name, Name::new("Push Day").unwrap());
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let path = TempPath::new("corrupt");
        fs::write(path.path(), "not json").unwrap();

        let store = FileStore::new(path.path());
        assert!(store.load().is_err());
    }
}
