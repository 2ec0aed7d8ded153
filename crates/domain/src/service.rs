//! Orchestration layer between the pure log transformations and the
//! external collaborators.
//!
//! Every mutation applies a copy-on-write mutator, saves the new state
//! through the repository and then hands it to the sync backend. Sync is
//! fire and forget: its outcome never reaches the caller. A failed save is
//! reported and leaves the in-memory state untouched.

use log::{debug, error};

use crate::{
    ChartPoint, ExerciseID, Granularity, Name, ReadError, Set, TopLift, Workout, WorkoutID,
    WorkoutLog, WriteError, aggregator,
};

pub trait LogRepository {
    fn load(&self) -> Result<WorkoutLog, ReadError>;
    fn save(&self, log: &WorkoutLog) -> Result<(), WriteError>;
}

/// Best-effort outbound sync. Implementations log failures and never
/// report them; the core's correctness must not depend on this call.
pub trait SyncBackend {
    fn push(&self, log: &WorkoutLog);
}

pub struct NoSync;

impl SyncBackend for NoSync {
    fn push(&self, _log: &WorkoutLog) {}
}

pub struct Service<R, S> {
    repository: R,
    sync: S,
    log: WorkoutLog,
}

impl<R: LogRepository, S: SyncBackend> Service<R, S> {
    pub fn new(repository: R, sync: S) -> Result<Self, ReadError> {
        let log = repository.load()?;
        debug!("loaded workout log with {} workouts", log.workouts.len());
        Ok(Self {
            repository,
            sync,
            log,
        })
    }

    #[must_use]
    pub fn log(&self) -> &WorkoutLog {
        &self.log
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.log.workouts
    }

    pub fn add_workout(&mut self, name: Name, date: String) -> Result<WorkoutID, WriteError> {
        let (log, id) = self.log.add_workout(name, date);
        self.commit(log)?;
        Ok(id)
    }

    pub fn delete_workout(&mut self, id: WorkoutID) -> Result<(), WriteError> {
        let log = self.log.delete_workout(id);
        self.commit(log)
    }

    pub fn add_exercise(
        &mut self,
        workout_id: WorkoutID,
        name: Name,
    ) -> Result<ExerciseID, WriteError> {
        let (log, id) = self.log.add_exercise(workout_id, name);
        self.commit(log)?;
        Ok(id)
    }

    pub fn delete_exercise(
        &mut self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
    ) -> Result<(), WriteError> {
        let log = self.log.delete_exercise(workout_id, exercise_id);
        self.commit(log)
    }

    pub fn add_set(
        &mut self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set: Set,
    ) -> Result<(), WriteError> {
        let log = self.log.add_set(workout_id, exercise_id, set);
        self.commit(log)
    }

    pub fn delete_set(
        &mut self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        index: usize,
    ) -> Result<(), WriteError> {
        let log = self.log.delete_set(workout_id, exercise_id, index);
        self.commit(log)
    }

    pub fn clear_exercises(&mut self, workout_id: WorkoutID) -> Result<(), WriteError> {
        let log = self.log.clear_exercises(workout_id);
        self.commit(log)
    }

    #[must_use]
    pub fn total_volume(&self) -> f64 {
        aggregator::total_volume(&self.log.workouts)
    }

    #[must_use]
    pub fn total_exercise_count(&self) -> usize {
        aggregator::total_exercise_count(&self.log.workouts)
    }

    #[must_use]
    pub fn strongest_recent_lifts(&self) -> Vec<TopLift> {
        aggregator::strongest_recent_lifts(&self.log.workouts, aggregator::RECENT_WORKOUT_WINDOW)
    }

    #[must_use]
    pub fn series_by_timeframe(&self, granularity: Granularity) -> Vec<ChartPoint> {
        aggregator::series_by_timeframe(&self.log.workouts, granularity)
    }

    #[must_use]
    pub fn exercise_progress_series(&self, exercise_name: &str) -> Vec<ChartPoint> {
        aggregator::exercise_progress_series(&self.log.workouts, exercise_name)
    }

    fn commit(&mut self, log: WorkoutLog) -> Result<(), WriteError> {
        if let Err(err) = self.repository.save(&log) {
            error!("failed to save workout log: {err}");
            return Err(err);
        }
        self.log = log;
        self.sync.push(&self.log);
        Ok(())
    }
}
