use std::{
    sync::atomic::{AtomicI64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use derive_more::{Display, Into};

use crate::{Name, Reps, Weight};

/// One performed repetition group. A set has no id of its own; its identity
/// is its position within the owning exercise's sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub weight: Weight,
    pub reps: Reps,
    pub recorded_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub sets: Vec<Set>,
    pub logged_date: String,
}

/// A named, dated session. The id is a millisecond-epoch token and is the
/// authoritative chronological sort key; `date` is a human label which may
/// differ from the moment of creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub date: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(i64);

impl WorkoutID {
    #[must_use]
    pub fn now() -> Self {
        Self(mint_id())
    }
}

impl From<i64> for WorkoutID {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for WorkoutID {
    type Error = IDError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<i64>().map(Self).map_err(|_| IDError::ParseError)
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(i64);

impl ExerciseID {
    #[must_use]
    pub fn now() -> Self {
        Self(mint_id())
    }
}

impl From<i64> for ExerciseID {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for ExerciseID {
    type Error = IDError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<i64>().map(Self).map_err(|_| IDError::ParseError)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IDError {
    #[error("ID must be an integer")]
    ParseError,
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Mints a millisecond-epoch id that is strictly greater than every id
/// minted before it in this process. Ids stay comparable to wall-clock
/// millis, but consecutive mutations within the same millisecond still get
/// distinct values.
fn mint_id() -> i64 {
    let now = epoch_millis();
    let last = LAST_ID
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    now.max(last + 1)
}

#[allow(clippy::cast_possible_truncation)]
fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis() as i64)
}

/// The full in-memory workout log and the unit of persistence.
///
/// All mutators are pure copy-on-write transformations: they leave `self`
/// untouched and return the next state, so consumers holding a previous
/// reference never observe a torn intermediate state. Not-found targets are
/// silent no-ops (state returned unchanged).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutLog {
    pub workouts: Vec<Workout>,
}

impl WorkoutLog {
    /// Appends a new workout with a fresh id and no exercises. Display
    /// ordering (newest first) is a concern of the consuming layer.
    #[must_use]
    pub fn add_workout(&self, name: Name, date: String) -> (WorkoutLog, WorkoutID) {
        let id = WorkoutID::now();
        let mut workouts = self.workouts.clone();
        workouts.push(Workout {
            id,
            name,
            date,
            exercises: vec![],
        });
        (WorkoutLog { workouts }, id)
    }

    /// Removes the workout with the given id, cascading to its exercises
    /// and sets.
    #[must_use]
    pub fn delete_workout(&self, id: WorkoutID) -> WorkoutLog {
        WorkoutLog {
            workouts: self
                .workouts
                .iter()
                .filter(|workout| workout.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Appends a new exercise with a fresh id and no sets to the given
    /// workout. The exercise inherits the workout's date label.
    #[must_use]
    pub fn add_exercise(&self, workout_id: WorkoutID, name: Name) -> (WorkoutLog, ExerciseID) {
        let id = ExerciseID::now();
        let log = self.with_workout(workout_id, |workout| {
            let mut exercises = workout.exercises.clone();
            exercises.push(Exercise {
                id,
                name: name.clone(),
                sets: vec![],
                logged_date: workout.date.clone(),
            });
            Workout {
                exercises,
                ..workout.clone()
            }
        });
        (log, id)
    }

    #[must_use]
    pub fn delete_exercise(&self, workout_id: WorkoutID, exercise_id: ExerciseID) -> WorkoutLog {
        self.with_workout(workout_id, |workout| Workout {
            exercises: workout
                .exercises
                .iter()
                .filter(|exercise| exercise.id != exercise_id)
                .cloned()
                .collect(),
            ..workout.clone()
        })
    }

    #[must_use]
    pub fn add_set(&self, workout_id: WorkoutID, exercise_id: ExerciseID, set: Set) -> WorkoutLog {
        self.with_exercise(workout_id, exercise_id, |exercise| {
            let mut sets = exercise.sets.clone();
            sets.push(set.clone());
            Exercise {
                sets,
                ..exercise.clone()
            }
        })
    }

    /// Removes a set by position. An out-of-range index is a silent no-op.
    #[must_use]
    pub fn delete_set(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        index: usize,
    ) -> WorkoutLog {
        self.with_exercise(workout_id, exercise_id, |exercise| {
            let mut sets = exercise.sets.clone();
            if index < sets.len() {
                sets.remove(index);
            }
            Exercise {
                sets,
                ..exercise.clone()
            }
        })
    }

    /// Empties one workout's exercises. Discarded sets are not archived.
    #[must_use]
    pub fn clear_exercises(&self, workout_id: WorkoutID) -> WorkoutLog {
        self.with_workout(workout_id, |workout| Workout {
            exercises: vec![],
            ..workout.clone()
        })
    }

    fn with_workout(&self, id: WorkoutID, f: impl Fn(&Workout) -> Workout) -> WorkoutLog {
        WorkoutLog {
            workouts: self
                .workouts
                .iter()
                .map(|workout| {
                    if workout.id == id {
                        f(workout)
                    } else {
                        workout.clone()
                    }
                })
                .collect(),
        }
    }

    fn with_exercise(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        f: impl Fn(&Exercise) -> Exercise,
    ) -> WorkoutLog {
        self.with_workout(workout_id, |workout| Workout {
            exercises: workout
                .exercises
                .iter()
                .map(|exercise| {
                    if exercise.id == exercise_id {
                        f(exercise)
                    } else {
                        exercise.clone()
                    }
                })
                .collect(),
            ..workout.clone()
        })
    }
}
