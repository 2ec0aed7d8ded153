#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod aggregator;
pub mod date;
pub mod error;
pub mod estimator;
pub mod service;
pub mod training;
pub mod workout;

pub use aggregator::{ChartPoint, Granularity, TopLift, LEADERBOARD_SIZE, RECENT_WORKOUT_WINDOW};
pub use error::{ReadError, StorageError, WriteError};
pub use estimator::{best_set_index, one_rep_max, set_one_rep_max};
pub use service::{LogRepository, NoSync, Service, SyncBackend};
pub use training::{Name, NameError, Reps, RepsError, Weight, WeightError};
pub use workout::{Exercise, ExerciseID, IDError, Set, Workout, WorkoutID, WorkoutLog};
