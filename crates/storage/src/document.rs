//! The persisted JSON document and its mapping onto the domain model.
//!
//! The current shape wraps the workout array in an object:
//! `{"workouts": [...]}`. An earlier schema persisted the bare array;
//! [`Document::parse`] accepts both and normalizes to the wrapped shape,
//! while serialization always writes the wrapped shape. Ids are decimal
//! strings on the wire and integers in the domain.

use serde::{Deserialize, Serialize};

use gymlog_domain::{
    Exercise, ExerciseID, IDError, Name, NameError, Reps, Set, Weight, WeightError, Workout,
    WorkoutID, WorkoutLog,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub workouts: Vec<WorkoutRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub id: String,
    pub name: String,
    pub date: String,
    pub exercises: Vec<ExerciseRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseRecord {
    pub id: String,
    pub name: String,
    pub sets: Vec<SetRecord>,
    pub date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetRecord {
    pub reps: u32,
    pub weight: f64,
    pub date: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Wrapped(Document),
    Legacy(Vec<WorkoutRecord>),
}

impl Document {
    pub fn parse(data: &str) -> Result<Document, DocumentError> {
        match serde_json::from_str::<StoredDocument>(data)? {
            StoredDocument::Wrapped(document) => Ok(document),
            StoredDocument::Legacy(workouts) => Ok(Document { workouts }),
        }
    }
}

impl From<&WorkoutLog> for Document {
    fn from(log: &WorkoutLog) -> Self {
        Document {
            workouts: log.workouts.iter().map(workout_record).collect(),
        }
    }
}

impl TryFrom<Document> for WorkoutLog {
    type Error = DocumentError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        Ok(WorkoutLog {
            workouts: document
                .workouts
                .into_iter()
                .map(workout)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

fn workout_record(workout: &Workout) -> WorkoutRecord {
    WorkoutRecord {
        id: workout.id.to_string(),
        name: workout.name.to_string(),
        date: workout.date.clone(),
        exercises: workout
            .exercises
            .iter()
            .map(|exercise| ExerciseRecord {
                id: exercise.id.to_string(),
                name: exercise.name.to_string(),
                sets: exercise
                    .sets
                    .iter()
                    .map(|set| SetRecord {
                        reps: u32::from(set.reps),
                        weight: f64::from(set.weight),
                        date: set.recorded_at.clone(),
                    })
                    .collect(),
                date: exercise.logged_date.clone(),
            })
            .collect(),
    }
}

fn workout(record: WorkoutRecord) -> Result<Workout, DocumentError> {
    Ok(Workout {
        id: WorkoutID::try_from(record.id.as_str())?,
        name: Name::new(&record.name)?,
        date: record.date,
        exercises: record
            .exercises
            .into_iter()
            .map(exercise)
            .collect::<Result<Vec<_>, _>>()?,
    })
}

fn exercise(record: ExerciseRecord) -> Result<Exercise, DocumentError> {
    Ok(Exercise {
        id: ExerciseID::try_from(record.id.as_str())?,
        name: Name::new(&record.name)?,
        sets: record
            .sets
            .into_iter()
            .map(|set| {
                Ok(Set {
                    weight: Weight::new(set.weight)?,
                    reps: Reps::new(set.reps),
                    recorded_at: set.date,
                })
            })
            .collect::<Result<Vec<_>, DocumentError>>()?,
        logged_date: record.date,
    })
}

#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid id: {0}")]
    ID(#[from] IDError),
    #[error("invalid name: {0}")]
    Name(#[from] NameError),
    #[error("invalid weight: {0}")]
    Weight(#[from] WeightError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const WRAPPED: &str = r#"{
        "workouts": [
            {
                "id": "1743792000000",
                "name": "Push Day",
                "date": "4/4/2025",
                "exercises": [
                    {
                        "id": "1743792060000",
                        "name": "Bench Press",
                        "sets": [
                            {"reps": 10, "weight": 185.0, "date": "10:30 am"},
                            {"reps": 8, "weight": 195.0, "date": "10:35 am"}
                        ],
                        "date": "4/4/2025"
                    }
                ]
            }
        ]
    }"#;

    const LEGACY: &str = r#"[
        {
            "id": "1743792000000",
            "name": "Push Day",
            "date": "4/4/2025",
            "exercises": [
                {
                    "id": "1743792060000",
                    "name": "Bench Press",
                    "sets": [
                        {"reps": 10, "weight": 185.0, "date": "10:30 am"},
                        {"reps": 8, "weight": 195.0, "date": "10:35 am"}
                    ],
                    "date": "4/4/2025"
                }
            ]
        }
    ]"#;

    fn sample_log() -> WorkoutLog {
        WorkoutLog {
            workouts: vec![Workout {
                id: WorkoutID::from(1_743_792_000_000),
                name: Name::new("Push Day").unwrap(),
                date: "4/4/2025".to_string(),
                exercises: vec![Exercise {
                    id: ExerciseID::from(1_743_792_060_000),
                    name: Name::new("Bench Press").unwrap(),
                    sets: vec![
                        Set {
                            weight: Weight::new(185.0).unwrap(),
                            reps: Reps::new(10),
                            recorded_at: "10:30 am".to_string(),
                        },
                        Set {
                            weight: Weight::new(195.0).unwrap(),
                            reps: Reps::new(8),
                            recorded_at: "10:35 am".to_string(),
                        },
                    ],
                    logged_date: "4/4/2025".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_parse_wrapped_shape() {
        let document = Document::parse(WRAPPED).unwrap();
        assert_eq!(WorkoutLog::try_from(document).unwrap(), sample_log());
    }

    #[test]
    fn test_legacy_shape_normalizes_to_wrapped() {
        let legacy = Document::parse(LEGACY).unwrap();
        let wrapped = Document::parse(WRAPPED).unwrap();
        assert_eq!(legacy, wrapped);
    }

    #[test]
    fn test_empty_document() {
        let document = Document::parse(r#"{"workouts": []}"#).unwrap();
        assert_eq!(
            WorkoutLog::try_from(document).unwrap(),
            WorkoutLog::default()
        );
    }

    #[test]
    fn test_round_trip_is_identity() {
        let log = sample_log();
        let encoded = serde_json::to_string(&Document::from(&log)).unwrap();
        let decoded = WorkoutLog::try_from(Document::parse(&encoded).unwrap()).unwrap();
        assert_eq!(decoded, log);
    }

    #[test]
    fn test_serializes_wrapped_shape() {
        let encoded = serde_json::to_string(&Document::from(&WorkoutLog::default())).unwrap();
        assert_eq!(encoded, r#"{"workouts":[]}"#);
    }

    #[rstest]
    #[case::bad_workout_id(
        r#"{"workouts": [{"id": "first", "name": "A", "date": "4/4/2025", "exercises": []}]}"#
    )]
    #[case::empty_name(
        r#"{"workouts": [{"id": "1", "name": " ", "date": "4/4/2025", "exercises": []}]}"#
    )]
    fn test_rejects_malformed_records(#[case] data: &str) {
        let document = Document::parse(data).unwrap();
        assert!(WorkoutLog::try_from(document).is_err());
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let document = Document {
            workouts: vec![WorkoutRecord {
                id: "1".to_string(),
                name: "A".to_string(),
                date: "4/4/2025".to_string(),
                exercises: vec![ExerciseRecord {
                    id: "2".to_string(),
                    name: "B".to_string(),
                    sets: vec![SetRecord {
                        reps: 5,
                        weight: f64::NAN,
                        date: String::new(),
                    }],
                    date: "4/4/2025".to_string(),
                }],
            }],
        };
        assert!(matches!(
            WorkoutLog::try_from(document),
            Err(DocumentError::Weight(WeightError::NotFinite))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Document::parse("not json"),
            Err(DocumentError::Json(_))
        ));
    }
}
