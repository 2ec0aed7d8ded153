//! Derived views over the workout log: totals, leaderboards and
//! time-bucketed chart series.
//!
//! Everything here is recomputed on demand from the current log; nothing is
//! cached or stored. All functions are total over well-formed input.

use std::{cmp::Ordering, collections::BTreeMap};

use chrono::NaiveDate;

use crate::{
    Name, Set, Workout,
    date::{day_label, month_day_label, parse_display_date, week_label, week_start},
    estimator::set_one_rep_max,
};

/// Number of entries on the strongest-lifts leaderboard. Applied after the
/// recent-workout window; the two limits are independent.
pub const LEADERBOARD_SIZE: usize = 5;

/// Default number of most recent workouts considered for the leaderboard.
pub const RECENT_WORKOUT_WINDOW: usize = 5;

/// One point of a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// One leaderboard entry: the heaviest set logged for an exercise instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TopLift {
    pub name: Name,
    pub max_weight: f64,
    pub reps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
}

/// Sum of `weight * reps` over every set, unrounded. Order-independent.
#[must_use]
pub fn total_volume(workouts: &[Workout]) -> f64 {
    workouts
        .iter()
        .flat_map(|workout| &workout.exercises)
        .flat_map(|exercise| &exercise.sets)
        .map(|set| f64::from(set.weight) * f64::from(u32::from(set.reps)))
        .sum()
}

#[must_use]
pub fn total_exercise_count(workouts: &[Workout]) -> usize {
    workouts.iter().map(|workout| workout.exercises.len()).sum()
}

/// Mean set weight formatted to one decimal place. The empty case yields
/// the string `"0"`, not `"0.0"` (established display behavior).
#[must_use]
pub fn average_weight(sets: &[Set]) -> String {
    if sets.is_empty() {
        return String::from("0");
    }

    #[allow(clippy::cast_precision_loss)]
    let average = sets.iter().map(|set| f64::from(set.weight)).sum::<f64>() / sets.len() as f64;
    format!("{average:.1}")
}

/// Leaderboard of the heaviest lifts across the most recent `window`
/// workouts.
///
/// Recency is decided by descending workout id (the creation timestamp),
/// not by the user-editable date label. Each exercise instance contributes
/// its single heaviest set by weight alone; ties keep the first set, and an
/// exercise without sets contributes a zero entry.
#[must_use]
pub fn strongest_recent_lifts(workouts: &[Workout], window: usize) -> Vec<TopLift> {
    let mut recent = workouts.iter().collect::<Vec<_>>();
    recent.sort_by(|a, b| b.id.cmp(&a.id));
    recent.truncate(window);

    let mut lifts = recent
        .iter()
        .flat_map(|workout| &workout.exercises)
        .map(|exercise| {
            let mut max_weight = 0.0;
            let mut reps = 0;
            for set in &exercise.sets {
                let weight = f64::from(set.weight);
                if weight > max_weight {
                    max_weight = weight;
                    reps = u32::from(set.reps);
                }
            }
            TopLift {
                name: exercise.name.clone(),
                max_weight,
                reps,
            }
        })
        .collect::<Vec<_>>();

    lifts.sort_by(|a, b| {
        b.max_weight
            .partial_cmp(&a.max_weight)
            .unwrap_or(Ordering::Equal)
    });
    lifts.truncate(LEADERBOARD_SIZE);
    lifts
}

/// Average set weight per calendar day or per Sunday-anchored week.
///
/// Each group accumulates the plain sum of set weights (not volume) and the
/// set count; the emitted value is their rounded quotient. Groups without
/// sets or with a zero value are omitted. Output is sorted ascending by the
/// group's anchor date. Workouts with unparseable dates are excluded.
#[must_use]
pub fn series_by_timeframe(workouts: &[Workout], granularity: Granularity) -> Vec<ChartPoint> {
    let mut groups: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();

    for workout in workouts {
        let Some(date) = parse_display_date(&workout.date) else {
            continue;
        };
        let anchor = match granularity {
            Granularity::Day => date,
            Granularity::Week => week_start(date),
        };
        let entry = groups.entry(anchor).or_insert((0.0, 0));
        for set in workout.exercises.iter().flat_map(|exercise| &exercise.sets) {
            entry.0 += f64::from(set.weight);
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .filter(|(_, (_, total_sets))| *total_sets > 0)
        .map(|(anchor, (total_weight, total_sets))| ChartPoint {
            label: match granularity {
                Granularity::Day => day_label(anchor),
                Granularity::Week => week_label(anchor),
            },
            value: (total_weight / f64::from(total_sets)).round(),
        })
        .filter(|point| point.value != 0.0)
        .collect()
}

/// Estimated-1RM-over-time series for one exercise name.
///
/// Matching is by exact name string rather than exercise id on purpose:
/// same-named exercises logged in different workouts merge into one
/// progress series. Per workout the first matching exercise contributes the
/// maximum estimated 1RM over its sets; workouts without the exercise
/// contribute nothing (their zero points are dropped). Sorting uses the
/// fully parsed date, then the year is dropped from the label.
#[must_use]
pub fn exercise_progress_series(workouts: &[Workout], exercise_name: &str) -> Vec<ChartPoint> {
    let mut points = workouts
        .iter()
        .map(|workout| {
            let value = workout
                .exercises
                .iter()
                .find(|exercise| exercise.name.as_str() == exercise_name)
                .map_or(0.0, |exercise| {
                    exercise
                        .sets
                        .iter()
                        .map(set_one_rep_max)
                        .fold(0.0, f64::max)
                });
            (
                parse_display_date(&workout.date).unwrap_or(NaiveDate::MIN),
                month_day_label(&workout.date),
                value,
            )
        })
        .filter(|(_, _, value)| *value != 0.0)
        .collect::<Vec<_>>();

    points.sort_by_key(|(date, _, _)| *date);
    points
        .into_iter()
        .map(|(_, label, value)| ChartPoint { label, value })
        .collect()
}
