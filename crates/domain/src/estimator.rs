//! Estimated one-repetition-maximum calculations.
//!
//! The estimate is the mean of the Epley, Brzycki and Lander regressions,
//! rounded to the nearest 0.5. Brzycki and Lander have vertical asymptotes
//! near 37 reps; inputs in that region yield infinite or sign-inverted
//! values. This matches the established behavior and is not guarded, but
//! the functions never panic.

use crate::Set;

/// Estimates the one-repetition maximum for a single (weight, reps)
/// observation. For one rep or fewer there is nothing to extrapolate and
/// the weight is returned unchanged.
#[must_use]
pub fn one_rep_max(weight: f64, reps: i64) -> f64 {
    if reps <= 1 {
        return weight;
    }

    #[allow(clippy::cast_precision_loss)]
    let reps = reps as f64;
    let epley = weight * (1.0 + 0.0333 * reps);
    let brzycki = weight * 36.0 / (37.0 - reps);
    let lander = 100.0 * weight / (101.3 - 2.67123 * reps);

    ((epley + brzycki + lander) / 3.0 * 2.0).round() / 2.0
}

#[must_use]
pub fn set_one_rep_max(set: &Set) -> f64 {
    one_rep_max(f64::from(set.weight), i64::from(u32::from(set.reps)))
}

/// Returns the index of the set with the strictly greatest estimated 1RM,
/// or `None` for an empty sequence. Ties keep the first occurrence: the
/// running best starts at zero and only a strictly greater estimate
/// replaces it.
#[must_use]
pub fn best_set_index(sets: &[Set]) -> Option<usize> {
    if sets.is_empty() {
        return None;
    }

    let mut best = 0.0;
    let mut best_index = 0;

    for (index, set) in sets.iter().enumerate() {
        let estimate = set_one_rep_max(set);
        if estimate > best {
            best = estimate;
            best_index = index;
        }
    }

    Some(best_index)
}
