//! Rate statistics recomputed from summed counters.
//!
//! Rates are never summed across games. Every function returns `None` when its
//! denominator is zero.

/// Upper bound of each passer rating component.
const RATING_COMPONENT_MAX: f64 = 2.375;

fn ratio(numerator: i64, denominator: i64) -> Option<f64> {
    if denominator <= 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Completions per attempt, as a percentage.
pub fn completion_pct(com: i64, att: i64) -> Option<f64> {
    ratio(com, att).map(|r| r * 100.0)
}

/// Yards per attempt (passing or rushing).
pub fn yards_per_attempt(yds: i64, att: i64) -> Option<f64> {
    ratio(yds, att)
}

/// Yards per reception.
pub fn yards_per_reception(yds: i64, rec: i64) -> Option<f64> {
    ratio(yds, rec)
}

/// Receptions per target, as a percentage.
pub fn catch_rate(rec: i64, tar: i64) -> Option<f64> {
    ratio(rec, tar).map(|r| r * 100.0)
}

/// NFL passer rating on the 0.0 to 158.3 scale.
pub fn passer_rating(att: i64, com: i64, yds: i64, td: i64, int_thrown: i64) -> Option<f64> {
    let att_f = att as f64;
    if att <= 0 {
        return None;
    }

    let clamp = |v: f64| v.clamp(0.0, RATING_COMPONENT_MAX);
    let a = clamp((com as f64 / att_f - 0.3) * 5.0);
    let b = clamp((yds as f64 / att_f - 3.0) * 0.25);
    let c = clamp(td as f64 / att_f * 20.0);
    let d = clamp(RATING_COMPONENT_MAX - int_thrown as f64 / att_f * 25.0);

    Some((a + b + c + d) / 6.0 * 100.0)
}
