use crate::utils::error::{Result, WunderError};
use ::rand::Rng;
use std::fmt::Display;

/// Integers from `start` to `end` inclusive, stepping by `step`.
///
/// A step pointing away from `end` is negated rather than rejected; a zero
/// step is an error. `end` is included only when a step lands on it exactly.
pub fn range(start: i64, end: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        return Err(WunderError::invalid_argument("range", "step cannot be 0"));
    }

    let step = if (end >= start) == (step > 0) {
        step
    } else {
        step.checked_neg()
            .ok_or_else(|| WunderError::invalid_argument("range", "step magnitude too large"))?
    };
    let mut out = Vec::new();
    let mut current = start;
    loop {
        let in_bounds = if step > 0 { current <= end } else { current >= end };
        if !in_bounds {
            break;
        }
        out.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(out)
}

/// `0..=end` (or `0..=end` counting down for a negative `end`).
pub fn range_to(end: i64) -> Vec<i64> {
    let step = if end < 0 { -1 } else { 1 };
    // a non-zero step never fails
    range(0, end, step).unwrap_or_default()
}

pub fn clamp<T>(value: T, low: T, high: T) -> Result<T>
where
    T: PartialOrd + Copy + Display,
{
    if low > high {
        return Err(WunderError::invalid_argument(
            "clamp",
            format!("low bound {} is greater than high bound {}", low, high),
        ));
    }

    if value < low {
        Ok(low)
    } else if value > high {
        Ok(high)
    } else {
        Ok(value)
    }
}

/// Position of `value` between `low` and `high` as a fraction (0.0 at `low`,
/// 1.0 at `high`). Values outside the bounds fall outside `[0, 1]`.
pub fn normalize(value: f64, low: f64, high: f64) -> Result<f64> {
    if low > high {
        return Err(WunderError::invalid_argument(
            "normalize",
            format!("low bound {} is greater than high bound {}", low, high),
        ));
    }
    if low == high {
        return Err(WunderError::invalid_argument(
            "normalize",
            format!("bounds are both {}", low),
        ));
    }
    Ok((value - low) / (high - low))
}

pub fn rand(low: Option<f64>, high: Option<f64>, round: bool) -> Result<f64> {
    rand_with(&mut ::rand::thread_rng(), low, high, round)
}

/// [`rand`] driven by a caller-supplied generator.
///
/// With no bounds this is a float in `[0, 1)`. With both bounds (in either
/// order) it is an integer in `[low, high]` when `round` is set, otherwise a
/// float in `[low, high)`. Supplying only one bound is an error, as are bounds
/// whose span doesn't fit in an `f64`.
pub fn rand_with<G: Rng>(
    rng: &mut G,
    low: Option<f64>,
    high: Option<f64>,
    round: bool,
) -> Result<f64> {
    let (low, high) = match (low, high) {
        (None, None) => return Ok(rng.gen::<f64>()),
        (Some(a), Some(b)) if a <= b => (a, b),
        (Some(a), Some(b)) => (b, a),
        (Some(_), None) => {
            return Err(WunderError::invalid_argument("rand", "missing high bound"))
        }
        (None, Some(_)) => return Err(WunderError::invalid_argument("rand", "missing low bound")),
    };

    if !low.is_finite() || !high.is_finite() {
        return Err(WunderError::invalid_argument("rand", "bounds must be finite"));
    }
    if !(high - low).is_finite() {
        return Err(WunderError::invalid_argument(
            "rand",
            format!("span between {} and {} is too large", low, high),
        ));
    }

    if round {
        let (min, max) = (low.ceil(), high.floor());
        if min > max {
            return Err(WunderError::invalid_argument(
                "rand",
                format!("no integer between {} and {}", low, high),
            ));
        }
        if min < i64::MIN as f64 || max >= i64::MAX as f64 {
            return Err(WunderError::invalid_argument(
                "rand",
                format!("integer bounds {} and {} are out of range", low, high),
            ));
        }
        Ok(rng.gen_range(min as i64..=max as i64) as f64)
    } else if low == high {
        Ok(low)
    } else {
        Ok(rng.gen_range(low..high))
    }
}
