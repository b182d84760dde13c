//! Modular arithmetic over the scroll period.

/// Map any finite `value` into the canonical range `[0, period)`.
///
/// Handles arbitrarily large positive or negative inputs in one step.
/// `period` must be finite and positive.
///
/// # Examples
/// ```
/// use carousel::scroll::normalize;
///
/// assert_eq!(normalize(1010.0, 1000.0), 10.0);
/// assert_eq!(normalize(-5.0, 1000.0), 995.0);
/// ```
#[inline]
pub fn normalize(value: f64, period: f64) -> f64 {
    let wrapped = value.rem_euclid(period);
    // rem_euclid rounds tiny negative inputs up to exactly `period`
    if wrapped >= period {
        0.0
    } else {
        // -0.0 + 0.0 == +0.0
        wrapped + 0.0
    }
}

/// Move `offset` by signed `step` and wrap, without ever forming a sum
/// larger than `period`.
///
/// Steps of a full period or more are reduced first, so any finite values
/// work even when `period` is close to `f64::MAX`.
///
/// # Examples
/// ```
/// use carousel::scroll::advance;
///
/// assert_eq!(advance(990.0, 20.0, 1000.0), 10.0);
/// assert_eq!(advance(10.0, -20.0, 1000.0), 990.0);
/// ```
#[inline]
pub fn advance(offset: f64, step: f64, period: f64) -> f64 {
    let offset = normalize(offset, period);
    let step = if step.abs() >= period {
        normalize(step, period)
    } else {
        step
    };

    let moved = if step >= 0.0 {
        let room = period - offset;
        if step >= room {
            step - room
        } else {
            offset + step
        }
    } else if -step <= offset {
        offset + step
    } else {
        period - (-step - offset)
    };
    normalize(moved, period)
}

/// Signed displacement from `from` to `to` along the shorter way round.
///
/// Result lies in `(-period/2, period/2]`. Both inputs are expected to be
/// canonical but any finite values work.
///
/// # Examples
/// ```
/// use carousel::scroll::shortest_delta;
///
/// // Going forward across zero is shorter than going back 980 units.
/// assert_eq!(shortest_delta(990.0, 10.0, 1000.0), 20.0);
/// assert_eq!(shortest_delta(10.0, 990.0, 1000.0), -20.0);
/// ```
#[inline]
pub fn shortest_delta(from: f64, to: f64, period: f64) -> f64 {
    let forward = normalize(to - from, period);
    if forward > period / 2.0 {
        forward - period
    } else {
        forward
    }
}

/// Map a canonical offset into `(-period/2, period/2]`.
#[inline]
pub fn signed_offset(offset: f64, period: f64) -> f64 {
    shortest_delta(0.0, offset, period)
}
