//! "Nice" tick values for a linear axis.
//!
//! Tick spacing is always 1, 2 or 5 times a power of ten, chosen so that
//! roughly `count` ticks cover `[start, stop]`.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Signed increment between ticks.
///
/// Positive values are the step itself; negative values `-k` mean a step of
/// `1 / k`, which keeps fractional steps exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Evenly spaced round values within `[start, stop]`, ascending.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi, reverse) = if stop < start {
        (stop, start, true)
    } else {
        (start, stop, false)
    };

    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut values: Vec<f64> = if step > 0.0 {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    } else {
        let inv = -step;
        let first = (lo * inv).ceil() as i64;
        let last = (hi * inv).floor() as i64;
        (first..=last).map(|i| i as f64 / inv).collect()
    };

    if reverse {
        values.reverse();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_axis_ticks() {
        let t = ticks(0.0, 39_144_818.0, 10);
        assert_eq!(t.len(), 8);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[1], 5_000_000.0);
        assert_eq!(t[7], 35_000_000.0);
    }

    #[test]
    fn unit_interval_ticks() {
        let t = ticks(0.0, 1.0, 10);
        assert_eq!(t.len(), 11);
        assert_eq!(t[3], 0.3);
        assert_eq!(t[10], 1.0);
    }

    #[test]
    fn small_range_uses_twos() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn degenerate_ranges() {
        assert_eq!(ticks(0.0, 0.0, 10), vec![0.0]);
        assert!(ticks(0.0, 10.0, 0).is_empty());
        assert!(ticks(f64::NAN, 10.0, 10).is_empty());
    }

    #[test]
    fn reversed_range_descends() {
        assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }
}
