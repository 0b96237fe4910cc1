//! Linear axis domains rounded to "nice" tick steps

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick step for roughly `count` ticks over `[start, stop]`
///
/// Positive results are the step itself; negative results encode `1 / step`
/// so that sub-unit steps stay exact.
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

/// Extend `[lo, hi]` outward so both ends land on tick steps
pub fn nice_domain(lo: f64, hi: f64, count: usize) -> [f64; 2] {
    let (mut start, mut stop) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if !(start.is_finite() && stop.is_finite()) || start == stop {
        return [start, stop];
    }

    let mut previous: Option<f64> = None;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if previous == Some(step) {
            break;
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        previous = Some(step);
    }
    [start, stop]
}

/// Minimum and maximum of a sequence, `None` when empty
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<[f64; 2]> {
    values.into_iter().filter(|v| !v.is_nan()).fold(None, |acc, v| match acc {
        None => Some([v, v]),
        Some([lo, hi]) => Some([lo.min(v), hi.max(v)]),
    })
}
