//! Linear scales and "nice" tick generation
//!
//! Tick values follow the usual 1-2-5 progression: for a requested count the
//! step is the power of ten times 1, 2, 5 or 10 closest to `span / count`.

/// Smallest domain span a scale accepts; collapsed domains are widened to it.
pub const MIN_SPAN: f64 = 1e-9;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Maps a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Build a scale. A domain narrower than [`MIN_SPAN`] (or non-finite) is
    /// widened so that [`map`](Self::map) never divides by zero.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, d1) = domain;
        let d0 = if d0.is_finite() { d0 } else { 0.0 };
        let d1 = if d1.is_finite() && (d1 - d0).abs() >= MIN_SPAN {
            d1
        } else {
            d0 + MIN_SPAN
        };
        LinearScale {
            domain: (d0, d1),
            range,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Domain value to range value
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// About `count` nice tick values inside the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Integer tick bounds and signed increment (negative means "divide by").
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
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

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let div = 10f64.powf(-power) / factor;
        i1 = (start * div).round();
        i2 = (stop * div).round();
        if i1 / div < start {
            i1 += 1.0;
        }
        if i2 / div > stop {
            i2 -= 1.0;
        }
        inc = -div;
    } else {
        let mul = 10f64.powf(power) * factor;
        i1 = (start / mul).round();
        i2 = (stop / mul).round();
        if i1 * mul < start {
            i1 += 1.0;
        }
        if i2 * mul > stop {
            i2 -= 1.0;
        }
        inc = mul;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice tick values between `start` and `stop` (either order).
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect();

    if reverse {
        values.reverse();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(5.0), 50.0);
        assert_eq!(scale.map(10.0), 100.0);
    }

    #[test]
    fn test_inverted_range() {
        let scale = LinearScale::new((-120.0, 120.0), (300.0, 0.0));
        assert_eq!(scale.map(-120.0), 300.0);
        assert_eq!(scale.map(0.0), 150.0);
        assert_eq!(scale.map(120.0), 0.0);
    }

    #[test]
    fn test_collapsed_domain_is_widened() {
        let scale = LinearScale::new((0.0, 0.0), (0.0, 160.0));
        assert_eq!(scale.domain(), (0.0, MIN_SPAN));
        let mapped = scale.map(0.0);
        assert!(mapped.is_finite());
        assert_eq!(mapped, 0.0);

        let nan = LinearScale::new((f64::NAN, f64::NAN), (0.0, 1.0));
        assert!(nan.map(0.0).is_finite());
    }

    #[test]
    fn test_ticks_symmetric_domain() {
        assert_eq!(
            ticks(-120.0, 120.0, 5),
            vec![-100.0, -50.0, 0.0, 50.0, 100.0]
        );
    }

    #[test]
    fn test_ticks_modulus_range() {
        let values = ticks(0.0, 1.4e11, 5);
        assert_eq!(values.first(), Some(&0.0));
        assert_eq!(values.last(), Some(&1.4e11));
        assert_eq!(values.len(), 8);
    }

    #[test]
    fn test_ticks_small_values() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_ticks_degenerate() {
        assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 5).is_empty());
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }
}
