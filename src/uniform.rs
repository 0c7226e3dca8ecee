use crate::source::{RandomSource, ThreadSource};

/// Scale one draw from `source` onto `min..max`.
///
/// Computed as `min + (max - min) * u`. Bounds are not checked: `min == max`
/// yields `min`, and `min > max` yields a value at or below `min`.
#[inline]
pub fn range<S: RandomSource + ?Sized>(min: f64, max: f64, source: &mut S) -> f64 {
    min + (max - min) * source.next_unit()
}

/// [`range`] drawing from the thread-local generator.
pub fn uniform(min: f64, max: f64) -> f64 {
    range(min, max, &mut ThreadSource::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_onto_bounds() {
        assert_eq!(range(0.0, 9.0, &mut || 0.5), 4.5);
        assert_eq!(range(2.0, 4.0, &mut || 0.0), 2.0);
        assert_eq!(range(-1.0, 1.0, &mut || 0.75), 0.5);
    }

    #[test]
    fn degenerate_bounds_are_not_special() {
        assert_eq!(range(3.0, 3.0, &mut || 0.9), 3.0);
        // inverted bounds walk downwards from min
        assert_eq!(range(4.0, 2.0, &mut || 0.5), 3.0);
    }

    #[test]
    fn uniform_stays_in_bounds() {
        for _ in 0..1000 {
            let x = uniform(10.0, 20.0);
            assert!((10.0..20.0).contains(&x), "x={x}");
        }
    }
}
