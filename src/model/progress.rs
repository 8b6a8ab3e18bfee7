//! Clamped progress value for bars and gauges.

pub const DEFAULT_MAX: f64 = 100.0;

/// A bounded progress value. Out-of-range input is clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    value: f64,
    max: f64,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Progress {
    pub fn new(value: f64) -> Self {
        Self::with_max(value, DEFAULT_MAX)
    }

    /// A non-positive or non-finite `max` falls back to [`DEFAULT_MAX`].
    pub fn with_max(value: f64, max: f64) -> Self {
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            DEFAULT_MAX
        };
        Self { value, max }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// The value clamped into `[0, max]`; NaN counts as zero.
    pub fn value(&self) -> f64 {
        if self.value.is_nan() {
            0.0
        } else {
            self.value.clamp(0.0, self.max)
        }
    }

    pub fn ratio(&self) -> f64 {
        self.value() / self.max
    }

    pub fn percent(&self) -> u16 {
        // ratio() is within [0, 1], so the cast cannot overflow.
        (self.ratio() * 100.0).round() as u16
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }

    pub fn is_complete(&self) -> bool {
        self.value() >= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-10.0, 100.0, 0)]
    #[case(0.0, 100.0, 0)]
    #[case(42.0, 100.0, 42)]
    #[case(150.0, 100.0, 100)]
    #[case(5.0, 10.0, 50)]
    #[case(f64::NAN, 100.0, 0)]
    #[case(f64::INFINITY, 100.0, 100)]
    #[case(50.0, 0.0, 50)]
    #[case(50.0, -3.0, 50)]
    fn test_percent_is_clamped(#[case] value: f64, #[case] max: f64, #[case] expected: u16) {
        assert_eq!(Progress::with_max(value, max).percent(), expected);
    }

    #[test]
    fn test_value_stays_in_range() {
        let mut progress = Progress::new(0.0);
        for value in [-1e9, -1.0, 0.5, 99.9, 100.0, 1e9] {
            progress.set(value);
            assert!((0.0..=progress.max()).contains(&progress.value()));
        }
    }

    #[test]
    fn test_is_complete() {
        assert!(Progress::new(100.0).is_complete());
        assert!(Progress::new(250.0).is_complete());
        assert!(!Progress::new(99.0).is_complete());
    }
}
