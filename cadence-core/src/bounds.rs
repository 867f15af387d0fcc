/// Closed interval a continuous control value is kept inside of.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueBounds {
    min: f64,
    max: f64,
}

impl ValueBounds {
    pub fn new(min: f64, max: f64) -> Self {
        assert!(min < max, "invalid bounds [{min}, {max}]");

        Self {
            min,
            max,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps into the bounds. NaN has no meaningful position and collapses to the minimum.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }

        f64::clamp(value, self.min, self.max)
    }
}
