use crate::ValueBounds;

use super::{SliderPosition, SliderStrategy};

/// Concentrates slider resolution around a pivot value.
///
/// The slider is split at the pivot's position. On each side the distance from the pivot value grows with the
/// square of the normalized distance from the pivot position, so the slider moves in fine increments near the
/// pivot and in coarse ones near the bounds.
#[derive(Clone, Debug)]
pub struct QuadraticSliderStrategy {
    bounds: ValueBounds,
    pivot: f64,
    granularity: SliderPosition,
    pivot_position: SliderPosition,
}

impl QuadraticSliderStrategy {
    pub fn new(bounds: ValueBounds, pivot: f64, granularity: SliderPosition) -> Self {
        assert!(bounds.min() < pivot && pivot < bounds.max(), "pivot {pivot} must lie strictly inside {bounds:?}");
        assert!(granularity >= 2, "granularity {granularity} leaves no room on one side of the pivot");

        Self {
            bounds,
            pivot,
            granularity,
            pivot_position: granularity / 2,
        }
    }

    pub fn pivot(&self) -> f64 {
        self.pivot
    }

    pub fn pivot_position(&self) -> SliderPosition {
        self.pivot_position
    }

    fn upper_span(&self) -> SliderPosition {
        self.granularity - self.pivot_position
    }

    fn lower_span(&self) -> SliderPosition {
        self.pivot_position
    }
}

impl SliderStrategy for QuadraticSliderStrategy {
    fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    fn granularity(&self) -> SliderPosition {
        self.granularity
    }

    fn position_of(&self, value: f64) -> SliderPosition {
        let value = self.bounds.clamp(value);

        if value >= self.pivot {
            let root = f64::sqrt((value - self.pivot) / (self.bounds.max() - self.pivot));
            let offset = (root * self.upper_span() as f64).round() as SliderPosition;
            self.pivot_position + SliderPosition::min(offset, self.upper_span())
        } else {
            let root = f64::sqrt((self.pivot - value) / (self.pivot - self.bounds.min()));
            let offset = (root * self.lower_span() as f64).round() as SliderPosition;
            self.pivot_position - SliderPosition::min(offset, self.lower_span())
        }
    }

    fn value_of(&self, position: SliderPosition) -> f64 {
        let position = SliderPosition::min(position, self.granularity);

        let value = if position >= self.pivot_position {
            let normalized = (position - self.pivot_position) as f64 / self.upper_span() as f64;
            self.pivot + normalized * normalized * (self.bounds.max() - self.pivot)
        } else {
            let normalized = (self.pivot_position - position) as f64 / self.lower_span() as f64;
            self.pivot - normalized * normalized * (self.pivot - self.bounds.min())
        };

        // The subtraction on the lower side can land an ulp outside the bounds
        self.bounds.clamp(value)
    }
}
