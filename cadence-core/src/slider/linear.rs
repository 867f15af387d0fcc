use crate::ValueBounds;

use super::{SliderPosition, SliderStrategy};

/// Uniform resolution over the whole range.
#[derive(Clone, Debug)]
pub struct LinearSliderStrategy {
    bounds: ValueBounds,
    granularity: SliderPosition,
}

impl LinearSliderStrategy {
    pub fn new(bounds: ValueBounds, granularity: SliderPosition) -> Self {
        assert!(bounds.min() < bounds.max(), "invalid bounds {bounds:?}");
        assert!(granularity > 0);

        Self {
            bounds,
            granularity,
        }
    }
}

impl SliderStrategy for LinearSliderStrategy {
    fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    fn granularity(&self) -> SliderPosition {
        self.granularity
    }

    fn position_of(&self, value: f64) -> SliderPosition {
        let value = self.bounds.clamp(value);
        let normalized = (value - self.bounds.min()) / self.bounds.span();

        (normalized * self.granularity as f64).round() as SliderPosition
    }

    fn value_of(&self, position: SliderPosition) -> f64 {
        let position = SliderPosition::min(position, self.granularity);
        let normalized = position as f64 / self.granularity as f64;

        self.bounds.clamp(self.bounds.min() + normalized * self.bounds.span())
    }
}
