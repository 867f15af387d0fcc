use std::sync::Arc;

use cadence_core::{LinearSliderStrategy, QuadraticSliderStrategy, SliderPosition, SliderStrategy, ValueBounds};
use serde::{Deserialize, Serialize};

use crate::{parameters::step_size::StepSize, Error};

// Lowest tempo and pitch the playback backend accepts
pub const MINIMUM_PLAYBACK_VALUE: f64 = 0.10;
pub const MAXIMUM_PLAYBACK_VALUE: f64 = 3.00;
pub const PLAYBACK_PIVOT: f64 = 1.00;
pub const SLIDER_GRANULARITY: SliderPosition = 10000;

pub const DEFAULT_TEMPO: f64 = 1.00;
pub const DEFAULT_PITCH: f64 = 1.00;
pub const DEFAULT_SKIP_SILENCE: bool = false;
pub const DEFAULT_STEP_SIZE: StepSize = StepSize::FivePercent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderCurve {
    Linear,
    #[default]
    Quadratic,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    bounds: ValueBounds,
    pivot: f64,
    granularity: SliderPosition,
    curve: SliderCurve,
    step_size: StepSize,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            bounds: ValueBounds::new(MINIMUM_PLAYBACK_VALUE, MAXIMUM_PLAYBACK_VALUE),
            pivot: PLAYBACK_PIVOT,
            granularity: SLIDER_GRANULARITY,
            curve: SliderCurve::default(),
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

impl ControlConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = ValueBounds::new(min, max);
        self
    }

    pub fn with_pivot(mut self, pivot: f64) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_granularity(mut self, granularity: SliderPosition) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_curve(mut self, curve: SliderCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_step_size(mut self, step_size: StepSize) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    pub fn pivot(&self) -> f64 {
        self.pivot
    }

    pub fn granularity(&self) -> SliderPosition {
        self.granularity
    }

    pub fn curve(&self) -> SliderCurve {
        self.curve
    }

    pub fn step_size(&self) -> StepSize {
        self.step_size
    }

    pub fn validate(&self) -> Result<(), Error> {
        let (min, max) = (self.bounds.min(), self.bounds.max());

        if !(min < max) {
            return Err(Error::InvalidConfig(format!("minimum {min} must be below maximum {max}")));
        }
        if self.curve == SliderCurve::Quadratic && !(min < self.pivot && self.pivot < max) {
            return Err(Error::InvalidConfig(format!("pivot {} must lie strictly between {min} and {max}", self.pivot)));
        }
        if self.granularity < 2 {
            return Err(Error::InvalidConfig(format!("granularity {} is too coarse", self.granularity)));
        }

        Ok(())
    }

    pub fn slider_strategy(&self) -> Arc<dyn SliderStrategy> {
        match self.curve {
            SliderCurve::Linear => Arc::new(LinearSliderStrategy::new(self.bounds, self.granularity)),
            SliderCurve::Quadratic => Arc::new(QuadraticSliderStrategy::new(self.bounds, self.pivot, self.granularity)),
        }
    }
}
