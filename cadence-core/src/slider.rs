pub mod linear;
pub mod quadratic;

use crate::ValueBounds;

pub type SliderPosition = u32;

/// Bidirectional mapping between a bounded value and an integer slider position in `[0, granularity]`.
///
/// Both directions are monotonic non-decreasing and clamp their input instead of failing.
pub trait SliderStrategy: Send + Sync {
    fn bounds(&self) -> ValueBounds;
    fn granularity(&self) -> SliderPosition;
    fn position_of(&self, value: f64) -> SliderPosition;
    fn value_of(&self, position: SliderPosition) -> f64;

    fn clamp(&self, value: f64) -> f64 {
        self.bounds().clamp(value)
    }
}
