pub mod bounds;
pub mod slider;

pub use bounds::ValueBounds;
pub use slider::{SliderPosition, SliderStrategy};
pub use slider::linear::LinearSliderStrategy;
pub use slider::quadratic::QuadraticSliderStrategy;
