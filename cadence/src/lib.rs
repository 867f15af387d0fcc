// Lets `#[derive(Enum)]` resolve `::cadence` from inside this crate
extern crate self as cadence;

pub use cadence_core::{LinearSliderStrategy, QuadraticSliderStrategy, SliderPosition, SliderStrategy, ValueBounds};
pub use cadence_derive::Enum;
pub use config::{ControlConfig, SliderCurve};
pub use controller::PlaybackParameterController;
pub use error::Error;
pub use event::{Control, ControlEvent, Finalize, StepDirection};
pub use listener::ParametersListener;
pub use parameters::enums::Enum;
pub use parameters::float::{FloatParameter, PercentageFormatter, SpeedFormatter};
pub use parameters::formatter::ParameterFormatter;
pub use parameters::state::{ParameterState, PlaybackParameters};
pub use parameters::step_size::StepSize;
pub use session::{SavedState, SessionSeed};

// Re-exports
pub use cadence_core;

pub mod config;
mod controller;
mod error;
mod event;
mod listener;
pub mod parameters;
pub mod session;
