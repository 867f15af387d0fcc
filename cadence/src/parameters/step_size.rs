use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Enum, Error};

pub const STEP_UP_SIGN: char = '+';
pub const STEP_DOWN_SIGN: char = '-';

/// Increment applied by the step buttons, as a fraction of the nominal value.
///
/// Serialized through its label, e.g. `"5%"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Enum)]
pub enum StepSize {
    #[name = "1%"]
    OnePercent,
    #[default]
    #[name = "5%"]
    FivePercent,
    #[name = "10%"]
    TenPercent,
    #[name = "25%"]
    TwentyFivePercent,
    #[name = "100%"]
    OneHundredPercent,
}

impl StepSize {
    pub fn fraction(&self) -> f64 {
        match self {
            StepSize::OnePercent => 0.01,
            StepSize::FivePercent => 0.05,
            StepSize::TenPercent => 0.10,
            StepSize::TwentyFivePercent => 0.25,
            StepSize::OneHundredPercent => 1.00,
        }
    }

    pub fn step_up_label(&self) -> String {
        format!("{STEP_UP_SIGN}{}", self.name())
    }

    pub fn step_down_label(&self) -> String {
        format!("{STEP_DOWN_SIGN}{}", self.name())
    }
}

impl Serialize for StepSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for StepSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown step size \"{name}\"")))
    }
}

impl TryFrom<f64> for StepSize {
    type Error = Error;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        Self::variants()
            .find(|step_size| (step_size.fraction() - fraction).abs() < 1e-9)
            .ok_or(Error::InvalidStepSize(fraction))
    }
}
