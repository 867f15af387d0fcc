use std::{fmt::Display, sync::Arc};

use cadence_core::{SliderPosition, SliderStrategy, ValueBounds};

use super::formatter::ParameterFormatter;

pub const DEFAULT_PRECISION: usize = 2;

/// A bounded continuous value driven by a slider.
///
/// The value is clamped on every write and is never quantized to slider positions, so step arithmetic stays exact.
#[derive(Clone)]
pub struct FloatParameter {
    name: String,
    value: f64,
    default_value: f64,
    strategy: Arc<dyn SliderStrategy>,
    formatter: Arc<dyn ParameterFormatter<f64>>,
}

impl FloatParameter {
    pub fn new(name: impl Into<String>, strategy: Arc<dyn SliderStrategy>) -> Self {
        let value = strategy.value_of(0);

        Self {
            name: name.into(),
            value,
            default_value: value,
            strategy,
            formatter: Arc::new(SpeedFormatter::new(DEFAULT_PRECISION)),
        }
    }

    pub fn with_default_value(mut self, value: f64) -> Self {
        self.default_value = self.strategy.clamp(value);
        self.value = self.default_value;
        self
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn ParameterFormatter<f64>>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    /// Stores the clamped value and returns what was stored
    pub fn set_value(&mut self, value: f64) -> f64 {
        self.value = self.clamp(value);
        self.value
    }

    pub fn clamp(&self, value: f64) -> f64 {
        self.strategy.clamp(value)
    }

    pub fn bounds(&self) -> ValueBounds {
        self.strategy.bounds()
    }

    pub fn granularity(&self) -> SliderPosition {
        self.strategy.granularity()
    }

    pub fn position(&self) -> SliderPosition {
        self.strategy.position_of(self.value)
    }

    pub fn value_at(&self, position: SliderPosition) -> f64 {
        self.strategy.value_of(position)
    }

    pub fn format(&self, value: f64) -> String {
        self.formatter.value_to_string(value)
    }

    pub fn minimum_text(&self) -> String {
        self.format(self.bounds().min())
    }

    pub fn maximum_text(&self) -> String {
        self.format(self.bounds().max())
    }
}

impl Display for FloatParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(self.value))
    }
}

/// Playback speed multiplier, e.g. `1.25x`. Trailing zeros are dropped.
pub struct SpeedFormatter {
    precision: usize,
}

impl SpeedFormatter {
    pub const fn new(precision: usize) -> Self {
        Self {
            precision,
        }
    }
}

impl ParameterFormatter<f64> for SpeedFormatter {
    fn value_to_string(&self, value: f64) -> String {
        let precision = self.precision;
        let string = format!("{value:.precision$}");

        let string = if string.contains('.') {
            string.trim_end_matches('0').trim_end_matches('.')
        } else {
            string.as_str()
        };

        // Never show "-0x"
        let string = if string == "-0" { "0" } else { string };

        format!("{string}x")
    }

    fn string_to_value(&self, string: &str) -> Option<f64> {
        let string = string.trim();
        let string = string.strip_suffix('x').unwrap_or(string);
        string.parse().ok()
    }
}

pub struct PercentageFormatter {
    precision: usize,
}

impl PercentageFormatter {
    pub const fn new(precision: usize) -> Self {
        Self {
            precision,
        }
    }
}

impl ParameterFormatter<f64> for PercentageFormatter {
    fn value_to_string(&self, value: f64) -> String {
        format!("{:.precision$}%", value * 100.0, precision = self.precision)
    }

    fn string_to_value(&self, string: &str) -> Option<f64> {
        let string = string.trim();
        let string = string.strip_suffix('%').unwrap_or(string);
        string.parse()
            .ok()
            .map(|value: f64| value / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_ulps_eq;
    use cadence_core::{QuadraticSliderStrategy, ValueBounds};

    use crate::parameters::formatter::ParameterFormatter;

    use super::{FloatParameter, PercentageFormatter, SpeedFormatter};

    fn tempo() -> FloatParameter {
        let strategy = Arc::new(QuadraticSliderStrategy::new(ValueBounds::new(0.10, 3.00), 1.00, 10000));
        FloatParameter::new("Tempo", strategy).with_default_value(1.00)
    }

    #[test]
    fn writes_are_clamped() {
        let mut tempo = tempo();
        assert_eq!(tempo.set_value(5.0), 3.00);
        assert_eq!(tempo.value(), 3.00);
        assert_eq!(tempo.set_value(-1.0), 0.10);
    }

    #[test]
    fn values_are_not_quantized() {
        let mut tempo = tempo();
        tempo.set_value(1.05);
        assert_ulps_eq!(tempo.value(), 1.05);
        assert_eq!(tempo.position(), 5791);
    }

    #[test]
    fn default_value_is_clamped_into_bounds() {
        let strategy = Arc::new(QuadraticSliderStrategy::new(ValueBounds::new(0.10, 3.00), 1.00, 10000));
        let parameter = FloatParameter::new("Pitch", strategy).with_default_value(10.0);
        assert_eq!(parameter.default_value(), 3.00);
    }

    #[test]
    fn displays_through_formatter() {
        let mut tempo = tempo();
        assert_eq!(tempo.to_string(), "1x");
        tempo.set_value(1.25);
        assert_eq!(tempo.to_string(), "1.25x");
        assert_eq!(tempo.minimum_text(), "0.1x");
        assert_eq!(tempo.maximum_text(), "3x");

        let tempo = tempo.with_formatter(Arc::new(PercentageFormatter::new(0)));
        assert_eq!(tempo.to_string(), "125%");
    }

    #[test]
    fn speed_formatter() {
        let formatter = SpeedFormatter::new(2);
        assert_eq!(formatter.value_to_string(1.5), "1.5x");
        assert_eq!(formatter.value_to_string(0.999), "1x");
        assert_eq!(formatter.value_to_string(-0.001), "0x");
        assert_eq!(formatter.string_to_value("1.75x"), Some(1.75));
        assert_eq!(formatter.string_to_value("2"), Some(2.0));
        assert_eq!(formatter.string_to_value("fast"), None);
    }

    #[test]
    fn percentage_formatter() {
        let formatter = PercentageFormatter::new(0);
        assert_eq!(formatter.value_to_string(1.0), "100%");
        assert_eq!(formatter.value_to_string(0.05), "5%");
        assert_ulps_eq!(formatter.string_to_value("80%").unwrap(), 0.8);
    }
}
