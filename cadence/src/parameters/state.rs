use std::sync::Arc;

use cadence_core::SliderStrategy;

use crate::{
    config::{DEFAULT_PITCH, DEFAULT_SKIP_SILENCE, DEFAULT_TEMPO},
    event::{Control, StepDirection},
    session::SessionSeed,
};

use super::{float::{FloatParameter, PercentageFormatter, SpeedFormatter, DEFAULT_PRECISION}, step_size::StepSize};

/// The triple reported to listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackParameters {
    pub tempo: f64,
    pub pitch: f64,
    pub skip_silence: bool,
}

impl PlaybackParameters {
    pub const DEFAULT: Self = Self {
        tempo: DEFAULT_TEMPO,
        pitch: DEFAULT_PITCH,
        skip_silence: DEFAULT_SKIP_SILENCE,
    };
}

impl Default for PlaybackParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolves a write to one control into the resulting `(tempo, pitch)`.
pub fn couple(coupled: bool, control: Control, value: f64, tempo: f64, pitch: f64) -> (f64, f64) {
    match (coupled, control) {
        (true, _) => (value, value),
        (false, Control::Tempo) => (value, pitch),
        (false, Control::Pitch) => (tempo, value),
    }
}

/// Tempo, pitch and the toggles around them, with no presentation attached.
///
/// While coupled, tempo and pitch are equal after every mutation.
#[derive(Clone)]
pub struct ParameterState {
    tempo: FloatParameter,
    pitch: FloatParameter,
    coupled: bool,
    skip_silence: bool,
    step_size: StepSize,
}

impl ParameterState {
    pub fn new(strategy: Arc<dyn SliderStrategy>, seed: &SessionSeed, step_size: StepSize) -> Self {
        let mut tempo = FloatParameter::new("Tempo", strategy.clone())
            .with_formatter(Arc::new(SpeedFormatter::new(DEFAULT_PRECISION)))
            .with_default_value(DEFAULT_TEMPO);
        let mut pitch = FloatParameter::new("Pitch", strategy)
            .with_formatter(Arc::new(PercentageFormatter::new(0)))
            .with_default_value(DEFAULT_PITCH);

        tempo.set_value(seed.tempo);
        pitch.set_value(seed.pitch);

        // The only place coupling is derived, afterwards it follows the toggle.
        // Decided on the values the host supplied, before clamping.
        let coupled = seed.tempo == seed.pitch;

        Self {
            tempo,
            pitch,
            coupled,
            skip_silence: seed.skip_silence,
            step_size,
        }
    }

    pub fn tempo(&self) -> f64 {
        self.tempo.value()
    }

    pub fn pitch(&self) -> f64 {
        self.pitch.value()
    }

    pub fn value(&self, control: Control) -> f64 {
        self.parameter(control).value()
    }

    pub fn parameter(&self, control: Control) -> &FloatParameter {
        match control {
            Control::Tempo => &self.tempo,
            Control::Pitch => &self.pitch,
        }
    }

    pub fn is_coupled(&self) -> bool {
        self.coupled
    }

    pub fn skip_silence(&self) -> bool {
        self.skip_silence
    }

    pub fn step_size(&self) -> StepSize {
        self.step_size
    }

    pub fn parameters(&self) -> PlaybackParameters {
        PlaybackParameters {
            tempo: self.tempo(),
            pitch: self.pitch(),
            skip_silence: self.skip_silence,
        }
    }

    pub fn defaults(&self) -> PlaybackParameters {
        PlaybackParameters {
            tempo: self.tempo.default_value(),
            pitch: self.pitch.default_value(),
            skip_silence: DEFAULT_SKIP_SILENCE,
        }
    }

    pub fn update(&mut self, control: Control, value: f64) {
        let value = self.parameter(control).clamp(value);
        let (tempo, pitch) = couple(self.coupled, control, value, self.tempo(), self.pitch());

        self.tempo.set_value(tempo);
        self.pitch.set_value(pitch);
    }

    pub fn step(&mut self, control: Control, direction: StepDirection) {
        let target = self.value(control) + direction.sign() * self.step_size.fraction();
        self.update(control, target);
    }

    /// Returns whether the flag changed. Coupling collapses both values to the lower one.
    pub fn set_coupled(&mut self, coupled: bool) -> bool {
        if coupled == self.coupled {
            return false;
        }

        self.coupled = coupled;

        if coupled {
            let minimum = f64::min(self.tempo(), self.pitch());
            self.tempo.set_value(minimum);
            self.pitch.set_value(minimum);
        }

        true
    }

    pub fn set_skip_silence(&mut self, skip_silence: bool) {
        self.skip_silence = skip_silence;
    }

    pub fn set_step_size(&mut self, step_size: StepSize) {
        self.step_size = step_size;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_ulps_eq;

    use crate::{
        config::ControlConfig,
        event::{Control, StepDirection},
        parameters::step_size::StepSize,
        session::SessionSeed,
    };

    use super::{couple, ParameterState};

    fn seeded(tempo: f64, pitch: f64) -> ParameterState {
        let config = ControlConfig::default();
        ParameterState::new(config.slider_strategy(), &SessionSeed::new(tempo, pitch, false), config.step_size())
    }

    #[test]
    fn coupling_policy() {
        assert_eq!(couple(true, Control::Tempo, 1.5, 1.0, 1.0), (1.5, 1.5));
        assert_eq!(couple(true, Control::Pitch, 0.5, 1.0, 1.0), (0.5, 0.5));
        assert_eq!(couple(false, Control::Tempo, 1.5, 1.0, 0.8), (1.5, 0.8));
        assert_eq!(couple(false, Control::Pitch, 1.5, 1.0, 0.8), (1.0, 1.5));
    }

    #[test]
    fn coupling_derived_from_seed() {
        assert!(seeded(1.0, 1.0).is_coupled());
        assert!(!seeded(1.2, 0.8).is_coupled());
        assert!(seeded(5.0, 5.0).is_coupled());
        // Both clamp to the maximum but still differ as supplied
        assert!(!seeded(4.0, 5.0).is_coupled());
    }

    #[test]
    fn diverging_out_of_range_seed_steps_independently() {
        let mut state = seeded(5.0, 4.0);
        assert_eq!((state.tempo(), state.pitch()), (3.0, 3.0));

        state.step(Control::Tempo, StepDirection::Down);
        assert_ulps_eq!(state.tempo(), 2.95);
        assert_eq!(state.pitch(), 3.0);
    }

    #[test]
    fn seed_is_clamped() {
        let state = seeded(-2.0, 7.0);
        assert_eq!(state.tempo(), 0.10);
        assert_eq!(state.pitch(), 3.00);
    }

    #[test]
    fn coupled_updates_keep_values_equal() {
        let mut state = seeded(1.0, 1.0);
        let updates = [
            (Control::Tempo, 1.3),
            (Control::Pitch, 0.7),
            (Control::Tempo, 9.0),
            (Control::Pitch, -1.0),
            (Control::Pitch, 2.25),
            (Control::Tempo, 0.11),
        ];

        for (control, value) in updates {
            state.update(control, value);
            assert_eq!(state.tempo(), state.pitch());
        }

        for direction in [StepDirection::Up, StepDirection::Down, StepDirection::Down] {
            state.step(Control::Pitch, direction);
            assert_eq!(state.tempo(), state.pitch());
        }
    }

    #[test]
    fn uncoupled_updates_touch_only_their_target() {
        let mut state = seeded(1.2, 0.8);
        state.update(Control::Tempo, 1.5);
        assert_eq!(state.tempo(), 1.5);
        assert_eq!(state.pitch(), 0.8);

        state.update(Control::Pitch, 2.0);
        assert_eq!(state.tempo(), 1.5);
        assert_eq!(state.pitch(), 2.0);
    }

    #[test]
    fn decoupling_preserves_values() {
        let mut state = seeded(1.0, 1.0);
        state.update(Control::Tempo, 1.4);
        assert!(state.set_coupled(false));
        assert_eq!(state.tempo(), 1.4);
        assert_eq!(state.pitch(), 1.4);
        assert!(!state.set_coupled(false));
    }

    #[test]
    fn recoupling_collapses_to_minimum() {
        let mut state = seeded(1.20, 0.80);
        assert!(state.set_coupled(true));
        assert_eq!(state.tempo(), 0.80);
        assert_eq!(state.pitch(), 0.80);

        let mut state = seeded(0.5, 2.5);
        state.set_coupled(true);
        assert_eq!(state.tempo(), 0.5);
        assert_eq!(state.pitch(), 0.5);
    }

    #[test]
    fn step_arithmetic() {
        let mut state = seeded(1.00, 1.00);
        state.step(Control::Tempo, StepDirection::Up);
        assert_ulps_eq!(state.tempo(), 1.05);

        let mut state = seeded(0.12, 1.0);
        state.step(Control::Tempo, StepDirection::Down);
        assert_eq!(state.tempo(), 0.10);
        state.step(Control::Tempo, StepDirection::Down);
        assert_eq!(state.tempo(), 0.10);
    }

    #[test]
    fn step_follows_selected_size() {
        let mut state = seeded(1.0, 1.2);
        state.set_step_size(StepSize::TwentyFivePercent);
        state.step(Control::Pitch, StepDirection::Down);
        assert_ulps_eq!(state.pitch(), 0.95);
        assert_eq!(state.tempo(), 1.0);

        state.set_step_size(StepSize::OneHundredPercent);
        state.step(Control::Tempo, StepDirection::Up);
        assert_eq!(state.tempo(), 2.0);
        state.step(Control::Tempo, StepDirection::Up);
        assert_eq!(state.tempo(), 3.0);
    }
}
