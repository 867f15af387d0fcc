use std::{io::Write, rc::Rc, sync::Arc};

use cadence_core::{SliderPosition, SliderStrategy};

use crate::{
    config::ControlConfig,
    event::{Control, ControlEvent, Finalize, StepDirection},
    listener::ParametersListener,
    parameters::{
        float::FloatParameter,
        state::{ParameterState, PlaybackParameters},
        step_size::StepSize,
    },
    session::SessionSeed,
    Error,
};

/// Single source of truth for a tempo/pitch control session.
///
/// Every user action is applied to the state in full before a single notification carrying the resulting
/// `(tempo, pitch, skip_silence)` is sent, so listeners never observe a half-applied coupled update.
pub struct PlaybackParameterController {
    strategy: Arc<dyn SliderStrategy>,
    state: ParameterState,
    initial: SessionSeed,
    listener: Option<Rc<dyn ParametersListener>>,
}

impl PlaybackParameterController {
    pub fn new(seed: SessionSeed) -> Self {
        Self::with_config(seed, ControlConfig::default())
    }

    pub fn with_config(seed: SessionSeed, config: ControlConfig) -> Self {
        let strategy = config.slider_strategy();
        let state = ParameterState::new(strategy.clone(), &SessionSeed::default(), config.step_size());

        let mut controller = Self {
            strategy,
            state,
            initial: SessionSeed::default(),
            listener: None,
        };

        controller.initialize(seed);
        controller
    }

    pub fn on_parameters_changed(mut self, listener: Rc<dyn ParametersListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Seeds the session. The live values are clamped, the seed itself is kept verbatim for cancel and saving.
    /// Coupling starts enabled only if the supplied tempo and pitch are equal.
    pub fn initialize(&mut self, seed: SessionSeed) {
        self.state = ParameterState::new(self.strategy.clone(), &seed, self.state.step_size());
        self.initial = seed;

        log::debug!(
            "Initialized playback parameters to tempo=[{}], pitch=[{}], coupled=[{}]",
            self.state.tempo(),
            self.state.pitch(),
            self.state.is_coupled(),
        );
    }

    pub fn state(&self) -> &ParameterState {
        &self.state
    }

    pub fn initial(&self) -> SessionSeed {
        self.initial
    }

    pub fn tempo(&self) -> f64 {
        self.state.tempo()
    }

    pub fn pitch(&self) -> f64 {
        self.state.pitch()
    }

    pub fn is_coupled(&self) -> bool {
        self.state.is_coupled()
    }

    pub fn skip_silence(&self) -> bool {
        self.state.skip_silence()
    }

    pub fn step_size(&self) -> StepSize {
        self.state.step_size()
    }

    pub fn parameter(&self, control: Control) -> &FloatParameter {
        self.state.parameter(control)
    }

    /// Slider positions matching the current values, for pushing back out to the widgets
    pub fn slider_positions(&self) -> (SliderPosition, SliderPosition) {
        (self.state.parameter(Control::Tempo).position(), self.state.parameter(Control::Pitch).position())
    }

    pub fn update(&mut self, control: Control, value: f64) -> PlaybackParameters {
        self.state.update(control, value);
        self.notify(self.state.parameters())
    }

    pub fn update_tempo(&mut self, value: f64) -> PlaybackParameters {
        self.update(Control::Tempo, value)
    }

    pub fn update_pitch(&mut self, value: f64) -> PlaybackParameters {
        self.update(Control::Pitch, value)
    }

    pub fn step(&mut self, control: Control, direction: StepDirection) -> PlaybackParameters {
        self.state.step(control, direction);
        self.notify(self.state.parameters())
    }

    pub fn step_tempo(&mut self, direction: StepDirection) -> PlaybackParameters {
        self.step(Control::Tempo, direction)
    }

    pub fn step_pitch(&mut self, direction: StepDirection) -> PlaybackParameters {
        self.step(Control::Pitch, direction)
    }

    /// Only enabling coupling notifies, since it may move one of the values.
    pub fn set_coupled(&mut self, coupled: bool) -> Option<PlaybackParameters> {
        if !self.state.set_coupled(coupled) || !coupled {
            return None;
        }

        Some(self.notify(self.state.parameters()))
    }

    pub fn set_skip_silence(&mut self, skip_silence: bool) -> PlaybackParameters {
        self.state.set_skip_silence(skip_silence);
        self.notify(self.state.parameters())
    }

    pub fn set_step_size(&mut self, step_size: StepSize) {
        self.state.set_step_size(step_size);
    }

    pub fn commit(&self) -> PlaybackParameters {
        self.finalize(Finalize::Commit)
    }

    pub fn cancel(&self) -> PlaybackParameters {
        self.finalize(Finalize::Cancel)
    }

    pub fn reset(&self) -> PlaybackParameters {
        self.finalize(Finalize::Reset)
    }

    /// Emits the values the host should keep. Cancel and reset don't touch the live state.
    pub fn finalize(&self, kind: Finalize) -> PlaybackParameters {
        let parameters = match kind {
            Finalize::Commit => self.state.parameters(),
            Finalize::Cancel => PlaybackParameters {
                tempo: self.initial.tempo,
                pitch: self.initial.pitch,
                skip_silence: self.initial.skip_silence,
            },
            Finalize::Reset => self.state.defaults(),
        };

        log::debug!("Finalizing playback parameters with {kind:?}");
        self.notify(parameters)
    }

    /// Applies one inbound event and returns what was reported to the listener, if anything.
    pub fn process_event(&mut self, event: &ControlEvent) -> Option<PlaybackParameters> {
        match *event {
            ControlEvent::SliderMoved { control, position, from_user } => {
                if !from_user {
                    log::trace!("Ignoring programmatic {control:?} slider move to {position}");
                    return None;
                }

                let value = self.state.parameter(control).value_at(position);
                Some(self.update(control, value))
            },

            ControlEvent::StepPressed { control, direction } => Some(self.step(control, direction)),
            ControlEvent::CouplingToggled(coupled) => self.set_coupled(coupled),
            ControlEvent::SkipSilenceToggled(skip_silence) => Some(self.set_skip_silence(skip_silence)),

            ControlEvent::StepSizeSelected(step_size) => {
                self.set_step_size(step_size);
                None
            },

            ControlEvent::Finalized(kind) => Some(self.finalize(kind)),
        }
    }

    pub fn save_state(&self, writer: &mut impl Write) -> Result<(), Error> {
        self.initial.save_state(writer)
    }

    fn notify(&self, parameters: PlaybackParameters) -> PlaybackParameters {
        log::debug!(
            "Setting playback parameters to tempo=[{}], pitch=[{}], skip_silence=[{}]",
            parameters.tempo,
            parameters.pitch,
            parameters.skip_silence,
        );

        if let Some(listener) = self.listener.as_ref() {
            listener.on_parameters_changed(parameters.tempo as f32, parameters.pitch as f32, parameters.skip_silence);
        }

        parameters
    }
}
