use cadence_core::SliderPosition;

use crate::parameters::step_size::StepSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Tempo,
    Pitch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    pub fn sign(&self) -> f64 {
        match self {
            StepDirection::Up => 1.0,
            StepDirection::Down => -1.0,
        }
    }
}

/// How the host closed the control session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finalize {
    /// Keep the live values
    Commit,
    /// Restore the values the session started with
    Cancel,
    /// Restore the factory defaults
    Reset,
}

/// Input forwarded verbatim from the host's widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum ControlEvent {
    SliderMoved {
        control: Control,
        position: SliderPosition,
        from_user: bool,
    },

    StepPressed {
        control: Control,
        direction: StepDirection,
    },

    CouplingToggled(bool),
    SkipSilenceToggled(bool),
    StepSizeSelected(StepSize),
    Finalized(Finalize),
}
