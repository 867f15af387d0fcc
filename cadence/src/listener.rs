/// Receives the consolidated result of every user action, at most once per inbound event.
pub trait ParametersListener {
    fn on_parameters_changed(&self, tempo: f32, pitch: f32, skip_silence: bool);
}

impl<F> ParametersListener for F
where
    F: Fn(f32, f32, bool),
{
    fn on_parameters_changed(&self, tempo: f32, pitch: f32, skip_silence: bool) {
        self(tempo, pitch, skip_silence)
    }
}
