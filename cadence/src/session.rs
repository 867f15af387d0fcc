use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{config::{DEFAULT_PITCH, DEFAULT_SKIP_SILENCE, DEFAULT_TEMPO}, Error};

/// Values a control session starts from, supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSeed {
    pub tempo: f64,
    pub pitch: f64,
    pub skip_silence: bool,
}

impl Default for SessionSeed {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO,
            pitch: DEFAULT_PITCH,
            skip_silence: DEFAULT_SKIP_SILENCE,
        }
    }
}

impl SessionSeed {
    pub fn new(tempo: f64, pitch: f64, skip_silence: bool) -> Self {
        Self {
            tempo,
            pitch,
            skip_silence,
        }
    }

    pub fn saved_state(&self) -> SavedState {
        SavedState {
            initial_tempo: self.tempo,
            initial_pitch: self.pitch,
        }
    }

    /// Skip silence isn't part of the saved state, the host supplies it again
    pub fn restore(saved: SavedState, skip_silence: bool) -> Self {
        Self {
            tempo: saved.initial_tempo,
            pitch: saved.initial_pitch,
            skip_silence,
        }
    }

    pub fn save_state(&self, writer: &mut impl Write) -> Result<(), Error> {
        let json = serde_json::to_string(&self.saved_state())?;
        write!(writer, "{json}")?;
        Ok(())
    }

    pub fn load_state(reader: &mut impl Read, skip_silence: bool) -> Result<Self, Error> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;

        if json.trim().is_empty() {
            log::warn!("No saved playback parameters, starting from defaults");
            return Ok(Self {
                skip_silence,
                ..Self::default()
            });
        }

        let saved: SavedState = serde_json::from_str(&json)?;
        Ok(Self::restore(saved, skip_silence))
    }
}

/// The only state that survives a save/restore cycle: the values the session started with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    #[serde(default = "default_tempo")]
    pub initial_tempo: f64,
    #[serde(default = "default_pitch")]
    pub initial_pitch: f64,
}

fn default_tempo() -> f64 {
    DEFAULT_TEMPO
}

fn default_pitch() -> f64 {
    DEFAULT_PITCH
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use crate::Error;

    use super::{SavedState, SessionSeed};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disconnected"))
        }
    }

    #[test]
    fn restores_initial_values_verbatim() {
        let seed = SessionSeed::new(1.35, 0.85, true);

        let mut bytes = Vec::new();
        seed.save_state(&mut bytes).unwrap();

        let restored = SessionSeed::load_state(&mut bytes.as_slice(), false).unwrap();
        assert_eq!(restored.tempo, 1.35);
        assert_eq!(restored.pitch, 0.85);
        assert!(!restored.skip_silence);
    }

    #[test]
    fn skip_silence_is_not_persisted() {
        let mut bytes = Vec::new();
        SessionSeed::new(1.0, 1.0, true).save_state(&mut bytes).unwrap();

        let json = String::from_utf8(bytes).unwrap();
        assert!(!json.contains("skip"));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let saved: SavedState = serde_json::from_str(r#"{ "initial_pitch": 1.5 }"#).unwrap();
        assert_eq!(saved.initial_tempo, 1.0);
        assert_eq!(saved.initial_pitch, 1.5);
    }

    #[test]
    fn empty_state_starts_from_defaults() {
        let seed = SessionSeed::load_state(&mut "  ".as_bytes(), true).unwrap();
        assert_eq!(seed, SessionSeed { skip_silence: true, ..SessionSeed::default() });
    }

    #[test]
    fn corrupt_state_is_a_serialization_error() {
        let result = SessionSeed::load_state(&mut "{ initial_tempo".as_bytes(), false);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn read_failure_is_an_io_error() {
        let result = SessionSeed::load_state(&mut FailingReader, false);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
