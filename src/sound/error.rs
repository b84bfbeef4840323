use super::types::Selector;

/// A failed call into the native sound subsystem.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{func} failed with errno {errno}")]
pub struct BackendError {
    pub func: &'static str,
    pub errno: i32,
}

impl BackendError {
    pub fn new(func: &'static str, errno: i32) -> Self {
        Self { func, errno }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    #[error("No sound cards found")]
    NoCardFound,
    #[error("Cannot open sound card '{device}': {source}")]
    ControlOpen { device: String, source: BackendError },
    #[error("Cannot subscribe to events on sound card '{device}': {source}")]
    Subscribe { device: String, source: BackendError },
    #[error("Failed to open mixer: {0}")]
    MixerOpen(BackendError),
    #[error("Failed to attach mixer to '{device}': {source}")]
    MixerAttach { device: String, source: BackendError },
    #[error("Failed to register mixer elements: {0}")]
    MixerRegister(BackendError),
    #[error("Failed to load mixer elements: {0}")]
    MixerLoad(BackendError),
    #[error("Mixer element not found: {0}")]
    ElementNotFound(Selector),
    #[error("Failed to read playback volume of {selector}: {source}")]
    VolumeRead { selector: Selector, source: BackendError },
    #[error("Invalid volume range [{min}, {max}]")]
    InvalidRange { min: i64, max: i64 },
    #[error("Waiting for control events failed with code {code}")]
    Wait { code: i32 },
}
