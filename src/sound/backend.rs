use super::error::BackendError;
use super::types::Selector;

// Sessions own a native handle and release it in `Drop`. Nothing else closes them.

pub trait MixerBackend {
    type Session: MixerSession;

    fn open_mixer(&self) -> Result<Self::Session, BackendError>;
}

pub trait MixerSession {
    type Element<'a>: PlaybackElement
    where
        Self: 'a;

    fn attach(&mut self, device: &str) -> Result<(), BackendError>;
    fn register(&mut self) -> Result<(), BackendError>;
    fn load(&mut self) -> Result<(), BackendError>;
    fn find_element(&self, selector: &Selector) -> Option<Self::Element<'_>>;
}

pub trait PlaybackElement {
    fn playback_volume_range(&self) -> (i64, i64);
    fn playback_volume(&self, channel: u32) -> Result<i64, BackendError>;
}

pub trait ControlBackend {
    type Session: ControlSession;

    /// Index of the first card the subsystem reports, if any.
    fn first_card(&self) -> Option<u32>;
    fn open_control(&self, device: &str) -> Result<Self::Session, BackendError>;
}

pub trait ControlSession {
    fn subscribe_events(&self) -> Result<(), BackendError>;

    /// Blocks on every wait descriptor of the session with no timeout and
    /// returns how many became ready.
    fn wait_ready(&self) -> Result<usize, BackendError>;
}
