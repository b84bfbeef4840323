pub mod types;
pub mod error;
pub mod backend;
pub mod volume;
pub mod monitor;
#[cfg(feature = "alsa")]
pub mod alsa;
#[cfg(test)]
pub(crate) mod fake;

pub use types::{Card, Selector, VolumeRange, device_name, DEFAULT_MIXER_DEVICE};
pub use error::{BackendError, SoundError};
pub use backend::{ControlBackend, ControlSession, MixerBackend, MixerSession, PlaybackElement};
pub use volume::read_master_volume;
pub use monitor::wait_for_change;
#[cfg(feature = "alsa")]
pub use self::alsa::AlsaBackend;
