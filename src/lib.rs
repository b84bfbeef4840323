pub mod sound;
pub mod statusbar;
pub mod applets;
pub mod config;
pub mod runtime;

pub use sound::{read_master_volume, wait_for_change, Card, Selector, VolumeRange, SoundError, BackendError};
#[cfg(feature = "alsa")]
pub use sound::AlsaBackend;
pub use statusbar::{Applet, AppletDescriptor, AppletRegistry, Message, Segment, Statusbar, StatusbarError};
pub use applets::{builtin_registry, CpuApplet, DateApplet, MemoryApplet, VolumeApplet};
pub use config::{Config, CpuConfig, DateConfig, MemoryConfig, TemperatureScale, VolumeConfig};
