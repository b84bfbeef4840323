use super::backend::{MixerBackend, MixerSession, PlaybackElement};
use super::error::SoundError;
use super::types::{Selector, VolumeRange, DEFAULT_MIXER_DEVICE};

const PLAYBACK_CHANNEL: u32 = 0;

/// Reads the "Master" playback level of the default mixer as a percentage.
///
/// Every call opens and closes its own mixer session. On failure the session,
/// if one was opened, is closed before the error is returned.
pub fn read_master_volume<B: MixerBackend>(backend: &B) -> Result<u8, SoundError> {
    read_volume(backend, DEFAULT_MIXER_DEVICE, &Selector::MASTER)
}

fn read_volume<B: MixerBackend>(
    backend: &B,
    device: &str,
    selector: &Selector,
) -> Result<u8, SoundError> {
    let mut mixer = backend.open_mixer().map_err(SoundError::MixerOpen)?;
    tracing::debug!("Opened mixer session");

    mixer.attach(device).map_err(|source| SoundError::MixerAttach {
        device: device.to_string(),
        source,
    })?;
    mixer.register().map_err(SoundError::MixerRegister)?;
    mixer.load().map_err(SoundError::MixerLoad)?;

    let element = mixer
        .find_element(selector)
        .ok_or(SoundError::ElementNotFound(*selector))?;

    let (min, max) = element.playback_volume_range();
    let current = element
        .playback_volume(PLAYBACK_CHANNEL)
        .map_err(|source| SoundError::VolumeRead { selector: *selector, source })?;

    let percent = VolumeRange::new(min, max).percent(current)?;
    tracing::debug!("Volume of {} is {} in [{}, {}] ({}%)", selector, current, min, max, percent);

    Ok(percent)
}
