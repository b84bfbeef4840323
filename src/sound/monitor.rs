use super::backend::{ControlBackend, ControlSession};
use super::error::SoundError;
use super::types::{device_name, Card};

/// Blocks the calling thread until a control on the card changes.
///
/// Opens a fresh control session, subscribes to its events and waits on its
/// descriptors with no timeout. The event itself is not read; callers re-query
/// whatever they are interested in. The session is closed on every return path.
pub fn wait_for_change<B: ControlBackend>(backend: &B, card: Card) -> Result<(), SoundError> {
    let index = match card {
        Card::Index(index) => index,
        Card::First => backend.first_card().ok_or(SoundError::NoCardFound)?,
    };

    let device = device_name(index);
    let control = backend
        .open_control(&device)
        .map_err(|source| SoundError::ControlOpen { device: device.clone(), source })?;
    tracing::debug!("Opened control session on {}", device);

    control
        .subscribe_events()
        .map_err(|source| SoundError::Subscribe { device: device.clone(), source })?;

    match control.wait_ready() {
        Ok(0) => Err(SoundError::Wait { code: 0 }),
        Ok(ready) => {
            tracing::debug!("{} descriptor(s) ready on {}", ready, device);
            Ok(())
        }
        Err(e) => Err(SoundError::Wait { code: e.errno }),
    }
}
