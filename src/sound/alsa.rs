use std::ffi::CString;

use alsa::ctl::Ctl;
use alsa::mixer::{Mixer, Selem, SelemChannelId, SelemId};
use alsa::poll::Descriptors;

use super::backend::{ControlBackend, ControlSession, MixerBackend, MixerSession, PlaybackElement};
use super::error::BackendError;
use super::types::Selector;

const EINVAL: i32 = 22;

impl From<alsa::Error> for BackendError {
    fn from(e: alsa::Error) -> Self {
        BackendError::new(e.func(), e.errno())
    }
}

/// The system's ALSA library.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlsaBackend;

impl MixerBackend for AlsaBackend {
    type Session = AlsaMixer;

    fn open_mixer(&self) -> Result<AlsaMixer, BackendError> {
        Ok(AlsaMixer(Mixer::open(false)?))
    }
}

pub struct AlsaMixer(Mixer);

impl MixerSession for AlsaMixer {
    type Element<'a> = AlsaElement<'a>;

    fn attach(&mut self, device: &str) -> Result<(), BackendError> {
        let name = CString::new(device).map_err(|_| BackendError::new("snd_mixer_attach", EINVAL))?;
        self.0.attach(&name)?;
        Ok(())
    }

    fn register(&mut self) -> Result<(), BackendError> {
        Selem::register(&mut self.0)?;
        Ok(())
    }

    fn load(&mut self) -> Result<(), BackendError> {
        self.0.load()?;
        Ok(())
    }

    fn find_element(&self, selector: &Selector) -> Option<AlsaElement<'_>> {
        let id = SelemId::new(selector.name, selector.index);
        self.0.find_selem(&id).map(AlsaElement)
    }
}

impl Drop for AlsaMixer {
    fn drop(&mut self) {
        tracing::debug!("Closing mixer session");
    }
}

pub struct AlsaElement<'a>(Selem<'a>);

impl PlaybackElement for AlsaElement<'_> {
    fn playback_volume_range(&self) -> (i64, i64) {
        self.0.get_playback_volume_range()
    }

    fn playback_volume(&self, channel: u32) -> Result<i64, BackendError> {
        let channel = SelemChannelId::all()
            .get(channel as usize)
            .copied()
            .ok_or(BackendError::new("snd_mixer_selem_get_playback_volume", EINVAL))?;
        Ok(self.0.get_playback_volume(channel)?)
    }
}

impl ControlBackend for AlsaBackend {
    type Session = AlsaControl;

    fn first_card(&self) -> Option<u32> {
        match alsa::card::Iter::new().next() {
            Some(Ok(card)) => u32::try_from(card.get_index()).ok(),
            Some(Err(e)) => {
                tracing::warn!("Failed to enumerate sound cards: {}", e);
                None
            }
            None => None,
        }
    }

    fn open_control(&self, device: &str) -> Result<AlsaControl, BackendError> {
        Ok(AlsaControl(Ctl::new(device, false)?))
    }
}

pub struct AlsaControl(Ctl);

impl ControlSession for AlsaControl {
    fn subscribe_events(&self) -> Result<(), BackendError> {
        self.0.subscribe_events(true)?;
        Ok(())
    }

    fn wait_ready(&self) -> Result<usize, BackendError> {
        let mut fds = Descriptors::get(&self.0)?;
        let ready = alsa::poll::poll(&mut fds, -1)?;
        if ready > 0 {
            self.0.revents(&fds)?;
        }
        Ok(ready)
    }
}

impl Drop for AlsaControl {
    fn drop(&mut self) {
        tracing::debug!("Closing control session");
    }
}
