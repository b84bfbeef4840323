//! In-memory backends for exercising the session sequences without hardware.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::backend::{ControlBackend, ControlSession, MixerBackend, MixerSession, PlaybackElement};
use super::error::BackendError;
use super::types::Selector;

#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Lifecycle {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MixerStep {
    Open,
    Attach,
    Register,
    Load,
    Find,
    Read,
}

#[derive(Clone, Debug)]
pub struct FakeMixer {
    pub range: (i64, i64),
    pub current: i64,
    pub fail_at: Option<MixerStep>,
    pub lifecycle: Lifecycle,
}

impl FakeMixer {
    pub fn new(min: i64, max: i64, current: i64) -> Self {
        Self {
            range: (min, max),
            current,
            fail_at: None,
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn failing_at(mut self, step: MixerStep) -> Self {
        self.fail_at = Some(step);
        self
    }

    fn fails(&self, step: MixerStep) -> bool {
        self.fail_at == Some(step)
    }
}

impl MixerBackend for FakeMixer {
    type Session = FakeMixerSession;

    fn open_mixer(&self) -> Result<FakeMixerSession, BackendError> {
        self.lifecycle.record("open");
        if self.fails(MixerStep::Open) {
            return Err(BackendError::new("snd_mixer_open", 12));
        }
        self.lifecycle.opened.fetch_add(1, Ordering::SeqCst);
        Ok(FakeMixerSession { mixer: self.clone() })
    }
}

pub struct FakeMixerSession {
    mixer: FakeMixer,
}

impl MixerSession for FakeMixerSession {
    type Element<'a> = FakeElement<'a>;

    fn attach(&mut self, device: &str) -> Result<(), BackendError> {
        self.mixer.lifecycle.record(format!("attach {}", device));
        if self.mixer.fails(MixerStep::Attach) {
            return Err(BackendError::new("snd_mixer_attach", 2));
        }
        Ok(())
    }

    fn register(&mut self) -> Result<(), BackendError> {
        self.mixer.lifecycle.record("register");
        if self.mixer.fails(MixerStep::Register) {
            return Err(BackendError::new("snd_mixer_selem_register", 22));
        }
        Ok(())
    }

    fn load(&mut self) -> Result<(), BackendError> {
        self.mixer.lifecycle.record("load");
        if self.mixer.fails(MixerStep::Load) {
            return Err(BackendError::new("snd_mixer_load", 5));
        }
        Ok(())
    }

    fn find_element(&self, selector: &Selector) -> Option<FakeElement<'_>> {
        self.mixer.lifecycle.record(format!("find {}", selector));
        if self.mixer.fails(MixerStep::Find) {
            return None;
        }
        Some(FakeElement { mixer: &self.mixer })
    }
}

impl Drop for FakeMixerSession {
    fn drop(&mut self) {
        self.mixer.lifecycle.record("close");
        self.mixer.lifecycle.closed.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct FakeElement<'a> {
    mixer: &'a FakeMixer,
}

impl PlaybackElement for FakeElement<'_> {
    fn playback_volume_range(&self) -> (i64, i64) {
        self.mixer.range
    }

    fn playback_volume(&self, channel: u32) -> Result<i64, BackendError> {
        self.mixer.lifecycle.record(format!("read {}", channel));
        if self.mixer.fails(MixerStep::Read) {
            return Err(BackendError::new("snd_mixer_selem_get_playback_volume", 5));
        }
        Ok(self.mixer.current)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlStep {
    Open,
    Subscribe,
    Wait,
}

#[derive(Clone, Debug)]
pub struct FakeControl {
    pub cards: Vec<u32>,
    pub ready: usize,
    pub fail_at: Option<ControlStep>,
    pub lifecycle: Lifecycle,
}

impl FakeControl {
    pub fn new(cards: Vec<u32>) -> Self {
        Self {
            cards,
            ready: 1,
            fail_at: None,
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn failing_at(mut self, step: ControlStep) -> Self {
        self.fail_at = Some(step);
        self
    }

    fn fails(&self, step: ControlStep) -> bool {
        self.fail_at == Some(step)
    }
}

impl ControlBackend for FakeControl {
    type Session = FakeControlSession;

    fn first_card(&self) -> Option<u32> {
        self.lifecycle.record("first_card");
        self.cards.first().copied()
    }

    fn open_control(&self, device: &str) -> Result<FakeControlSession, BackendError> {
        self.lifecycle.record(format!("open {}", device));
        if self.fails(ControlStep::Open) {
            return Err(BackendError::new("snd_ctl_open", 2));
        }
        self.lifecycle.opened.fetch_add(1, Ordering::SeqCst);
        Ok(FakeControlSession { control: self.clone() })
    }
}

pub struct FakeControlSession {
    control: FakeControl,
}

impl ControlSession for FakeControlSession {
    fn subscribe_events(&self) -> Result<(), BackendError> {
        self.control.lifecycle.record("subscribe");
        if self.control.fails(ControlStep::Subscribe) {
            return Err(BackendError::new("snd_ctl_subscribe_events", 16));
        }
        Ok(())
    }

    fn wait_ready(&self) -> Result<usize, BackendError> {
        self.control.lifecycle.record("wait");
        if self.control.fails(ControlStep::Wait) {
            return Err(BackendError::new("poll", 4));
        }
        Ok(self.control.ready)
    }
}

impl Drop for FakeControlSession {
    fn drop(&mut self) {
        self.control.lifecycle.record("close");
        self.control.lifecycle.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Both halves together, the way a real backend provides them.
#[derive(Clone, Debug)]
pub struct FakeSound {
    pub mixer: FakeMixer,
    pub control: FakeControl,
}

impl FakeSound {
    pub fn new(mixer: FakeMixer, control: FakeControl) -> Self {
        Self { mixer, control }
    }
}

impl MixerBackend for FakeSound {
    type Session = FakeMixerSession;

    fn open_mixer(&self) -> Result<FakeMixerSession, BackendError> {
        self.mixer.open_mixer()
    }
}

impl ControlBackend for FakeSound {
    type Session = FakeControlSession;

    fn first_card(&self) -> Option<u32> {
        self.control.first_card()
    }

    fn open_control(&self, device: &str) -> Result<FakeControlSession, BackendError> {
        self.control.open_control(device)
    }
}
