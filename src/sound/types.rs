use super::error::SoundError;

/// Mixer device the volume reader attaches to.
pub const DEFAULT_MIXER_DEVICE: &str = "default";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Card {
    #[default]
    First,
    Index(u32),
}

impl From<i32> for Card {
    fn from(index: i32) -> Self {
        if index < 0 {
            Card::First
        } else {
            Card::Index(index as u32)
        }
    }
}

/// Canonical control device name for a card index.
pub fn device_name(index: u32) -> String {
    format!("hw:{}", index)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selector {
    pub index: u32,
    pub name: &'static str,
}

impl Selector {
    pub const MASTER: Selector = Selector { index: 0, name: "Master" };
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}',{}", self.name, self.index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeRange {
    pub min: i64,
    pub max: i64,
}

impl VolumeRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Rescales `current` into a percentage, rounding up.
    ///
    /// Values outside the range are clamped first. A range with `max <= min`
    /// has no meaningful scale and is rejected.
    pub fn percent(&self, current: i64) -> Result<u8, SoundError> {
        if self.max <= self.min {
            return Err(SoundError::InvalidRange { min: self.min, max: self.max });
        }

        let span = self.max as i128 - self.min as i128;
        let offset = current.clamp(self.min, self.max) as i128 - self.min as i128;
        let percent = (offset * 100 + span - 1) / span;

        Ok(percent as u8)
    }
}
