use serde::{Deserialize, Serialize};

/// An update for one status bar segment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub full_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { full_text: text.into(), short_text: None }
    }
}

/// A positioned segment in the bar, identified by applet name and instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub instance: String,
    #[serde(flatten)]
    pub message: Message,
}

impl Segment {
    pub fn new(name: impl Into<String>, instance: usize, message: Message) -> Self {
        Self {
            name: name.into(),
            instance: instance.to_string(),
            message,
        }
    }
}

/// Header line that opens the i3bar/swaybar protocol stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub version: u32,
    pub click_events: bool,
}

impl Default for Header {
    fn default() -> Self {
        Self { version: 1, click_events: true }
    }
}
