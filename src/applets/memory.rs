use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::MemoryConfig;
use crate::statusbar::{with_icon, Applet, Message, Options, StatusbarError};

const MEMINFO_PATH: &str = "/proc/meminfo";

/// Memory counters from `/proc/meminfo`, in kB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub total: u64,
    pub free: u64,
    pub buffers: u64,
    pub cached: u64,
}

impl MemInfo {
    /// Parses the fields of interest. Missing optional fields count as zero;
    /// a missing `MemTotal` is an error.
    pub fn parse(text: &str) -> Option<Self> {
        let mut info = MemInfo::default();
        let mut has_total = false;

        for line in text.lines() {
            let mut fields = line.split_whitespace();
            let (Some(key), Some(value)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Ok(value) = value.parse::<u64>() else {
                continue;
            };

            match key {
                "MemTotal:" => {
                    info.total = value;
                    has_total = true;
                }
                "MemFree:" => info.free = value,
                "Buffers:" => info.buffers = value,
                "Cached:" => info.cached = value,
                _ => {}
            }
        }

        has_total.then_some(info)
    }

    /// Share of memory not free, buffered or cached, rounded down.
    pub fn used_percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let reclaimable = self.free.saturating_add(self.buffers).saturating_add(self.cached);
        let used = self.total.saturating_sub(reclaimable);
        Some((used as u128 * 100 / self.total as u128) as u8)
    }
}

#[derive(Debug)]
pub struct MemoryApplet {
    icon: String,
    interval: Duration,
    path: PathBuf,
}

impl MemoryApplet {
    pub fn new(config: &MemoryConfig) -> Self {
        Self {
            icon: config.icon.clone(),
            interval: Duration::from_secs(config.interval_secs),
            path: PathBuf::from(MEMINFO_PATH),
        }
    }

    pub fn with_options(config: &MemoryConfig, options: &Options) -> Result<Self, StatusbarError> {
        let mut config = config.clone();
        for (key, value) in options {
            match key.as_str() {
                "icon" => config.icon = value.clone(),
                "interval" => {
                    config.interval_secs = value.parse().map_err(|_| StatusbarError::InvalidOption {
                        applet: "memory".to_string(),
                        key: key.clone(),
                        value: value.clone(),
                    })?
                }
                _ => {
                    return Err(StatusbarError::UnknownOption {
                        applet: "memory".to_string(),
                        key: key.clone(),
                    })
                }
            }
        }
        Ok(Self::new(&config))
    }

    fn render(&self, info: &MemInfo) -> Option<Message> {
        let percent = info.used_percent()?;
        Some(Message::new(with_icon(&self.icon, &format!("{}%", percent))))
    }
}

#[async_trait]
impl Applet for MemoryApplet {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn init(&mut self) -> Result<(), StatusbarError> {
        tokio::fs::metadata(&self.path).await.map(|_| ()).map_err(|e| StatusbarError::Init {
            applet: "memory".to_string(),
            reason: format!("cannot access {}: {}", self.path.display(), e),
        })
    }

    async fn run(&mut self) -> Option<Message> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), e);
                return None;
            }
        };

        match MemInfo::parse(&text) {
            Some(info) => self.render(&info),
            None => {
                tracing::warn!("No MemTotal in {}", self.path.display());
                None
            }
        }
    }

    async fn wait(&mut self) {
        tokio::time::sleep(self.interval).await;
    }
}
