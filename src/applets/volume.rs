use std::time::Duration;

use async_trait::async_trait;

use crate::config::VolumeConfig;
use crate::sound::{read_master_volume, wait_for_change, Card, ControlBackend, MixerBackend};
use crate::statusbar::{with_icon, Applet, Message, Options, StatusbarError};

/// Shows the master volume and refreshes whenever a mixer control changes.
#[derive(Debug)]
pub struct VolumeApplet<B> {
    backend: B,
    icon: String,
    card: Card,
    retry_interval: Duration,
}

impl<B> VolumeApplet<B>
where
    B: MixerBackend + ControlBackend + Clone + Send + Sync + std::fmt::Debug + 'static,
{
    pub fn new(backend: B, config: &VolumeConfig) -> Self {
        Self {
            backend,
            icon: config.icon.clone(),
            card: Card::from(config.card),
            retry_interval: Duration::from_millis(config.retry_interval_ms),
        }
    }

    pub fn with_options(backend: B, config: &VolumeConfig, options: &Options) -> Result<Self, StatusbarError> {
        let mut config = config.clone();
        for (key, value) in options {
            let invalid = || StatusbarError::InvalidOption {
                applet: "volume".to_string(),
                key: key.clone(),
                value: value.clone(),
            };
            match key.as_str() {
                "icon" => config.icon = value.clone(),
                "card" => config.card = value.parse().map_err(|_| invalid())?,
                "retry_interval_ms" => config.retry_interval_ms = value.parse().map_err(|_| invalid())?,
                _ => {
                    return Err(StatusbarError::UnknownOption {
                        applet: "volume".to_string(),
                        key: key.clone(),
                    })
                }
            }
        }
        Ok(Self::new(backend, &config))
    }

    pub fn card(&self) -> Card {
        self.card
    }

    fn render(&self, percent: u8) -> Message {
        Message::new(with_icon(&self.icon, &format!("{}%", percent)))
    }
}

#[async_trait]
impl<B> Applet for VolumeApplet<B>
where
    B: MixerBackend + ControlBackend + Clone + Send + Sync + std::fmt::Debug + 'static,
{
    fn name(&self) -> &'static str {
        "volume"
    }

    async fn run(&mut self) -> Option<Message> {
        let backend = self.backend.clone();
        match tokio::task::spawn_blocking(move || read_master_volume(&backend)).await {
            Ok(Ok(percent)) => Some(self.render(percent)),
            Ok(Err(e)) => {
                tracing::warn!("Failed to read volume: {}", e);
                None
            }
            Err(e) => {
                tracing::error!("Volume reader task failed: {}", e);
                None
            }
        }
    }

    async fn wait(&mut self) {
        let backend = self.backend.clone();
        let card = self.card;
        let result = tokio::task::spawn_blocking(move || wait_for_change(&backend, card)).await;

        let failure = match result {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e.to_string(),
            Err(e) => e.to_string(),
        };

        tracing::warn!(
            "Failed to wait for volume changes: {}; retrying in {:?}",
            failure,
            self.retry_interval
        );
        tokio::time::sleep(self.retry_interval).await;
    }
}
