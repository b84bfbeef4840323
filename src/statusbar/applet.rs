use async_trait::async_trait;

use super::error::StatusbarError;
use super::types::Message;

/// A self-contained producer of messages for one bar segment.
///
/// The bar alternates between `run` and `wait` forever. `wait` is expected to
/// suspend until there is something new to show.
#[async_trait]
pub trait Applet: Send + std::fmt::Debug {
    fn name(&self) -> &'static str;

    async fn init(&mut self) -> Result<(), StatusbarError> {
        Ok(())
    }

    async fn run(&mut self) -> Option<Message>;
    async fn wait(&mut self);
}

/// Prefixes `text` with `icon` unless the icon is empty.
pub fn with_icon(icon: &str, text: &str) -> String {
    if icon.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", icon, text)
    }
}
