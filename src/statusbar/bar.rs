use std::collections::HashMap;

use tokio::sync::mpsc;

use super::applet::Applet;
use super::error::StatusbarError;
use super::types::Segment;

/// A collection of applets whose updates are gathered as ordered segments.
#[derive(Debug)]
pub struct Statusbar {
    applets: Vec<Box<dyn Applet>>,
}

impl Statusbar {
    pub async fn new(mut applets: Vec<Box<dyn Applet>>) -> Result<Self, StatusbarError> {
        if applets.is_empty() {
            return Err(StatusbarError::Empty);
        }

        for applet in applets.iter_mut() {
            applet.init().await?;
            tracing::debug!("Initialized applet '{}'", applet.name());
        }

        Ok(Self { applets })
    }

    pub fn applet_count(&self) -> usize {
        self.applets.len()
    }

    /// Spawns one task per applet and returns a stream of full segment lists.
    ///
    /// Each item holds the latest segment of every applet that has produced
    /// one so far, in the order the applets were given. Must be called from
    /// within a tokio runtime. Tasks stop once the receiver is dropped.
    pub fn listen(self) -> mpsc::UnboundedReceiver<Vec<Segment>> {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel::<(usize, Segment)>();
        let (segments_tx, segments_rx) = mpsc::unbounded_channel();

        let count = self.applets.len();
        let mut instances: HashMap<&'static str, usize> = HashMap::new();

        for (position, mut applet) in self.applets.into_iter().enumerate() {
            let name = applet.name();
            let instance = instances.entry(name).or_insert(0);
            *instance += 1;
            let instance = *instance;

            let tx = update_tx.clone();
            tokio::spawn(async move {
                loop {
                    if let Some(message) = applet.run().await {
                        if tx.send((position, Segment::new(name, instance, message))).is_err() {
                            break;
                        }
                    }
                    applet.wait().await;
                }
                tracing::debug!("Applet '{}' #{} stopped", name, instance);
            });
        }
        drop(update_tx);

        tokio::spawn(async move {
            let mut latest: Vec<Option<Segment>> = vec![None; count];
            while let Some((position, segment)) = update_rx.recv().await {
                latest[position] = Some(segment);
                let segments = latest.iter().flatten().cloned().collect();
                if segments_tx.send(segments).is_err() {
                    break;
                }
            }
        });

        segments_rx
    }
}
