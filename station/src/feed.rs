use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use ecosense::Observation;
use tokio::sync::broadcast;

pub type ObservationBatch = Arc<Vec<Observation>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    pub channel_capacity: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedMetrics {
    pub published: u64,
    pub active_datasets: usize,
}

// fans whole observation batches out to dashboard subscribers; a consumer
// that lags just misses superseded batches (last-write-wins)
#[derive(Debug)]
pub struct ObservationFeed {
    channels: RwLock<HashMap<String, Arc<broadcast::Sender<ObservationBatch>>>>,
    channel_capacity: usize,
    published: AtomicU64,
}

impl Default for ObservationFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationFeed {
    pub fn new() -> Self {
        Self::with_config(FeedConfig::default())
    }

    pub fn with_config(config: FeedConfig) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            channel_capacity: config.channel_capacity.max(1),
            published: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self, dataset: &str) -> broadcast::Receiver<ObservationBatch> {
        let mut guard = self.channels.write().expect("feed channel lock poisoned");
        let sender = guard
            .entry(dataset_key(dataset))
            .or_insert_with(|| {
                let (tx, _) = broadcast::channel(self.channel_capacity);
                Arc::new(tx)
            })
            .clone();
        sender.subscribe()
    }

    pub fn ingest_batch(&self, dataset: &str, observations: Vec<Observation>) -> usize {
        let batch: ObservationBatch = Arc::new(observations);
        let guard = self.channels.read().expect("feed channel lock poisoned");
        let receivers = if let Some(sender) = guard.get(&dataset_key(dataset)) {
            let _ = sender.send(batch);
            sender.receiver_count()
        } else {
            0
        };
        self.published.fetch_add(1, Ordering::Relaxed);
        receivers
    }

    pub fn subscriber_count(&self, dataset: &str) -> usize {
        let guard = self.channels.read().expect("feed channel lock poisoned");
        guard
            .get(&dataset_key(dataset))
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }

    pub fn active_datasets(&self) -> Vec<String> {
        let guard = self.channels.read().expect("feed channel lock poisoned");
        guard
            .iter()
            .filter(|(_, sender)| sender.receiver_count() > 0)
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn metrics(&self) -> FeedMetrics {
        FeedMetrics {
            published: self.published.load(Ordering::Relaxed),
            active_datasets: self.active_datasets().len(),
        }
    }
}

fn dataset_key(dataset: &str) -> String {
    dataset.trim().to_ascii_lowercase()
}
