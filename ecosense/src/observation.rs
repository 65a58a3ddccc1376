use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(flatten)]
    pub metrics: BTreeMap<String, Value>,
}

impl Observation {
    pub fn new(datetime: DateTime<Utc>, location: impl Into<String>) -> Self {
        Self {
            datetime,
            location: location.into(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metrics.insert(name.into(), value.into());
        self
    }

    pub fn metric(&self, name: &str) -> Option<&Value> {
        self.metrics.get(name)
    }
}
