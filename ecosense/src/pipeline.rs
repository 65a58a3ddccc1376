use tracing::{debug, warn};

use crate::constant::{Const, Trend};
use crate::estimator::TrendClassifier;
use crate::labeler::{latest_features, training_pairs};
use crate::observation::Observation;
use crate::projection::project;
use crate::sanitize::clean_series;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    Projected(f64),
    InsufficientData,
}

impl Estimate {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Projected(value) => Some(value),
            Self::InsufficientData => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    Idle,
    Sanitizing,
    InsufficientData,
    Training,
    Predicting,
    Projected,
    Failed,
}

impl PipelineState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sanitizing => "sanitizing",
            Self::InsufficientData => "insufficient_data",
            Self::Training => "training",
            Self::Predicting => "predicting",
            Self::Projected => "projected",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricPipeline {
    metric: String,
    title: String,
    state: PipelineState,
    estimate: Estimate,
}

impl MetricPipeline {
    pub fn new(metric: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            title: title.into(),
            state: PipelineState::Idle,
            estimate: Estimate::InsufficientData,
        }
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn estimate(&self) -> Estimate {
        self.estimate
    }

    pub fn run(&mut self, observations: &[Observation]) -> Estimate {
        self.state = PipelineState::Idle;
        self.estimate = Estimate::InsufficientData;

        self.state = PipelineState::Sanitizing;
        let series = clean_series(observations, &self.metric);
        if series.len() < Const::MIN_CLEAN_LEN {
            debug!(
                metric = %self.metric,
                points = series.len(),
                "insufficient data for estimation"
            );
            self.state = PipelineState::InsufficientData;
            return self.estimate;
        }

        self.state = PipelineState::Training;
        let pairs = training_pairs(&series);
        let classifier = match TrendClassifier::fit(&pairs) {
            Ok(classifier) => classifier,
            Err(error) => {
                warn!(metric = %self.metric, %error, "trend estimation failed");
                self.state = PipelineState::Failed;
                return self.estimate;
            }
        };

        self.state = PipelineState::Predicting;
        let Some(features) = latest_features(&series) else {
            self.state = PipelineState::Failed;
            return self.estimate;
        };
        let trend = Trend::from_label(classifier.predict(features));

        let last_value = series[series.len() - 1];
        self.estimate = Estimate::Projected(project(trend, last_value));
        self.state = PipelineState::Projected;
        self.estimate
    }
}

pub fn estimate_next_value(observations: &[Observation], metric: &str) -> Estimate {
    MetricPipeline::new(metric, metric).run(observations)
}
