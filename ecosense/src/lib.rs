pub mod config;
pub mod constant;
pub mod engine;
pub mod estimator;
pub mod labeler;
pub mod logging;
pub mod observation;
pub mod pipeline;
pub mod projection;
pub mod sanitize;
pub mod utils;

pub use config::{DashboardConfig, PanelConfig};
pub use constant::{Const, PipelineError, Trend};
pub use engine::{DashboardEngine, DashboardSnapshot, PanelProjection};
pub use estimator::TrendClassifier;
pub use labeler::{TrainingPair, latest_features, training_pairs};
pub use logging::init_logging;
pub use observation::Observation;
pub use pipeline::{Estimate, MetricPipeline, PipelineState, estimate_next_value};
pub use projection::project;
pub use sanitize::clean_series;
