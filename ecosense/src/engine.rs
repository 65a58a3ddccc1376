use polars::df;
use polars::prelude::DataFrame;
use tracing::info;

use crate::config::PanelConfig;
use crate::observation::Observation;
use crate::pipeline::{Estimate, MetricPipeline, PipelineState};

#[derive(Debug, Clone)]
pub struct PanelProjection {
    pub metric: String,
    pub title: String,
    pub state: PipelineState,
    pub estimate: Estimate,
}

#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub location: String,
    pub panels: Vec<PanelProjection>,
}

pub struct DashboardEngine {
    location: String,
    pipelines: Vec<MetricPipeline>,
    observations: Vec<Observation>,
    df_cache: DataFrame,
}

impl DashboardEngine {
    pub fn new(location: impl Into<String>, panels: &[PanelConfig]) -> Self {
        let pipelines = panels
            .iter()
            .map(|panel| MetricPipeline::new(&panel.metric, &panel.title))
            .collect();

        let mut engine = Self {
            location: location.into(),
            pipelines,
            observations: Vec::new(),
            df_cache: DataFrame::default(),
        };
        engine.rebuild_cache();
        engine
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    // every observation change reruns all panel pipelines from scratch;
    // the previous results are simply superseded
    pub fn set_observations(&mut self, observations: Vec<Observation>) {
        self.observations = observations;
        self.rerun();
    }

    fn rerun(&mut self) {
        for pipeline in &mut self.pipelines {
            pipeline.run(&self.observations);
        }
        self.rebuild_cache();
        info!(
            location = %self.location,
            observations = self.observations.len(),
            panels = self.pipelines.len(),
            "dashboard engine rebuilt"
        );
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            location: self.location.clone(),
            panels: self
                .pipelines
                .iter()
                .map(|pipeline| PanelProjection {
                    metric: pipeline.metric().to_string(),
                    title: pipeline.title().to_string(),
                    state: pipeline.state(),
                    estimate: pipeline.estimate(),
                })
                .collect(),
        }
    }

    pub fn dataframe(&self) -> DataFrame {
        self.df_cache.clone()
    }

    fn rebuild_cache(&mut self) {
        let metrics: Vec<String> = self
            .pipelines
            .iter()
            .map(|x| x.metric().to_string())
            .collect();
        let titles: Vec<String> = self
            .pipelines
            .iter()
            .map(|x| x.title().to_string())
            .collect();
        let states: Vec<&str> = self.pipelines.iter().map(|x| x.state().as_str()).collect();
        let projected: Vec<Option<f64>> = self
            .pipelines
            .iter()
            .map(|x| x.estimate().value())
            .collect();

        self.df_cache = df!(
            "metric" => metrics,
            "title" => titles,
            "state" => states,
            "projected" => projected
        )
        .expect("failed to rebuild projection dataframe cache");
    }
}
