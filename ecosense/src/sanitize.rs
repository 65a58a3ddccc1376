use crate::observation::Observation;

pub fn clean_series(observations: &[Observation], metric: &str) -> Vec<f64> {
    observations
        .iter()
        .filter_map(|obs| obs.metric(metric))
        .filter_map(|value| value.as_f64())
        .filter(|value| value.is_finite())
        .collect()
}
