use crate::constant::Const;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingPair {
    pub features: [f64; 2],
    pub label: u8,
}

pub fn training_pairs(series: &[f64]) -> Vec<TrainingPair> {
    if series.len() < Const::MIN_CLEAN_LEN {
        return Vec::new();
    }

    // labels look two values past the window start and compare against the
    // final value of the series (the anchor)
    let anchor = series[series.len() - 1];
    (0..series.len() - 2)
        .map(|i| TrainingPair {
            features: [series[i], series[i + 1]],
            label: u8::from(series[i + 2] > anchor),
        })
        .collect()
}

pub fn latest_features(series: &[f64]) -> Option<[f64; 2]> {
    if series.len() < 2 {
        return None;
    }
    Some([series[series.len() - 2], series[series.len() - 1]])
}
