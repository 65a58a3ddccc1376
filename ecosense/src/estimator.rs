use crate::constant::{Const, PipelineError};
use crate::labeler::TrainingPair;

#[derive(Debug, Clone, Copy)]
struct ClassStats {
    label: u8,
    prior_ln: f64,
    mean: [f64; 2],
    var: [f64; 2],
}

#[derive(Debug, Clone)]
pub struct TrendClassifier {
    classes: Vec<ClassStats>,
}

impl TrendClassifier {
    pub fn fit(pairs: &[TrainingPair]) -> Result<Self, PipelineError> {
        if pairs.is_empty() {
            return Err(PipelineError::InsufficientData);
        }

        let total = pairs.len() as f64;
        let mut classes = Vec::with_capacity(2);
        for label in [0u8, 1u8] {
            let members: Vec<&TrainingPair> =
                pairs.iter().filter(|pair| pair.label == label).collect();
            if members.is_empty() {
                continue;
            }

            let count = members.len() as f64;
            let mut mean = [0.0f64; 2];
            for pair in &members {
                mean[0] += pair.features[0];
                mean[1] += pair.features[1];
            }
            mean[0] /= count;
            mean[1] /= count;

            let mut var = [0.0f64; 2];
            for pair in &members {
                var[0] += (pair.features[0] - mean[0]).powi(2);
                var[1] += (pair.features[1] - mean[1]).powi(2);
            }
            // the floor keeps constant features from collapsing the density
            var[0] = (var[0] / count).max(Const::VAR_FLOOR);
            var[1] = (var[1] / count).max(Const::VAR_FLOOR);

            let stats = ClassStats {
                label,
                prior_ln: (count / total).ln(),
                mean,
                var,
            };
            if !stats_finite(&stats) {
                return Err(PipelineError::NumericDegeneracy(format!(
                    "non-finite parameters fitted for label {label}"
                )));
            }
            classes.push(stats);
        }

        Ok(Self { classes })
    }

    // classes are visited in ascending label order and only a strictly
    // better score replaces the running best, so ties resolve to label 0
    pub fn predict(&self, features: [f64; 2]) -> u8 {
        let mut best: Option<(u8, f64)> = None;
        for class in &self.classes {
            let score = class.prior_ln
                + log_gaussian(features[0], class.mean[0], class.var[0])
                + log_gaussian(features[1], class.mean[1], class.var[1]);
            let improved = match best {
                None => true,
                Some((_, best_score)) => score > best_score,
            };
            if improved {
                best = Some((class.label, score));
            }
        }
        best.map(|(label, _)| label).unwrap_or(0)
    }
}

fn stats_finite(stats: &ClassStats) -> bool {
    stats.prior_ln.is_finite()
        && stats.mean.iter().all(|v| v.is_finite())
        && stats.var.iter().all(|v| v.is_finite())
}

fn log_gaussian(x: f64, mean: f64, var: f64) -> f64 {
    let diff = x - mean;
    -0.5 * ((2.0 * std::f64::consts::PI * var).ln() + diff * diff / var)
}
