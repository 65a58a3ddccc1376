use chrono::{Duration, Utc};
use ecosense::Observation;

// index-driven waveforms keep the generated series deterministic for a
// given count; no RNG is involved
pub fn synthetic_air_observations(location: &str, count: usize) -> Vec<Observation> {
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|index| {
            let t = index as f64;
            let wave = (t * 0.7).sin();
            let mut observation =
                Observation::new(start + Duration::hours(index as i64), location)
                    .with_metric("aqi", 85.0 + t * 0.8 + wave * 6.0)
                    .with_metric("co", 1.2 + wave * 0.15)
                    .with_metric("no2", 0.8 + wave * 0.1)
                    .with_metric("o3", 0.4 + t * 0.01)
                    .with_metric("so2", 0.3 + wave * 0.05)
                    .with_metric("pm2_5", 25.0 + t * 0.5 + wave * 3.0)
                    .with_metric("pm10", 45.0 + t * 0.6 + wave * 4.0);
            // nh3 is intentionally patchy so downstream sanitizing stays exercised
            if index % 3 == 0 {
                observation = observation.with_metric("nh3", 0.2 + wave * 0.02);
            }
            observation
        })
        .collect()
}

pub fn synthetic_water_observations(location: &str, count: usize) -> Vec<Observation> {
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|index| {
            let t = index as f64;
            let wave = (t * 0.5).cos();
            Observation::new(start + Duration::hours(index as i64), location)
                .with_metric("ph", 7.2 + wave * 0.2)
                .with_metric("conductivity", 450.0 + t * 1.5 + wave * 12.0)
                .with_metric("turbidity", 3.5 + wave * 0.6)
        })
        .collect()
}
