//! Observation supply for the ecosense dashboard: raw-record normalization,
//! CSV/JSON loading, deterministic synthetic generators, and a broadcast
//! feed that fans observation batches out to dashboard subscribers.

mod feed;
mod loader;
mod record;
mod synthetic;

pub use feed::{FeedConfig, FeedMetrics, ObservationBatch, ObservationFeed};
pub use loader::{load_observations, load_raw_records};
pub use record::{RawRecord, SourceError, into_observation, parse_datetime};
pub use synthetic::{synthetic_air_observations, synthetic_water_observations};

#[cfg(test)]
mod tests {
    use super::{
        ObservationFeed, RawRecord, into_observation, parse_datetime,
        synthetic_air_observations, synthetic_water_observations,
    };
    use ecosense::clean_series;
    use serde_json::Value;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn fanout_delivers_same_batch_to_multiple_subscribers() {
        let feed = ObservationFeed::new();
        let mut sub_a = feed.subscribe("air");
        let mut sub_b = feed.subscribe("air");

        let batch = synthetic_air_observations("cairo", 4);
        let receivers = feed.ingest_batch("air", batch);
        assert_eq!(receivers, 2);

        let recv_a = sub_a.recv().await.expect("subscriber a receives batch");
        let recv_b = sub_b.recv().await.expect("subscriber b receives batch");
        assert_eq!(recv_a.len(), 4);
        assert_eq!(recv_b.len(), 4);
        assert_eq!(recv_a[0].location, "cairo");
    }

    #[test]
    fn metrics_track_published_and_active_datasets() {
        let feed = ObservationFeed::new();
        let _sub = feed.subscribe("water");
        feed.ingest_batch("water", synthetic_water_observations("cairo", 3));
        feed.ingest_batch("air", synthetic_air_observations("cairo", 3));

        let metrics = feed.metrics();
        assert_eq!(metrics.published, 2);
        assert_eq!(metrics.active_datasets, 1);
        assert_eq!(feed.subscriber_count("water"), 1);
        assert_eq!(feed.subscriber_count("air"), 0);
    }

    #[test]
    fn synthetic_air_metric_values_are_deterministic() {
        let first = synthetic_air_observations("cairo", 12);
        let second = synthetic_air_observations("cairo", 12);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.metrics, b.metrics);
        }

        let pm25 = clean_series(&first, "pm2_5");
        assert_eq!(pm25.len(), 12);
        let nh3 = clean_series(&first, "nh3");
        assert_eq!(nh3.len(), 4);
    }

    #[test]
    fn raw_record_keeps_junk_metric_values_verbatim() {
        let mut record = RawRecord::new();
        record.insert("timestamp".to_string(), Value::from("2024-03-10T12:00:00"));
        record.insert("location".to_string(), Value::from("giza"));
        record.insert("ph".to_string(), Value::from(7.2));
        record.insert("turbidity".to_string(), Value::from("N/A"));

        let observation = into_observation(record, "cairo").expect("valid record");
        assert_eq!(observation.location, "giza");
        assert_eq!(observation.metric("ph"), Some(&Value::from(7.2)));
        assert_eq!(observation.metric("turbidity"), Some(&Value::from("N/A")));

        let cleaned = clean_series(std::slice::from_ref(&observation), "turbidity");
        assert!(cleaned.is_empty());
    }

    #[test]
    fn record_without_timestamp_is_rejected() {
        let mut record = RawRecord::new();
        record.insert("ph".to_string(), Value::from(7.2));
        assert!(into_observation(record, "cairo").is_err());
    }

    #[test]
    fn datetime_parsing_accepts_common_shapes() {
        assert!(parse_datetime("2024-03-10T12:00:00").is_ok());
        assert!(parse_datetime("2024-03-10 12:00:00").is_ok());
        assert!(parse_datetime("2024-03-10").is_ok());
        assert!(parse_datetime("2024-03-10T12:00:00+02:00").is_ok());
        assert!(parse_datetime("soon").is_err());
    }
}
