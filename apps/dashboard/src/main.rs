use ecosense::{DashboardConfig, DashboardEngine, Estimate};
use station::{ObservationFeed, synthetic_air_observations, synthetic_water_observations};

fn main() {
    ecosense::init_logging();

    let config = load_config();
    let feed = ObservationFeed::new();
    let mut air_sub = feed.subscribe("air");
    let mut water_sub = feed.subscribe("water");

    let mut air_engine = DashboardEngine::new(&config.location, &config.air_panels);
    let mut water_engine = DashboardEngine::new(&config.location, &config.water_panels);

    feed.ingest_batch("air", synthetic_air_observations(&config.location, 48));
    feed.ingest_batch("water", synthetic_water_observations(&config.location, 48));

    while let Ok(batch) = air_sub.try_recv() {
        air_engine.set_observations(batch.as_ref().clone());
    }
    while let Ok(batch) = water_sub.try_recv() {
        water_engine.set_observations(batch.as_ref().clone());
    }

    print_snapshot("air quality", &air_engine);
    print_snapshot("water quality", &water_engine);

    let metrics = feed.metrics();
    println!(
        "feed published={} active_datasets={}",
        metrics.published, metrics.active_datasets
    );
}

fn load_config() -> DashboardConfig {
    match std::env::var("ECOSENSE_CONFIG") {
        Ok(path) => match DashboardConfig::load(&path) {
            Ok(config) => config,
            Err(error) => {
                println!("dashboard config load error path={path} err={error}");
                DashboardConfig::default()
            }
        },
        Err(_) => DashboardConfig::default(),
    }
}

fn print_snapshot(domain: &str, engine: &DashboardEngine) {
    let snapshot = engine.snapshot();
    println!("{domain} projections for {}", snapshot.location);
    for panel in &snapshot.panels {
        match panel.estimate {
            Estimate::Projected(value) => println!("  {:<20} {value:.2}", panel.title),
            Estimate::InsufficientData => println!("  {:<20} insufficient data", panel.title),
        }
    }
    println!("{}", engine.dataframe());
}
