use tracing::Level;

pub fn init_logging() {
    let level = std::env::var("ECOSENSE_LOG")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
