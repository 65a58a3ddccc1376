use ecosense::DashboardConfig;

#[test]
fn default_covers_original_dashboard_panels() {
    let config = DashboardConfig::default();
    assert_eq!(config.location, "cairo");
    assert!(config.air_panels.iter().any(|panel| panel.metric == "pm2_5"));
    assert!(config.air_panels.iter().any(|panel| panel.metric == "aqi"));
    assert!(config.water_panels.iter().any(|panel| panel.metric == "ph"));
    assert_eq!(config.air_panels.len(), 8);
    assert_eq!(config.water_panels.len(), 3);
}

#[test]
fn yaml_config_parses_with_defaults() {
    let yaml = r#"
location: giza
air_panels:
  - metric: pm2_5
    title: PM2.5
"#;
    let config = DashboardConfig::from_yaml_str(yaml).expect("valid yaml");
    assert_eq!(config.location, "giza");
    assert_eq!(config.air_panels.len(), 1);
    assert!(config.water_panels.is_empty());
}

#[test]
fn yaml_without_location_falls_back_to_default() {
    let yaml = r#"
water_panels:
  - metric: ph
    title: pH Level
"#;
    let config = DashboardConfig::from_yaml_str(yaml).expect("valid yaml");
    assert_eq!(config.location, "cairo");
    assert_eq!(config.water_panels.len(), 1);
}
