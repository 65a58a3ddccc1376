use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub metric: String,
    pub title: String,
}

impl PanelConfig {
    pub fn new(metric: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub air_panels: Vec<PanelConfig>,
    #[serde(default)]
    pub water_panels: Vec<PanelConfig>,
}

fn default_location() -> String {
    "cairo".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            air_panels: vec![
                PanelConfig::new("aqi", "Air Quality Index"),
                PanelConfig::new("co", "Carbon Monoxide"),
                PanelConfig::new("no2", "Nitrogen Dioxide"),
                PanelConfig::new("o3", "Ozone"),
                PanelConfig::new("so2", "Sulfur Dioxide"),
                PanelConfig::new("pm2_5", "PM2.5"),
                PanelConfig::new("pm10", "PM10"),
                PanelConfig::new("nh3", "Ammonia"),
            ],
            water_panels: vec![
                PanelConfig::new("ph", "pH Level"),
                PanelConfig::new("conductivity", "Conductivity"),
                PanelConfig::new("turbidity", "Turbidity"),
            ],
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        let config = match path.extension().and_then(|x| x.to_str()) {
            Some("json") => serde_json::from_str(&text)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text)?,
            _ => return Err("unsupported dashboard config format".into()),
        };
        Ok(config)
    }
}
