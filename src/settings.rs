use anyhow::Result;
use serde::{Deserialize, Serialize};

// Embed settings.yaml at compile time
const EMBEDDED_SETTINGS: &str = include_str!("../settings.yaml");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub demo: DemoSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoSettings {
    pub name: String,
    #[serde(default)]
    pub initial_on: bool,
    #[serde(default)]
    pub controlled_value: Option<bool>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default = "default_diagnostics")]
    pub diagnostics: bool,
}

fn default_diagnostics() -> bool {
    true
}

pub fn load_settings() -> Result<Settings> {
    tracing::info!("Using embedded settings");
    let settings: Settings = serde_yaml::from_str(EMBEDDED_SETTINGS)?;
    Ok(settings)
}
