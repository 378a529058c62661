use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Deserialize, Serialize)]
struct Settings {
    demo: DemoSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct DemoSettings {
    name: String,
    #[serde(default)]
    initial_on: bool,
    #[serde(default)]
    controlled_value: Option<bool>,
    #[serde(default)]
    read_only: bool,
    #[serde(default = "default_diagnostics")]
    diagnostics: bool,
}

fn default_diagnostics() -> bool {
    true
}

// Validate settings.yaml at build time so a malformed file fails the build
// instead of the embedded parse at startup
fn main() {
    println!("cargo:rerun-if-changed=settings.yaml");

    let settings_yaml = fs::read_to_string("settings.yaml")
        .expect("Failed to read settings.yaml - ensure it exists in the project root");

    let settings: Settings =
        serde_yaml::from_str(&settings_yaml).expect("Failed to parse settings.yaml");

    if settings.demo.name.is_empty() {
        panic!("settings.yaml: demo.name must not be empty");
    }
}
