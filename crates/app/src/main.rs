use bevy::prelude::*;
use bevy::window::PresentMode;

use terrain::{TerrainGenConfig, TerrainPlugin};

fn main() {
    let config = load_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Terramesh".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((TerrainPlugin, rendering::RenderingPlugin))
        .insert_resource(config)
        .run();
}

/// Read generation parameters from the JSON file named by the
/// `TERRAMESH_CONFIG` environment variable; fall back to defaults when it is
/// unset or unreadable (bad values are clamped downstream, never rejected).
fn load_config() -> TerrainGenConfig {
    let Ok(path) = std::env::var("TERRAMESH_CONFIG") else {
        return TerrainGenConfig::default();
    };
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("terramesh: failed to read {}: {} (using defaults)", path, e);
            return TerrainGenConfig::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("terramesh: failed to parse {}: {} (using defaults)", path, e);
            TerrainGenConfig::default()
        }
    }
}
