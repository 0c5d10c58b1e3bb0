//! Launch-time overrides for the scene seed and the assembly config.
//!
//! Native builds read environment variables; the web build reads the page
//! URL (`index.html?seed=7`).

use bevy::prelude::*;

use assembly::config::{AssemblyConfig, DEFAULT_SEED};

#[cfg(not(target_arch = "wasm32"))]
pub const SEED_ENV: &str = "MAKETA_SEED";
#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_ENV: &str = "MAKETA_CONFIG";

/// Parse a seed override. Surrounding whitespace is ignored.
pub fn parse_seed(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_seed() -> Option<String> {
    std::env::var(SEED_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn raw_seed() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("seed")
}

/// Seed for the scene layout, falling back to `DEFAULT_SEED`.
pub fn scene_seed() -> u64 {
    let Some(raw) = raw_seed() else {
        info!("Scene seed {} (default)", DEFAULT_SEED);
        return DEFAULT_SEED;
    };
    match parse_seed(&raw) {
        Some(seed) => {
            info!("Scene seed {} (override)", seed);
            seed
        }
        None => {
            warn!(
                "Ignoring invalid seed override {:?}, using {}",
                raw, DEFAULT_SEED
            );
            DEFAULT_SEED
        }
    }
}

/// Load a config file, keeping the defaults if it is missing or invalid.
#[cfg(not(target_arch = "wasm32"))]
pub fn config_from_path(path: &std::path::Path) -> AssemblyConfig {
    match AssemblyConfig::load_from_path(path) {
        Ok(config) => {
            info!("Assembly config loaded from {}", path.display());
            config
        }
        Err(e) => {
            warn!(
                "Assembly config {}: {}, falling back to defaults",
                path.display(),
                e
            );
            AssemblyConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn assembly_config() -> AssemblyConfig {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => config_from_path(std::path::Path::new(&path)),
        Err(_) => AssemblyConfig::default(),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn assembly_config() -> AssemblyConfig {
    AssemblyConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("7"), Some(7));
        assert_eq!(parse_seed("  2024\n"), Some(2024));
        assert_eq!(parse_seed("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("-1"), None);
        assert_eq!(parse_seed("seven"), None);
    }

    #[test]
    fn test_missing_config_file_keeps_defaults() {
        let path = std::env::temp_dir().join("maketa_no_such_config.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(config_from_path(&path), AssemblyConfig::default());
    }

    #[test]
    fn test_config_file_override() {
        let path = std::env::temp_dir().join("maketa_launch_test_config.json");
        std::fs::write(&path, r#"{ "window": 0.3 }"#).unwrap();
        let config = config_from_path(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.window, 0.3);
        assert_eq!(
            config.completion_fraction,
            AssemblyConfig::default().completion_fraction
        );
    }

    #[test]
    fn test_invalid_config_file_keeps_defaults() {
        let path = std::env::temp_dir().join("maketa_launch_bad_config.json");
        std::fs::write(&path, r#"{ "window": -1.0 }"#).unwrap();
        let config = config_from_path(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config, AssemblyConfig::default());
    }
}
