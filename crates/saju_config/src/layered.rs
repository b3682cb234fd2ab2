//! Layered JSON configuration.
//!
//! Layers merge in order: built-in defaults, base file, run file. Objects
//! merge key by key; any other value replaces what was there. Layer files
//! that do not exist are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::engine::EngineConfig;
use crate::error::ConfigError;

pub const ROOT_ENV: &str = "SAJU_CONFIG_ROOT";
pub const BASE_ENV: &str = "SAJU_CONFIG_BASE";
pub const RUN_ENV: &str = "SAJU_CONFIG_RUN";

/// Paths of the file layers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigLayering {
    pub base: Option<PathBuf>,
    pub run: Option<PathBuf>,
}

impl ConfigLayering {
    /// Reads `SAJU_CONFIG_BASE` / `SAJU_CONFIG_RUN`, falling back to
    /// `base.json` / `run.json` under `SAJU_CONFIG_ROOT` (default
    /// `~/.saju`). Paths that do not exist are dropped.
    pub fn discover() -> Self {
        let root = std::env::var_os(ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_root);
        let base = std::env::var_os(BASE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("base.json"));
        let run = std::env::var_os(RUN_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("run.json"));
        ConfigLayering {
            base: existing_path(base),
            run: existing_path(run),
        }
    }

    /// `base.json` and `run.json` under `root`, when present.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        ConfigLayering {
            base: existing_path(root.join("base.json")),
            run: existing_path(root.join("run.json")),
        }
    }

    pub fn with_base<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.base = Some(path.into());
        self
    }

    pub fn with_run<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.run = Some(path.into());
        self
    }
}

fn existing_path(path: PathBuf) -> Option<PathBuf> {
    if path.exists() { Some(path) } else { None }
}

fn default_root() -> PathBuf {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".saju"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Merged layers as a JSON tree.
#[derive(Clone, Debug)]
pub struct LayeredConfig {
    layering: ConfigLayering,
    value: Value,
}

impl LayeredConfig {
    /// Merges defaults → base → run.
    pub fn load(layering: ConfigLayering) -> Result<Self, ConfigError> {
        let mut value =
            serde_json::to_value(EngineConfig::default()).map_err(ConfigError::Invalid)?;
        for (name, path) in [("base", &layering.base), ("run", &layering.run)] {
            let Some(path) = path else { continue };
            match load_json(path)? {
                Some(layer) => {
                    debug!(layer = name, path = %path.display(), "config layer merged");
                    merge(&mut value, &layer);
                }
                None => debug!(layer = name, path = %path.display(), "config layer missing"),
            }
        }
        Ok(LayeredConfig { layering, value })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn layering(&self) -> &ConfigLayering {
        &self.layering
    }

    /// Typed view of the section at `path`; `None` when any key is absent.
    pub fn section<T: DeserializeOwned>(&self, path: &[&str]) -> Result<Option<T>, ConfigError> {
        let mut node = &self.value;
        for key in path {
            match node.get(*key) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        serde_json::from_value(node.clone())
            .map(Some)
            .map_err(ConfigError::Invalid)
    }

    /// The whole tree as a validated [`EngineConfig`].
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig =
            serde_json::from_value(self.value.clone()).map_err(ConfigError::Invalid)?;
        config.validate()?;
        Ok(config)
    }
}

/// Loads and validates the engine configuration for `layering`.
pub fn load_config(layering: ConfigLayering) -> Result<EngineConfig, ConfigError> {
    let config = LayeredConfig::load(layering)?.engine_config()?;
    info!(
        aspect_set = ?config.aspect_set,
        query_type = %config.query_type,
        reference_year = ?config.reference_year,
        "configuration loaded"
    );
    Ok(config)
}

fn load_json(path: &Path) -> Result<Option<Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn merge(dest: &mut Value, src: &Value) {
    match (dest, src) {
        (Value::Object(dest_map), Value::Object(src_map)) => {
            for (key, value) in src_map {
                match dest_map.get_mut(key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        dest_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_base::AspectSet;
    use saju_synthesis::QueryType;
    use saju_time::GeoLocation;
    use serde_json::json;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("saju_config_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn merge_is_deep() {
        let mut a = json!({"location": {"latitude_deg": 1.0, "longitude_deg": 2.0}, "x": 1});
        merge(&mut a, &json!({"location": {"longitude_deg": 3.0}, "x": [1, 2]}));
        assert_eq!(
            a,
            json!({"location": {"latitude_deg": 1.0, "longitude_deg": 3.0}, "x": [1, 2]})
        );
    }

    #[test]
    fn no_layers_gives_defaults() {
        let c = load_config(ConfigLayering::default()).unwrap();
        assert_eq!(c, EngineConfig::default());
    }

    #[test]
    fn run_overrides_base() {
        let root = temp_dir("layers");
        fs::write(
            root.join("base.json"),
            r#"{"aspect_set": "all", "reference_year": 2020,
                "location": {"latitude_deg": 35.1796, "longitude_deg": 129.0756}}"#,
        )
        .unwrap();
        fs::write(root.join("run.json"), r#"{"reference_year": 2026, "query_type": "timing"}"#)
            .unwrap();

        let layering = ConfigLayering::from_root(&root);
        assert!(layering.base.is_some() && layering.run.is_some());
        let c = load_config(layering).unwrap();
        assert_eq!(c.aspect_set, AspectSet::All);
        assert_eq!(c.reference_year, Some(2026));
        assert_eq!(c.query_type, QueryType::Timing);
        assert_eq!(c.location, GeoLocation::new(35.1796, 129.0756));
        assert_eq!(c.log_filter, "info");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_files_are_skipped() {
        let root = temp_dir("missing");
        let layering = ConfigLayering::from_root(&root);
        assert_eq!(layering, ConfigLayering::default());

        let stacked = LayeredConfig::load(
            ConfigLayering::default().with_run(root.join("does-not-exist.json")),
        )
        .unwrap();
        assert_eq!(stacked.engine_config().unwrap(), EngineConfig::default());
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn section_lookup() {
        let stacked = LayeredConfig::load(ConfigLayering::default()).unwrap();
        let lat: Option<f64> = stacked.section(&["location", "latitude_deg"]).unwrap();
        assert_eq!(lat, Some(37.5665));
        let none: Option<f64> = stacked.section(&["location", "altitude"]).unwrap();
        assert_eq!(none, None);
    }

    #[test]
    fn reports_bad_files() {
        let root = temp_dir("bad");
        let path = root.join("run.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_config(ConfigLayering::default().with_run(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));

        fs::write(&path, r#"{"aspect_set": "minor"}"#).unwrap();
        let err = load_config(ConfigLayering::default().with_run(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        fs::write(&path, r#"{"location": {"latitude_deg": 91.0, "longitude_deg": 0.0}}"#)
            .unwrap();
        let err = load_config(ConfigLayering::default().with_run(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Time(_)));
        let _ = fs::remove_dir_all(root);
    }
}
