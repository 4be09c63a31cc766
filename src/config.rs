use crate::errors::GrabError;
use crate::templates::TEMPLATES;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

pub const PROJECT_CONFIG_FILE: &str = "text-grab.config.json";
pub const GLOBAL_CONFIG_FILE: &str = ".text-grab.config.json";

const REQUIRED_KEYS: [&str; 4] = ["extensions", "searchPath", "exclude", "template"];

/// Where traversal starts: a single directory or a list of them, relative to
/// the project root unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchPath {
    Single(String),
    Many(Vec<String>),
}

impl SearchPath {
    pub fn roots(&self) -> Vec<String> {
        match self {
            SearchPath::Single(path) => vec![path.clone()],
            SearchPath::Many(paths) => paths.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SearchPath::Single(path) => path.is_empty(),
            SearchPath::Many(paths) => paths.is_empty(),
        }
    }
}

impl Default for SearchPath {
    fn default() -> Self {
        SearchPath::Single(".".to_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub search_path: SearchPath,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub template: Option<String>,
}

pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(GLOBAL_CONFIG_FILE))
}

/// Loads the layered configuration for a project root. Never fails: every
/// problem along the way is downgraded to a warning and the load continues
/// with whatever was valid so far.
pub async fn load_config(root: &Path) -> Configuration {
    load_config_with_global(root, global_config_path().as_deref()).await
}

/// [`load_config`] with an explicit global config location, for callers that
/// do not want the per-user file in the home directory.
pub async fn load_config_with_global(root: &Path, global_path: Option<&Path>) -> Configuration {
    let mut merged = Map::new();

    if let Some(global_path) = global_path {
        if fs::try_exists(global_path).await.unwrap_or(false) {
            match read_json_object(global_path).await {
                Ok(map) => shallow_merge(&mut merged, map),
                Err(e) => warn!(
                    "Ignoring unreadable global config {}: {}",
                    global_path.display(),
                    e
                ),
            }
        }
    }

    let project_path = root.join(PROJECT_CONFIG_FILE);
    if fs::try_exists(&project_path).await.unwrap_or(false) {
        match read_json_object(&project_path).await {
            Ok(map) if has_required_keys(&map) => shallow_merge(&mut merged, map),
            Ok(_) | Err(_) => discard_invalid_project_config(&project_path).await,
        }
    }

    let mut config = configuration_from_map(merged);
    apply_template_overlay(&mut config);
    debug!("Loaded configuration: {:?}", config);
    config
}

/// Field-by-field lenient deserialization: a field with an unusable value is
/// warned about and left at its default instead of poisoning the whole load.
fn configuration_from_map(map: Map<String, Value>) -> Configuration {
    let mut config = Configuration::default();
    for (key, value) in map {
        let outcome = match key.as_str() {
            "extensions" => serde_json::from_value(value).map(|v| config.extensions = v),
            "searchPath" => serde_json::from_value(value).map(|v| config.search_path = v),
            "exclude" => serde_json::from_value(value).map(|v| config.exclude = v),
            "template" => serde_json::from_value(value).map(|v| config.template = v),
            _ => Ok(()),
        };
        if let Err(e) = outcome {
            warn!("Ignoring config field '{}': {}", key, e);
        }
    }
    config
}

fn shallow_merge(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        target.insert(key, value);
    }
}

async fn read_json_object(path: &Path) -> Result<Map<String, Value>, GrabError> {
    let raw = fs::read_to_string(path).await?;
    let value: Value =
        serde_json::from_str(&raw).map_err(|e| GrabError::ConfigError(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(GrabError::ConfigError("expected a JSON object".to_owned())),
    }
}

pub fn has_required_keys(map: &Map<String, Value>) -> bool {
    REQUIRED_KEYS.iter().all(|key| map.contains_key(*key))
}

/// Recovery policy for a malformed project config: the file is deleted and
/// the user is told to re-initialize.
pub async fn discard_invalid_project_config(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => warn!(
            "Removed invalid project config {}; run `textgrab init` to recreate it",
            path.display()
        ),
        Err(e) => warn!(
            "Failed to remove invalid project config {}: {}",
            path.display(),
            e
        ),
    }
}

/// Overlays a named template: its extensions replace the configured ones, its
/// excludes are unioned in without duplicates.
pub fn apply_template_overlay(config: &mut Configuration) {
    let Some(name) = config.template.clone() else {
        return;
    };
    match TEMPLATES.get(name.as_str()) {
        Some(template) => {
            config.extensions = template.extensions.iter().map(|s| (*s).to_owned()).collect();
            for rule in template.exclude {
                let rule = (*rule).to_owned();
                if !config.exclude.contains(&rule) {
                    config.exclude.push(rule);
                }
            }
        }
        None => warn!("Unknown template '{}' in configuration, ignoring", name),
    }
}

pub async fn write_project_config(root: &Path, config: &Configuration) -> Result<(), GrabError> {
    let path = root.join(PROJECT_CONFIG_FILE);
    let contents =
        serde_json::to_string_pretty(config).map_err(|e| GrabError::ConfigError(e.to_string()))?;
    fs::write(&path, contents).await?;
    Ok(())
}

/// Reads the project config, requiring it to exist and carry all recognized
/// keys. Used by the mutation commands, which must not silently repair.
pub async fn read_project_config(root: &Path) -> Result<Configuration, GrabError> {
    let path = root.join(PROJECT_CONFIG_FILE);
    if !fs::try_exists(&path).await.unwrap_or(false) {
        return Err(GrabError::NoProjectConfig(format!(
            "{} does not exist; run `textgrab init` first",
            path.display()
        )));
    }
    let map = read_json_object(&path).await?;
    if !has_required_keys(&map) {
        return Err(GrabError::ConfigError(format!(
            "{} is missing required keys; run `textgrab init` to recreate it",
            PROJECT_CONFIG_FILE
        )));
    }
    serde_json::from_value(Value::Object(map)).map_err(|e| GrabError::ConfigError(e.to_string()))
}
