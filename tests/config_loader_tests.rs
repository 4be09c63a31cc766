use serde_json::json;
use std::path::Path;
use tempfile::tempdir;
use textgrab::config::{
    load_config_with_global, Configuration, SearchPath, PROJECT_CONFIG_FILE,
};
use tokio::fs;
use tracing_test::traced_test;

async fn write_project_file(root: &Path, value: &serde_json::Value) {
    fs::write(
        root.join(PROJECT_CONFIG_FILE),
        serde_json::to_string_pretty(value).unwrap(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_defaults_when_no_config_files_exist() {
    let dir = tempdir().unwrap();

    let config = load_config_with_global(dir.path(), None).await;

    assert_eq!(config, Configuration::default());
    assert_eq!(config.search_path, SearchPath::Single(".".to_owned()));
    assert!(config.extensions.is_empty());
    assert!(config.exclude.is_empty());
}

#[tokio::test]
async fn test_project_config_overrides_global() {
    let dir = tempdir().unwrap();
    let global_path = dir.path().join("global.json");
    fs::write(
        &global_path,
        json!({"extensions": ["*.py"], "exclude": ["a"]}).to_string(),
    )
    .await
    .unwrap();
    write_project_file(
        dir.path(),
        &json!({
            "extensions": ["*.ts"],
            "searchPath": ".",
            "exclude": ["b"],
            "template": null
        }),
    )
    .await;

    let config = load_config_with_global(dir.path(), Some(&global_path)).await;

    assert_eq!(config.extensions, vec!["*.ts".to_owned()]);
    assert_eq!(config.exclude, vec!["b".to_owned()]);
}

#[tokio::test]
async fn test_global_config_applies_when_project_absent() {
    let dir = tempdir().unwrap();
    let global_path = dir.path().join("global.json");
    fs::write(
        &global_path,
        json!({"extensions": ["*.py"], "searchPath": ["src", "lib"]}).to_string(),
    )
    .await
    .unwrap();

    let config = load_config_with_global(dir.path(), Some(&global_path)).await;

    assert_eq!(config.extensions, vec!["*.py".to_owned()]);
    assert_eq!(
        config.search_path,
        SearchPath::Many(vec!["src".to_owned(), "lib".to_owned()])
    );
}

#[tokio::test]
#[traced_test]
async fn test_malformed_global_config_is_ignored_with_warning() {
    let dir = tempdir().unwrap();
    let global_path = dir.path().join("global.json");
    fs::write(&global_path, "{ not json").await.unwrap();
    write_project_file(
        dir.path(),
        &json!({
            "extensions": ["*.rs"],
            "searchPath": ".",
            "exclude": [],
            "template": null
        }),
    )
    .await;

    let config = load_config_with_global(dir.path(), Some(&global_path)).await;

    assert_eq!(config.extensions, vec!["*.rs".to_owned()]);
    assert!(logs_contain("Ignoring unreadable global config"));
}

#[tokio::test]
#[traced_test]
async fn test_truncated_project_config_is_deleted() {
    let dir = tempdir().unwrap();
    let project_path = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&project_path, "{\"extensions\": [\"*.ts\"").await.unwrap();

    let config = load_config_with_global(dir.path(), None).await;

    assert!(!project_path.exists());
    assert_eq!(config, Configuration::default());
    assert!(logs_contain("Removed invalid project config"));
}

#[tokio::test]
async fn test_project_config_missing_required_key_is_deleted() {
    let dir = tempdir().unwrap();
    let project_path = dir.path().join(PROJECT_CONFIG_FILE);
    // No "template" key.
    fs::write(
        &project_path,
        json!({"extensions": ["*.ts"], "searchPath": ".", "exclude": []}).to_string(),
    )
    .await
    .unwrap();

    let config = load_config_with_global(dir.path(), None).await;

    assert!(!project_path.exists());
    assert_eq!(config, Configuration::default());
}

#[tokio::test]
async fn test_template_overlay_replaces_extensions_and_unions_exclude() {
    let dir = tempdir().unwrap();
    write_project_file(
        dir.path(),
        &json!({
            "extensions": ["*.custom"],
            "searchPath": ".",
            "exclude": ["coverage"],
            "template": "react"
        }),
    )
    .await;

    let config = load_config_with_global(dir.path(), None).await;

    assert_eq!(
        config.extensions,
        vec!["*.ts", "*.tsx", "*.js", "*.jsx", "*.css"]
    );
    // Project excludes are kept, template excludes are unioned in once.
    assert!(config.exclude.contains(&"coverage".to_owned()));
    assert!(config.exclude.contains(&"node_modules".to_owned()));
    let node_modules_count = config
        .exclude
        .iter()
        .filter(|rule| *rule == "node_modules")
        .count();
    assert_eq!(node_modules_count, 1);
}

#[tokio::test]
async fn test_template_exclude_union_does_not_duplicate() {
    let dir = tempdir().unwrap();
    write_project_file(
        dir.path(),
        &json!({
            "extensions": [],
            "searchPath": ".",
            "exclude": ["node_modules"],
            "template": "react"
        }),
    )
    .await;

    let config = load_config_with_global(dir.path(), None).await;

    let node_modules_count = config
        .exclude
        .iter()
        .filter(|rule| *rule == "node_modules")
        .count();
    assert_eq!(node_modules_count, 1);
}

#[tokio::test]
#[traced_test]
async fn test_unknown_template_name_is_ignored() {
    let dir = tempdir().unwrap();
    write_project_file(
        dir.path(),
        &json!({
            "extensions": ["*.ts"],
            "searchPath": ".",
            "exclude": [],
            "template": "does-not-exist"
        }),
    )
    .await;

    let config = load_config_with_global(dir.path(), None).await;

    assert_eq!(config.extensions, vec!["*.ts".to_owned()]);
    assert!(logs_contain("Unknown template"));
}
