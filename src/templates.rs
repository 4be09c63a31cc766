use crate::config::{read_project_config, write_project_config, Configuration, SearchPath};
use crate::errors::GrabError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Template choice that clears extensions and excludes instead of applying a
/// preset.
pub const NO_TEMPLATE: &str = "none";

pub struct Template {
    pub extensions: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

/// Built-in presets for common project types. Read-only; not extensible at
/// runtime.
pub static TEMPLATES: Lazy<HashMap<&'static str, Template>> = Lazy::new(|| {
    HashMap::from([
        (
            "react",
            Template {
                extensions: &["*.ts", "*.tsx", "*.js", "*.jsx", "*.css"],
                exclude: &["node_modules", "dist", "build", ".git"],
            },
        ),
        (
            "react router",
            Template {
                extensions: &["*.ts", "*.tsx", "*.js", "*.jsx", "*.css"],
                exclude: &["node_modules", "dist", "build", ".react-router", ".git"],
            },
        ),
        (
            "nextjs",
            Template {
                extensions: &["*.ts", "*.tsx", "*.js", "*.jsx", "*.css"],
                exclude: &["node_modules", ".next", "out", "dist", ".git"],
            },
        ),
        (
            "asp core",
            Template {
                extensions: &["*.cs", "*.cshtml", "*.razor", "*.json"],
                exclude: &["bin", "obj", "node_modules", ".git"],
            },
        ),
    ])
});

pub fn template_names() -> Vec<&'static str> {
    let mut names: Vec<_> = TEMPLATES.keys().copied().collect();
    names.sort_unstable();
    names
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Writes a fresh project config file, overwriting any existing one.
pub async fn init_config(root: &Path, template_choice: Option<&str>) -> Result<(), GrabError> {
    let config = match template_choice {
        Some(name) if name != NO_TEMPLATE => {
            let template = TEMPLATES
                .get(name)
                .ok_or_else(|| GrabError::ConfigError(format!("Unknown template '{}'", name)))?;
            Configuration {
                extensions: to_owned_vec(template.extensions),
                search_path: SearchPath::default(),
                exclude: to_owned_vec(template.exclude),
                template: Some(name.to_owned()),
            }
        }
        _ => Configuration::default(),
    };

    write_project_config(root, &config).await?;
    info!(
        "Initialized {} in {}",
        crate::config::PROJECT_CONFIG_FILE,
        root.display()
    );
    Ok(())
}

/// Rewrites the template of an existing project config. A known template
/// replaces `extensions` and unions its excludes; [`NO_TEMPLATE`] clears
/// both. Errors if no valid project config exists yet.
pub async fn set_template(root: &Path, template_choice: &str) -> Result<(), GrabError> {
    let mut config = read_project_config(root).await?;

    if template_choice == NO_TEMPLATE {
        config.template = None;
        config.extensions.clear();
        config.exclude.clear();
    } else {
        let template = TEMPLATES.get(template_choice).ok_or_else(|| {
            GrabError::ConfigError(format!("Unknown template '{}'", template_choice))
        })?;
        config.template = Some(template_choice.to_owned());
        config.extensions = to_owned_vec(template.extensions);
        for rule in template.exclude {
            let rule = (*rule).to_owned();
            if !config.exclude.contains(&rule) {
                config.exclude.push(rule);
            }
        }
    }

    write_project_config(root, &config).await?;
    info!("Set template to '{}'", template_choice);
    Ok(())
}
