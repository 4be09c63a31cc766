use crate::config::{load_config, Configuration, SearchPath};
use crate::errors::GrabError;
use crate::formatter::aggregate;
use crate::prompt::prompt_for_list;
use crate::reporting::print_stats;
use crate::walker::collect_files;
use arboard::Clipboard;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct CopierConfig {
    pub root: PathBuf,
    pub no_stats: bool,
}

#[async_trait]
pub trait FileContentCopier {
    async fn copy_files_content(&self) -> Result<(), GrabError>;
}

pub struct BasicFileCopier {
    config: CopierConfig,
}

impl BasicFileCopier {
    pub fn new(config: CopierConfig) -> Self {
        BasicFileCopier { config }
    }
}

#[async_trait]
impl FileContentCopier for BasicFileCopier {
    async fn copy_files_content(&self) -> Result<(), GrabError> {
        let root = &self.config.root;
        debug!("Loading configuration for {}", root.display());
        let config = load_config(root).await;
        let config = fill_missing_fields(config).await?;

        let entries = collect_files(
            root,
            &config.extensions,
            &config.search_path,
            &config.exclude,
        )
        .await;

        let content = aggregate(&entries);
        if content.trim().is_empty() {
            info!("No content found for the configured patterns.");
            return Ok(());
        }

        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|e| GrabError::ClipboardInitError(e.to_string()))?;
        clipboard
            .set_text(content)
            .map_err(|e| GrabError::ClipboardWriteError(e.to_string()))?;

        if !self.config.no_stats {
            print_stats(&entries);
        }

        info!("File contents copied to clipboard.");
        Ok(())
    }
}

/// Prompts for any list the config left empty. Patterns and search folders
/// are required; excludes stay empty if the user submits nothing.
async fn fill_missing_fields(mut config: Configuration) -> Result<Configuration, GrabError> {
    if config.extensions.is_empty() {
        if let Some(items) = prompt_for_list("Enter file patterns (e.g., *.ts, *.js)").await? {
            config.extensions = items;
        }
    }
    if config.extensions.is_empty() {
        return Err(GrabError::MissingInput("no file patterns given".to_owned()));
    }

    if config.search_path.is_empty() {
        match prompt_for_list("Enter folders to include (e.g., src, lib)").await? {
            Some(items) if !items.is_empty() => config.search_path = SearchPath::Many(items),
            _ => {
                return Err(GrabError::MissingInput(
                    "no search folders given".to_owned(),
                ))
            }
        }
    }

    if config.exclude.is_empty() {
        if let Some(items) =
            prompt_for_list("Enter folders/files to exclude (e.g., node_modules, dist)").await?
        {
            config.exclude = items;
        }
    }

    Ok(config)
}

pub async fn copy_files_content(config: CopierConfig) -> Result<(), GrabError> {
    let copier = BasicFileCopier::new(config);
    copier.copy_files_content().await
}
