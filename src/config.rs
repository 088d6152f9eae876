use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::emit::{
    DEFAULT_MAIN_HEADER, DEFAULT_NAMESPACE, DEFAULT_OUTPUT_NAME, DEFAULT_SUB_HEADER,
};

pub const CONFIG_FILE_NAME: &str = ".genapirc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output_root")]
    pub output_root: String,
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_main_header")]
    pub main_header: String,
    /// `null` disables the per-file title suffix.
    #[serde(default = "default_sub_header")]
    pub sub_header: Option<String>,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_fresh")]
    pub fresh: bool,
}

fn default_source_root() -> String {
    "./phidl".to_string()
}

fn default_output_root() -> String {
    "./docs/source".to_string()
}

fn default_sources() -> Vec<String> {
    vec!["geometry.py".to_string()]
}

fn default_output() -> String {
    DEFAULT_OUTPUT_NAME.to_string()
}

fn default_main_header() -> String {
    DEFAULT_MAIN_HEADER.to_string()
}

fn default_sub_header() -> Option<String> {
    Some(DEFAULT_SUB_HEADER.to_string())
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_fresh() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_root: default_output_root(),
            sources: default_sources(),
            output: default_output(),
            main_header: default_main_header(),
            sub_header: default_sub_header(),
            namespace: default_namespace(),
            fresh: default_fresh(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `sources` is empty, a source glob is invalid, or
    /// the output name or main header is blank.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            bail!("'sources' must list at least one file");
        }

        // Only entries with wildcards are globs; the rest are plain file names.
        for source in &self.sources {
            if source.contains('*') || source.contains('?') {
                Pattern::new(source)
                    .with_context(|| format!("Invalid glob pattern in 'sources': \"{}\"", source))?;
            }
        }

        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }
        if self.main_header.trim().is_empty() {
            bail!("'mainHeader' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` if using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
