// File: src/config.rs
// Purpose: Configuration parsing from rhtmx.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::context::BuildOptions;
use crate::error::BuildError;

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory containing route files (default: "src/routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Base path for all routes (e.g., "/app")
    #[serde(default)]
    pub base_path: Option<String>,

    /// Whether to emit trailing slashes on patterns
    #[serde(default = "default_false")]
    pub trailing_slash: bool,

    #[serde(default = "default_page_extensions")]
    pub page_extensions: Vec<String>,

    #[serde(default = "default_endpoint_extensions")]
    pub endpoint_extensions: Vec<String>,

    #[serde(default = "default_markdown_extensions")]
    pub markdown_extensions: Vec<String>,
}

// Default values
fn default_routes_dir() -> String {
    "src/routes".to_string()
}

fn default_page_extensions() -> Vec<String> {
    vec!["tsx".to_string(), "jsx".to_string()]
}

fn default_endpoint_extensions() -> Vec<String> {
    vec!["ts".to_string(), "js".to_string()]
}

fn default_markdown_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdx".to_string()]
}

fn default_false() -> bool {
    false
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            base_path: None,
            trailing_slash: false,
            page_extensions: default_page_extensions(),
            endpoint_extensions: default_endpoint_extensions(),
            markdown_extensions: default_markdown_extensions(),
        }
    }
}

impl Config {
    /// Load configuration from rhtmx.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| BuildError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content).map_err(|source| BuildError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from default path (./rhtmx.toml)
    pub fn load_default() -> Result<Self, BuildError> {
        Self::load("rhtmx.toml")
    }

    /// Build options for the configured routes directory
    pub fn build_options(&self) -> BuildOptions {
        let routing = &self.routing;
        BuildOptions {
            routes_dir: routing.routes_dir.clone().into(),
            base_path: routing.base_path.clone(),
            trailing_slash: routing.trailing_slash,
            page_extensions: routing.page_extensions.clone(),
            endpoint_extensions: routing.endpoint_extensions.clone(),
            markdown_extensions: routing.markdown_extensions.clone(),
        }
    }
}
