pub mod check;
pub mod routes;

use anyhow::{Context, Result};
use rhtmx_buildtime::{walk_routes, BuildContext, BuildOptions, Config};

use crate::RoutesSource;

/// Build options from the config file, with `--dir` taking precedence
pub fn build_options(source: &RoutesSource) -> Result<BuildOptions> {
    let config = Config::load(&source.config)
        .with_context(|| format!("Failed to load config: {:?}", source.config))?;

    let mut opts = config.build_options();
    if let Some(dir) = &source.dir {
        opts.routes_dir = dir.clone();
    }
    tracing::debug!("Build options: {:?}", opts);
    Ok(opts)
}

/// Walks the configured routes directory
pub fn load_context(source: &RoutesSource) -> Result<BuildContext> {
    let opts = build_options(source)?;
    let routes_dir = opts.routes_dir.clone();
    walk_routes(opts).with_context(|| format!("Failed to build routes from {:?}", routes_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_dir_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("rhtmx.toml");
        fs::write(&config, "[routing]\nroutes_dir = \"app/routes\"\ntrailing_slash = true\n").unwrap();

        let source = RoutesSource {
            dir: Some(PathBuf::from("other")),
            config: config.clone(),
        };
        let opts = build_options(&source).unwrap();
        assert_eq!(opts.routes_dir, PathBuf::from("other"));
        assert!(opts.trailing_slash);

        let source = RoutesSource { dir: None, config };
        let opts = build_options(&source).unwrap();
        assert_eq!(opts.routes_dir, PathBuf::from("app/routes"));
    }

    #[test]
    fn test_load_context_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let source = RoutesSource {
            dir: Some(temp_dir.path().join("missing")),
            config: temp_dir.path().join("rhtmx.toml"),
        };
        let err = load_context(&source).unwrap_err();
        assert!(err.to_string().starts_with("Failed to build routes"));
    }
}
