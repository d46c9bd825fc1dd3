//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::CatalogSource;
use storefront_source::{FileCatalogSource, HttpCatalogSource};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(Path::new(path))?, Some(PathBuf::from(path))),
            None => match find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build the catalog source the config points at.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        let source = &self.config.source;
        match &source.file {
            Some(file) => Box::new(FileCatalogSource::new(self.resolve_path(file))),
            None => Box::new(HttpCatalogSource::new(&source.url).with_timeout(source.timeout())),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in `start` or any of its parents.
///
/// The nearest file wins; if it fails to parse, that is an error rather
/// than a reason to keep looking.
fn find_config(start: &Path) -> Result<Option<(PathBuf, CliConfig)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let config = CliConfig::load(&config_path)?;
                return Ok(Some((config_path, config)));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("storefront-ctx-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("storefront.toml"), "[source]\nfile = \"products.json\"\n").unwrap();

        let found = find_config(&nested);
        let _ = std::fs::remove_dir_all(&root);

        let (path, config) = found.unwrap().unwrap();
        assert!(path.ends_with("storefront.toml"));
        assert_eq!(config.source.file.as_deref(), Some("products.json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_config_in_non_utf8_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut name = b"storefront-\xff-".to_vec();
        name.extend_from_slice(std::process::id().to_string().as_bytes());
        let root = std::env::temp_dir().join(OsStr::from_bytes(&name));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("storefront.toml"), "[source]\ntimeout_secs = 3\n").unwrap();

        let found = find_config(&root);
        let _ = std::fs::remove_dir_all(&root);

        let (path, config) = found.unwrap().unwrap();
        assert_eq!(path, root.join("storefront.toml"));
        assert_eq!(config.source.timeout_secs, 3);
    }

    #[test]
    fn test_catalog_source_prefers_file() {
        let mut config = CliConfig::default();
        config.source.file = Some("fixtures/products.json".to_string());
        let ctx = Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("/srv/shop"),
        };
        assert_eq!(ctx.catalog_source().describe(), "file /srv/shop/fixtures/products.json");
    }

    #[test]
    fn test_catalog_source_defaults_to_http() {
        let ctx = Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("/"),
        };
        assert_eq!(ctx.catalog_source().describe(), storefront_source::DEFAULT_CATALOG_URL);
    }
}
