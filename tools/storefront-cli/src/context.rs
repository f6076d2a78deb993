//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::{seed, CatalogProvider, InMemoryCatalog};
use storefront_commerce::SessionId;
use storefront_observability::SessionLogger;

use crate::catalog_file::FileCatalog;
use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    pub config: StorefrontConfig,
    /// File the config was read from, if any.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some(path) => {
                    let config = StorefrontConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (StorefrontConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find the nearest config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the configured catalog.
    pub fn catalog(&self) -> Result<Box<dyn CatalogProvider>> {
        let currency = self.config.catalog.currency;
        match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                self.output
                    .debug(&format!("Using catalog file {}", path.display()));
                let catalog = FileCatalog::open(&path, self.config.catalog.price_unit, currency)?;
                Ok(Box::new(catalog))
            }
            None => {
                self.output.debug("Using the demo catalog");
                let catalog = InMemoryCatalog::from_products(seed::demo_products(), currency)
                    .context("The demo catalog is priced in USD; set catalog.path for other currencies")?;
                Ok(Box::new(catalog))
            }
        }
    }

    /// A logger for a new shopping session.
    pub fn session_logger(&self) -> SessionLogger {
        SessionLogger::new(SessionId::generate())
            .with_format(self.config.log.format)
            .with_min_level(self.config.log.level)
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
