//! Demo service - manage demo mode
//!
//! Demo mode seeds every new context with sample portfolios so the listing
//! can be explored without submitting forms. Nothing is stored on disk
//! besides the flag itself.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::adapters::demo::generate_demo_portfolios;
use crate::config::Config;
use crate::domain::result::Result as CoreResult;
use crate::services::PortfolioService;

pub struct DemoService {
    app_dir: PathBuf,
}

impl DemoService {
    pub fn new(app_dir: &Path) -> Self {
        Self {
            app_dir: app_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.app_dir)?;
        Ok(config.demo_mode)
    }

    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.app_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.app_dir)
    }

    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.app_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.app_dir)
    }

    /// Insert the sample portfolios; returns how many were added
    pub fn seed(portfolios: &PortfolioService) -> CoreResult<usize> {
        let records = generate_demo_portfolios();
        let count = records.len();
        for record in records {
            portfolios.insert(record)?;
        }
        Ok(count)
    }
}
