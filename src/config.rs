use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::core::Dataset;
use crate::error::{DashError, DashResult};
use crate::render::{DEFAULT_TITLE, LOGO_FILE};

pub const DEFAULT_PORT: u16 = 8050;

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    /// The gapminder extract compiled into the crate.
    #[default]
    Bundled,
    File(PathBuf),
}

impl DatasetSource {
    pub fn load(&self) -> DashResult<Dataset> {
        match self {
            Self::Bundled => Dataset::load(),
            Self::File(path) => Dataset::from_csv_path(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub bind_addr: SocketAddr,
    pub assets_dir: PathBuf,
    pub dataset: DatasetSource,
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            assets_dir: PathBuf::from("assets"),
            dataset: DatasetSource::Bundled,
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    #[must_use]
    pub fn with_assets_dir(mut self, assets_dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = assets_dir.into();
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: DatasetSource) -> Self {
        self.dataset = dataset;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn logo_path(&self) -> PathBuf {
        self.assets_dir.join(LOGO_FILE)
    }

    /// Fails when startup assets are missing or the title is blank.
    pub fn validate(&self) -> DashResult<()> {
        if self.title.trim().is_empty() {
            return Err(DashError::InvalidData("title must not be empty".to_owned()));
        }
        let logo = self.logo_path();
        if !logo.is_file() {
            return Err(DashError::MissingAsset {
                path: logo.display().to_string(),
            });
        }
        if let DatasetSource::File(path) = &self.dataset {
            if !path.is_file() {
                return Err(DashError::DataLoad(format!(
                    "dataset file `{}` does not exist",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
