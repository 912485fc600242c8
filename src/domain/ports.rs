use crate::domain::render::{SurfaceUpdate, ZoneStyle};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Byte source for the data files, addressed by file name.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    fn location(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Local(PathBuf),
    Http(String),
}

/// File names of the four data sets, relative to the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub roles: String,
    pub roles_full: String,
    pub skills: String,
    pub features: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            roles: "roles.json".to_string(),
            roles_full: "roles_full.json".to_string(),
            skills: "skills.json".to_string(),
            features: "career-world.geojson".to_string(),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn data_source(&self) -> Result<DataSource>;
    fn data_files(&self) -> &DataFiles;
}

/// The rendering collaborator. Lives for the whole session once mounted.
pub trait MapSurface {
    /// Install the always-on zone layers.
    fn mount(&mut self, zones: &[ZoneStyle]) -> Result<()>;

    fn apply(&mut self, update: &SurfaceUpdate) -> Result<()>;

    /// Release any handles held by the surface. Called exactly once.
    fn release(&mut self);
}
