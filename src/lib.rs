pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::loader::DatasetLoader;
pub use crate::adapters::storage::{HttpStorage, LocalStorage};
pub use crate::adapters::surface::{ConsoleSurface, OutputFormat, SurfaceSlot};
pub use crate::config::AtlasConfig;
pub use crate::core::{atlas::AtlasEngine, filter::FilterEngine, indices::Indices, resolver::RoleResolver};
pub use crate::utils::error::{AtlasError, Result};
