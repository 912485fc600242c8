pub mod atlas;
pub mod filter;
pub mod indices;
pub mod interaction;
pub mod resolver;

pub use crate::domain::model::{Dataset, FilterSelection, VisibilitySets};
pub use crate::domain::ports::{ConfigProvider, MapSurface, Storage};
pub use crate::utils::error::Result;
