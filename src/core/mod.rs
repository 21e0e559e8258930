pub mod fuzzy;
pub mod report;
pub mod stats;

pub use crate::domain::model::Movie;
pub use crate::domain::ports::{MetadataSource, MovieStore};
pub use crate::utils::error::Result;
