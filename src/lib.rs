pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{omdb::OmdbClient, sqlite::SqliteStore};
pub use app::shell::Shell;
pub use config::{AppConfig, FetchConfig, ReportConfig};
pub use domain::model::Movie;
pub use domain::ports::{MetadataSource, MovieStore};
pub use utils::error::{Result, ShelfError};
