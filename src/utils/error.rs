use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Movie '{title}' already exists")]
    DuplicateTitle { title: String },

    #[error("Movie '{title}' not found")]
    MovieNotFound { title: String },

    #[error("No result for '{title}' from the metadata service")]
    LookupNotFound { title: String },

    #[error("API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("The movie collection is empty")]
    EmptyCollection,

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Rendering failed: {message}")]
    Render { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ShelfError>;
