use crate::domain::model::{FetchedMovie, Movie};
use crate::utils::error::Result;

/// Persistent storage for the catalog. Every operation is a single
/// synchronous row read or mutation.
pub trait MovieStore {
    /// All movies in insertion order.
    fn list(&self) -> Result<Vec<Movie>>;

    /// Fails with `DuplicateTitle` when the title is already stored.
    fn add(&self, movie: &Movie) -> Result<()>;

    /// Fails with `MovieNotFound` when no row matches the exact title.
    fn delete(&self, title: &str) -> Result<()>;

    /// Fails with `MovieNotFound` when no row matches the exact title.
    fn update_rating(&self, title: &str, rating: f64) -> Result<()>;
}

/// Remote title lookup. One blocking request per call, no retries; failures
/// surface to the caller for user-facing reporting.
pub trait MetadataSource {
    fn fetch(&self, title: &str) -> Result<FetchedMovie>;
}
