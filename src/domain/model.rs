use serde::{Deserialize, Serialize};

/// Sentinel stored when the metadata service has no poster for a title.
pub const POSTER_SENTINEL: &str = "N/A";

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    pub rating: f64,
    pub poster_url: String,
}

/// A record as returned by the metadata service, before it is inserted.
/// Same fields as [`Movie`], kept separate so the fetcher boundary stays
/// explicit about where external data has been mapped into our types.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedMovie {
    pub title: String,
    pub year: u16,
    pub rating: f64,
    pub poster_url: String,
}

impl From<FetchedMovie> for Movie {
    fn from(fetched: FetchedMovie) -> Self {
        Movie {
            title: fetched.title,
            year: fetched.year,
            rating: fetched.rating,
            poster_url: fetched.poster_url,
        }
    }
}
