use crate::config::FetchConfig;
use crate::domain::model::{FetchedMovie, POSTER_SENTINEL};
use crate::domain::ports::MetadataSource;
use crate::utils::error::{Result, ShelfError};
use reqwest::blocking::Client;
use serde::Deserialize;

/// Wire shape of an OMDb title lookup. `Response` is "False" for misses,
/// in which case only `Error` is populated.
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

pub struct OmdbClient {
    config: FetchConfig,
    client: Client,
}

impl OmdbClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// OMDb encodes a series' run as "1994–2004"; only the leading digits
    /// form the release year.
    fn parse_year(raw: &str) -> Result<u16> {
        let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().map_err(|_| ShelfError::InvalidInput {
            message: format!("unparseable year '{}' in API response", raw),
        })
    }

    fn parse_rating(raw: Option<&str>, title: &str) -> f64 {
        match raw {
            Some(s) => match s.parse::<f64>() {
                Ok(r) if (0.0..=10.0).contains(&r) => r,
                _ => {
                    tracing::warn!("No usable rating for '{}', storing 0.0", title);
                    0.0
                }
            },
            None => {
                tracing::warn!("No rating field for '{}', storing 0.0", title);
                0.0
            }
        }
    }
}

impl MetadataSource for OmdbClient {
    fn fetch(&self, title: &str) -> Result<FetchedMovie> {
        tracing::debug!("Looking up '{}' at {}", title, self.config.endpoint);
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("apikey", self.config.api_key.as_str()), ("t", title)])
            .send()?
            .error_for_status()?;

        let body: OmdbResponse = response.json()?;

        if !body.response.eq_ignore_ascii_case("true") {
            tracing::debug!(
                "Lookup miss for '{}': {}",
                title,
                body.error.as_deref().unwrap_or("no error detail")
            );
            return Err(ShelfError::LookupNotFound {
                title: title.to_string(),
            });
        }

        let found_title = body.title.ok_or_else(|| ShelfError::LookupNotFound {
            title: title.to_string(),
        })?;
        let year = Self::parse_year(body.year.as_deref().unwrap_or_default())?;
        let rating = Self::parse_rating(body.imdb_rating.as_deref(), &found_title);
        let poster_url = match body.poster {
            Some(url) if !url.is_empty() && url != POSTER_SENTINEL => url,
            _ => POSTER_SENTINEL.to_string(),
        };

        Ok(FetchedMovie {
            title: found_title,
            year,
            rating,
            poster_url,
        })
    }
}
