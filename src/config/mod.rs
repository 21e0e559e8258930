use crate::utils::error::{Result, ShelfError};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "movie-shelf")]
#[command(about = "A personal movie catalog with OMDb lookups")]
pub struct AppConfig {
    #[arg(long, default_value = "movies.db")]
    pub db_path: String,

    #[arg(long, default_value = "https://www.omdbapi.com/")]
    pub api_endpoint: String,

    #[arg(long, default_value = "_static")]
    pub output_dir: String,

    #[arg(long, default_value = "movie_rating_histogram.png")]
    pub histogram_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl AppConfig {
    /// The OMDb credential comes from the environment only, never a flag,
    /// so it does not end up in shell history.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ShelfError::MissingConfig {
                field: API_KEY_ENV.to_string(),
            }),
        }
    }

    pub fn fetch_config(&self) -> Result<FetchConfig> {
        Ok(FetchConfig {
            endpoint: self.api_endpoint.clone(),
            api_key: self.api_key()?,
            timeout: Duration::from_secs(10),
        })
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            output_dir: PathBuf::from(&self.output_dir),
            histogram_path: PathBuf::from(&self.histogram_path),
            page_title: "My Movie App".to_string(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("db_path", &self.db_path)?;
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_path("histogram_path", &self.histogram_path)?;
        self.api_key()?;
        Ok(())
    }
}

/// Everything the fetcher needs, passed in at construction time.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

/// Output locations for the reporting component.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub histogram_path: PathBuf,
    pub page_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            db_path: "movies.db".to_string(),
            api_endpoint: "https://www.omdbapi.com/".to_string(),
            output_dir: "_static".to_string(),
            histogram_path: "movie_rating_histogram.png".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn rejects_bad_endpoint() {
        let mut config = base_config();
        config.api_endpoint = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ShelfError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn rejects_empty_db_path() {
        let mut config = base_config();
        config.db_path = String::new();
        assert!(config.validate().is_err());
    }
}
