use crate::domain::model::Movie;
use crate::utils::error::{Result, ShelfError};

/// Summary of the rating distribution. `best` and `worst` carry every
/// movie tied at the maximum/minimum rating.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    pub average: f64,
    pub median: f64,
    pub best: Vec<Movie>,
    pub worst: Vec<Movie>,
}

pub fn rating_stats(movies: &[Movie]) -> Result<RatingStats> {
    if movies.is_empty() {
        return Err(ShelfError::EmptyCollection);
    }

    let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    ratings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;

    let mid = ratings.len() / 2;
    let median = if ratings.len() % 2 != 0 {
        ratings[mid]
    } else {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    };

    let maximum = *ratings.last().unwrap_or(&0.0);
    let minimum = *ratings.first().unwrap_or(&0.0);
    let best = movies
        .iter()
        .filter(|m| m.rating == maximum)
        .cloned()
        .collect();
    let worst = movies
        .iter()
        .filter(|m| m.rating == minimum)
        .cloned()
        .collect();

    Ok(RatingStats {
        average,
        median,
        best,
        worst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, rating: f64) -> Movie {
        Movie {
            title: title.to_string(),
            year: 2000,
            rating,
            poster_url: "N/A".to_string(),
        }
    }

    #[test]
    fn median_odd_count() {
        let movies = vec![movie("a", 1.0), movie("b", 2.0), movie("c", 3.0)];
        let stats = rating_stats(&movies).unwrap();
        assert_eq!(stats.median, 2.0);
        assert_eq!(stats.average, 2.0);
    }

    #[test]
    fn median_even_count() {
        let movies = vec![
            movie("a", 1.0),
            movie("b", 2.0),
            movie("c", 3.0),
            movie("d", 4.0),
        ];
        assert_eq!(rating_stats(&movies).unwrap().median, 2.5);
    }

    #[test]
    fn empty_collection_fails() {
        assert!(matches!(
            rating_stats(&[]),
            Err(ShelfError::EmptyCollection)
        ));
    }

    #[test]
    fn best_and_worst_include_all_ties() {
        let movies = vec![
            movie("a", 9.0),
            movie("b", 9.0),
            movie("c", 5.0),
            movie("d", 2.0),
            movie("e", 2.0),
        ];
        let stats = rating_stats(&movies).unwrap();
        let best: Vec<_> = stats.best.iter().map(|m| m.title.as_str()).collect();
        let worst: Vec<_> = stats.worst.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(best, vec!["a", "b"]);
        assert_eq!(worst, vec!["d", "e"]);
    }

    #[test]
    fn single_movie_is_best_and_worst() {
        let movies = vec![movie("only", 6.5)];
        let stats = rating_stats(&movies).unwrap();
        assert_eq!(stats.median, 6.5);
        assert_eq!(stats.best.len(), 1);
        assert_eq!(stats.worst.len(), 1);
    }
}
