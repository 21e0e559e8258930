use crate::domain::model::Movie;
use crate::domain::ports::MovieStore;
use crate::utils::error::{Result, ShelfError};
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite-backed catalog store. One connection, single-writer; every
/// operation is one statement.
pub struct SqliteStore {
    conn: Connection,
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT UNIQUE NOT NULL,
    year INTEGER NOT NULL,
    rating REAL NOT NULL,
    poster_image_url TEXT NOT NULL
)";

impl SqliteStore {
    /// Opens (or creates) the database file and ensures the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

impl MovieStore for SqliteStore {
    fn list(&self) -> Result<Vec<Movie>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, year, rating, poster_image_url FROM movies ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Movie {
                title: row.get(0)?,
                year: row.get(1)?,
                rating: row.get(2)?,
                poster_url: row.get(3)?,
            })
        })?;

        let mut movies = Vec::new();
        for movie in rows {
            movies.push(movie?);
        }
        Ok(movies)
    }

    fn add(&self, movie: &Movie) -> Result<()> {
        let result = self.conn.execute(
            "INSERT INTO movies (title, year, rating, poster_image_url)
             VALUES (?1, ?2, ?3, ?4)",
            params![movie.title, movie.year, movie.rating, movie.poster_url],
        );

        match result {
            Ok(_) => {
                tracing::debug!("Inserted '{}' ({})", movie.title, movie.year);
                Ok(())
            }
            Err(e) if Self::is_unique_violation(&e) => Err(ShelfError::DuplicateTitle {
                title: movie.title.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, title: &str) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM movies WHERE title = ?1", params![title])?;
        if affected == 0 {
            return Err(ShelfError::MovieNotFound {
                title: title.to_string(),
            });
        }
        tracing::debug!("Deleted '{}'", title);
        Ok(())
    }

    fn update_rating(&self, title: &str, rating: f64) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE movies SET rating = ?1 WHERE title = ?2",
            params![rating, title],
        )?;
        if affected == 0 {
            return Err(ShelfError::MovieNotFound {
                title: title.to_string(),
            });
        }
        tracing::debug!("Updated rating of '{}' to {}", title, rating);
        Ok(())
    }
}
