// src/repositories/movie_repository.rs
//
// Movie persistence

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::movie::{Genre, Movie, MovieVariant};
use crate::error::{AppError, AppResult};

pub trait MovieRepository: Send + Sync {
    /// Insert a movie and return the store-assigned identity.
    /// The identity carried by `movie` is ignored.
    fn add(&self, movie: &Movie) -> AppResult<i64>;
    fn find_all(&self) -> AppResult<Vec<Movie>>;
    fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>>;
    fn find_by_genre(&self, genre: Genre) -> AppResult<Vec<Movie>>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

const MOVIE_COLUMNS: &str = "id, title, country, director, genre, variant, cover, \
                             premiere, description, rating, age_rating, runtime_minutes";

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Movie - returns rusqlite::Error for query_map compatibility
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        let genre_str: String = row.get("genre")?;
        let genre = Genre::parse(&genre_str).ok_or(rusqlite::Error::InvalidQuery)?;

        let variant_str: String = row.get("variant")?;
        let variant = MovieVariant::parse(&variant_str).ok_or(rusqlite::Error::InvalidQuery)?;

        let premiere_str: String = row.get("premiere")?;
        let premiere: NaiveDate = premiere_str
            .parse()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Movie {
            id: row.get("id")?,
            title: row.get("title")?,
            country: row.get("country")?,
            director: row.get("director")?,
            genre,
            cover: row.get("cover")?,
            premiere,
            description: row.get("description")?,
            rating: row.get("rating")?,
            age_rating: row.get("age_rating")?,
            runtime_minutes: row.get("runtime_minutes")?,
            variant,
        })
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn add(&self, movie: &Movie) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO movies (
                title, country, director, genre, variant, cover,
                premiere, description, rating, age_rating, runtime_minutes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                movie.title,
                movie.country,
                movie.director,
                movie.genre.to_string(),
                movie.variant.to_string(),
                movie.cover,
                movie.premiere.to_string(),
                movie.description,
                movie.rating,
                movie.age_rating,
                movie.runtime_minutes,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn find_all(&self) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM movies ORDER BY title",
            MOVIE_COLUMNS
        ))?;

        let movies: Vec<Movie> = stmt
            .query_map([], Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM movies WHERE title = ?1",
            MOVIE_COLUMNS
        ))?;

        match stmt.query_row(params![title], Self::row_to_movie) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find_by_genre(&self, genre: Genre) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM movies WHERE genre = ?1 ORDER BY title",
            MOVIE_COLUMNS
        ))?;

        let movies: Vec<Movie> = stmt
            .query_map(params![genre.to_string()], Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }
}
