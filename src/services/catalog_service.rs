// src/services/catalog_service.rs
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::db::{
    create_connection_pool, create_connection_pool_at, get_connection, initialize_database,
};
use crate::domain::movie::{check_form, Genre, Movie, MovieForm};
use crate::error::{AppError, AppResult};
use crate::repositories::{MovieRepository, SqliteMovieRepository};

/// Orchestrates the catalog operations the presentation layer calls:
/// validate a submitted form, construct the movie record, persist it,
/// and serve list/filter/lookup requests.
pub struct CatalogService {
    movie_repo: Arc<dyn MovieRepository>,
}

impl CatalogService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    /// Validate the form, build the correct variant, and persist it.
    ///
    /// On a validation or malformed-number failure the warning is logged
    /// and nothing reaches the store. On a storage failure the error
    /// propagates typed; no partial record is retrievable afterwards.
    pub fn add_movie(&self, form: MovieForm) -> AppResult<Movie> {
        let validated = match check_form(&form) {
            Ok(validated) => validated,
            Err(e) => {
                warn!("{}", e.message());
                return Err(AppError::Form(e));
            }
        };

        let mut movie = Movie::new(validated);
        movie.id = match self.movie_repo.add(&movie) {
            Ok(id) => id,
            Err(e) => {
                warn!("Cant add movie: {}", e);
                return Err(e);
            }
        };

        info!("Added movie '{}' with id {}", movie.title, movie.id);
        Ok(movie)
    }

    pub fn list_movies(&self) -> AppResult<Vec<Movie>> {
        info!("Getting list of movies");
        self.movie_repo.find_all()
    }

    pub fn list_by_genre(&self, genre: Genre) -> AppResult<Vec<Movie>> {
        self.movie_repo.find_by_genre(genre)
    }

    pub fn get_movie_by_title(&self, title: &str) -> AppResult<Movie> {
        self.movie_repo
            .find_by_title(title)?
            .ok_or(AppError::NotFound)
    }
}

/// Entry point a presentation layer embeds: opens the database, applies
/// the schema, and wires the repository into a ready `CatalogService`.
pub struct Catalog {
    pub movies: CatalogService,
}

impl Catalog {
    /// Open the catalog at the default per-user data directory.
    pub fn open() -> AppResult<Catalog> {
        let pool = create_connection_pool()?;
        Self::from_pool(pool)
    }

    /// Open the catalog backed by a specific database file.
    pub fn open_at(db_path: &Path) -> AppResult<Catalog> {
        let pool = create_connection_pool_at(db_path)?;
        Self::from_pool(pool)
    }

    fn from_pool(pool: crate::db::ConnectionPool) -> AppResult<Catalog> {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;

        let movie_repo = Arc::new(SqliteMovieRepository::new(Arc::new(pool)));
        Ok(Catalog {
            movies: CatalogService::new(movie_repo),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormError;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open_test_catalog() -> (TempDir, Catalog) {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::open_at(&dir.path().join("catalog.db")).unwrap();
        (dir, catalog)
    }

    fn complete_form(title: &str, runtime: &str) -> MovieForm {
        MovieForm {
            title: title.to_string(),
            country: "Japan".to_string(),
            director: "Akira Kurosawa".to_string(),
            premiere: NaiveDate::from_ymd_opt(1954, 4, 26),
            description: "A village hires seven masterless samurai.".to_string(),
            rating: "8,6".to_string(),
            age_rating: "15".to_string(),
            runtime: runtime.to_string(),
            genre: Some(Genre::Action),
            cover: None,
        }
    }

    #[test]
    fn test_open_at_initializes_and_reopens() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("catalog.db");

        let catalog = Catalog::open_at(&db_path).unwrap();
        catalog
            .movies
            .add_movie(complete_form("Seven Samurai", "207"))
            .unwrap();
        drop(catalog);

        // Reopening the same file finds the schema already applied
        let reopened = Catalog::open_at(&db_path).unwrap();
        let listed = reopened.movies.list_movies().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Seven Samurai");
    }

    #[test]
    fn test_add_movie_persists_and_assigns_id() {
        let (_dir, catalog) = open_test_catalog();

        let movie = catalog
            .movies
            .add_movie(complete_form("Seven Samurai", "207"))
            .unwrap();

        assert!(movie.id > 0);
        assert_eq!(movie.rating, 8.6);

        let listed = catalog.movies.list_movies().unwrap();
        assert_eq!(listed, vec![movie]);
    }

    #[test]
    fn test_invalid_form_never_reaches_store() {
        let (_dir, catalog) = open_test_catalog();

        let err = catalog
            .movies
            .add_movie(complete_form("", "207"))
            .unwrap_err();
        assert!(matches!(err, AppError::Form(FormError::Invalid("Wrong title"))));

        assert!(catalog.movies.list_movies().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_number_never_reaches_store() {
        let (_dir, catalog) = open_test_catalog();

        let mut form = complete_form("Seven Samurai", "207");
        form.age_rating = "fifteen".to_string();

        let err = catalog.movies.add_movie(form).unwrap_err();
        assert!(matches!(
            err,
            AppError::Form(FormError::MalformedNumber { field: "age rating" })
        ));

        assert!(catalog.movies.list_movies().unwrap().is_empty());
    }

    #[test]
    fn test_get_movie_by_title() {
        let (_dir, catalog) = open_test_catalog();

        catalog
            .movies
            .add_movie(complete_form("Seven Samurai", "207"))
            .unwrap();

        let movie = catalog.movies.get_movie_by_title("Seven Samurai").unwrap();
        assert_eq!(movie.title, "Seven Samurai");

        let err = catalog
            .movies
            .get_movie_by_title("Never Inserted")
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_list_by_genre() {
        let (_dir, catalog) = open_test_catalog();

        catalog
            .movies
            .add_movie(complete_form("Seven Samurai", "207"))
            .unwrap();
        let mut western = complete_form("The Magnificent Seven", "128");
        western.genre = Some(Genre::Western);
        catalog.movies.add_movie(western).unwrap();

        let westerns = catalog.movies.list_by_genre(Genre::Western).unwrap();
        assert_eq!(westerns.len(), 1);
        assert_eq!(westerns[0].title, "The Magnificent Seven");

        assert!(catalog
            .movies
            .list_by_genre(Genre::Horror)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_storage_failure_leaves_no_partial_record() {
        struct FailingAdd {
            inner: Arc<dyn MovieRepository>,
        }

        impl MovieRepository for FailingAdd {
            fn add(&self, _movie: &Movie) -> AppResult<i64> {
                Err(AppError::Pool("connection refused".to_string()))
            }
            fn find_all(&self) -> AppResult<Vec<Movie>> {
                self.inner.find_all()
            }
            fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
                self.inner.find_by_title(title)
            }
            fn find_by_genre(&self, genre: Genre) -> AppResult<Vec<Movie>> {
                self.inner.find_by_genre(genre)
            }
        }

        let dir = TempDir::new().unwrap();
        let pool = crate::db::create_connection_pool_at(&dir.path().join("catalog.db")).unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        let sqlite_repo: Arc<dyn MovieRepository> =
            Arc::new(SqliteMovieRepository::new(Arc::new(pool)));

        let service = CatalogService::new(Arc::new(FailingAdd {
            inner: sqlite_repo,
        }));

        let err = service
            .add_movie(complete_form("Seven Samurai", "207"))
            .unwrap_err();
        assert!(matches!(err, AppError::Pool(_)));

        assert!(service.list_movies().unwrap().is_empty());
        assert!(matches!(
            service.get_movie_by_title("Seven Samurai").unwrap_err(),
            AppError::NotFound
        ));
    }
}
