// src/lib.rs
// Movieshelf - Headless movie catalog core
//
// Architecture:
// - Domain-centric: validation and the movie record live in the domain
// - Explicit: no implicit behavior, no magic
// - Presentation-agnostic: a GUI embeds this crate and calls the services
//
// A presentation layer collects raw form values into a `MovieForm`,
// hands it to `CatalogService::add_movie`, and refreshes its view from
// `list_movies` / `list_by_genre`. Cover images travel as raw bytes via
// `CoverStore`.

pub mod db;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    check_form, FormError, FormResult, Genre, Movie, MovieForm, MovieVariant, ValidatedFilm,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Services & Infrastructure
// ============================================================================

pub use infrastructure::CoverStore;
pub use services::{Catalog, CatalogService};
