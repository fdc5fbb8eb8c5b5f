// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - Explicit SQL only
// - One pooled connection per call, released on every exit path

pub mod movie_repository;

pub use movie_repository::{MovieRepository, SqliteMovieRepository};
