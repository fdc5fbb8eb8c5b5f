pub mod entity;
pub mod form;

pub use entity::{Genre, Movie, MovieVariant};
pub use form::{check_form, MovieForm, ValidatedFilm};
