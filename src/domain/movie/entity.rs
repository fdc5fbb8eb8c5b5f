use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::ValidatedFilm;

/// A catalogued film record.
///
/// Constructed from a `ValidatedFilm`; the record itself never re-validates.
/// `id` is 0 until the persistence gateway assigns the real identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned identity (0 before persistence)
    pub id: i64,

    pub title: String,

    pub country: String,

    pub director: String,

    pub genre: Genre,

    /// Raw cover image bytes; None means the presentation layer shows
    /// its placeholder
    pub cover: Option<Vec<u8>>,

    pub premiere: NaiveDate,

    pub description: String,

    /// Average rating
    pub rating: f64,

    /// Minimum viewer age
    pub age_rating: i32,

    pub runtime_minutes: i32,

    /// Length category derived from the runtime at construction time
    pub variant: MovieVariant,
}

/// Length category of a film. A stored/display attribute only; no other
/// behavior differs between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieVariant {
    FullLength,
    Short,
}

impl MovieVariant {
    /// Films longer than 55 minutes are full-length; 55 and under are short.
    pub fn for_runtime(minutes: i32) -> Self {
        if minutes > 55 {
            MovieVariant::FullLength
        } else {
            MovieVariant::Short
        }
    }

    /// Parse a stored discriminator string.
    pub fn parse(s: &str) -> Option<MovieVariant> {
        match s {
            "full_length" => Some(MovieVariant::FullLength),
            "short" => Some(MovieVariant::Short),
            _ => None,
        }
    }
}

/// The fixed genre set offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    Mystery,
    Thriller,
    Western,
    ScienceFiction,
}

impl Genre {
    /// Every genre, in the order the presentation layer lists them.
    pub const ALL: [Genre; 11] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Western,
        Genre::ScienceFiction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::Western => "Western",
            Genre::ScienceFiction => "ScienceFiction",
        }
    }

    /// Parse a stored/display string back into a genre.
    pub fn parse(s: &str) -> Option<Genre> {
        Genre::ALL.iter().copied().find(|g| g.as_str() == s)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for MovieVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieVariant::FullLength => write!(f, "full_length"),
            MovieVariant::Short => write!(f, "short"),
        }
    }
}

impl Movie {
    /// Build a movie record from validated form data.
    /// This is the only way to construct a `Movie`; variant selection
    /// happens here and nowhere else.
    pub fn new(film: ValidatedFilm) -> Self {
        let variant = MovieVariant::for_runtime(film.runtime_minutes);
        Self {
            id: 0,
            title: film.title,
            country: film.country,
            director: film.director,
            genre: film.genre,
            cover: film.cover,
            premiere: film.premiere,
            description: film.description,
            rating: film.rating,
            age_rating: film.age_rating,
            runtime_minutes: film.runtime_minutes,
            variant,
        }
    }
}
