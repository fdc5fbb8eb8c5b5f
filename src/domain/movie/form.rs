use chrono::NaiveDate;

use super::entity::Genre;
use crate::domain::{FormError, FormResult};

/// Raw field values handed over by the presentation layer.
///
/// Numeric fields arrive as the strings the user typed; the premiere date
/// and genre arrive already picked (or not picked) from their widgets.
#[derive(Debug, Clone, Default)]
pub struct MovieForm {
    pub title: String,
    pub country: String,
    pub director: String,
    pub premiere: Option<NaiveDate>,
    pub description: String,
    pub rating: String,
    pub age_rating: String,
    pub runtime: String,
    pub genre: Option<Genre>,
    pub cover: Option<Vec<u8>>,
}

/// Fully parsed, typed field set that passed every rule.
/// Ready for `Movie::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFilm {
    pub title: String,
    pub country: String,
    pub director: String,
    pub genre: Genre,
    pub cover: Option<Vec<u8>>,
    pub premiere: NaiveDate,
    pub description: String,
    pub rating: f64,
    pub age_rating: i32,
    pub runtime_minutes: i32,
}

/// Validate a submitted form.
///
/// Numeric fields are parsed first; a parse failure surfaces as
/// `MalformedNumber` before any rule runs. The rules then run in a fixed
/// order and evaluation stops at the first failure, so the result carries
/// exactly one message.
pub fn check_form(form: &MovieForm) -> FormResult<ValidatedFilm> {
    let rating = parse_rating(&form.rating)?;
    let age_rating = parse_integer(&form.age_rating, "age rating")?;
    let runtime_minutes = parse_integer(&form.runtime, "runtime")?;

    check_title(&form.title)?;
    check_country(&form.country)?;
    check_director(&form.director)?;
    let premiere = check_premiere(form.premiere)?;
    check_description(&form.description)?;
    let genre = check_genre(form.genre)?;

    Ok(ValidatedFilm {
        title: form.title.clone(),
        country: form.country.clone(),
        director: form.director.clone(),
        genre,
        cover: form.cover.clone(),
        premiere,
        description: form.description.clone(),
        rating,
        age_rating,
        runtime_minutes,
    })
}

/// The user may type the rating with either decimal separator.
/// Comma is normalized to period before parsing.
fn parse_rating(raw: &str) -> FormResult<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| FormError::MalformedNumber { field: "rating" })
}

fn parse_integer(raw: &str, field: &'static str) -> FormResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| FormError::MalformedNumber { field })
}

fn check_title(title: &str) -> FormResult<()> {
    if title.is_empty() || title.chars().count() > 50 {
        return Err(FormError::Invalid("Wrong title"));
    }
    Ok(())
}

fn check_country(country: &str) -> FormResult<()> {
    if country.is_empty() || country.chars().count() > 50 {
        return Err(FormError::Invalid("Wrong country"));
    }
    Ok(())
}

fn check_director(director: &str) -> FormResult<()> {
    if director.is_empty() || director.chars().count() > 50 {
        return Err(FormError::Invalid("Wrong director"));
    }
    Ok(())
}

fn check_premiere(premiere: Option<NaiveDate>) -> FormResult<NaiveDate> {
    premiere.ok_or(FormError::Invalid("Wrong date"))
}

fn check_description(description: &str) -> FormResult<()> {
    if description.is_empty() || description.chars().count() > 500 {
        return Err(FormError::Invalid("Wrong description"));
    }
    Ok(())
}

fn check_genre(genre: Option<Genre>) -> FormResult<Genre> {
    genre.ok_or(FormError::Invalid("No genre selected"))
}
