// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod movie;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use movie::{check_form, Genre, Movie, MovieForm, MovieVariant, ValidatedFilm};

// ============================================================================
// FORM ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Form-level errors raised while turning raw presentation input into a
/// validated field set. Rules short-circuit, so `Invalid` carries exactly
/// one rule's message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0}")]
    Invalid(&'static str),

    #[error("Malformed {field}")]
    MalformedNumber { field: &'static str },
}

impl FormError {
    /// The single user-facing warning for this rejection.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Form validation result type
pub type FormResult<T> = Result<T, FormError>;
