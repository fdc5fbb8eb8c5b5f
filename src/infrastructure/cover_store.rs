// src/infrastructure/cover_store.rs
//
// Cover Image Storage
//
// CRITICAL RULES:
// - Pure byte copy: no decoding, no format validation
// - The chosen source file is NEVER modified
// - On any failure the caller keeps the previous cover

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Owns the directory where display-ready cover files live, keyed by
/// movie id. The presentation layer reads `{id}.jpg` back for display.
#[derive(Debug, Clone)]
pub struct CoverStore {
    covers_dir: PathBuf,
}

impl CoverStore {
    /// Open a cover store over a specific directory, creating it if needed.
    pub fn new(covers_dir: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&covers_dir).map_err(AppError::Io)?;
        Ok(Self { covers_dir })
    }

    /// Open the default store: {APP_DATA}/movieshelf/covers
    pub fn open_default() -> AppResult<Self> {
        let app_data_dir = dirs::data_dir().ok_or_else(|| {
            AppError::Other("Could not determine app data directory".to_string())
        })?;
        Self::new(app_data_dir.join("movieshelf").join("covers"))
    }

    /// Read the full contents of an image file the user picked.
    /// The file chooser offers only .jpg/.jpeg; nothing is verified here.
    pub fn read_image(&self, path: &Path) -> AppResult<Vec<u8>> {
        fs::read(path).map_err(AppError::Io)
    }

    /// Write a movie's cover bytes as a display-ready file keyed by id.
    /// Returns the path the presentation layer can load.
    pub fn write_cover(&self, id: i64, bytes: &[u8]) -> AppResult<PathBuf> {
        let path = self.cover_path(id);
        fs::write(&path, bytes).map_err(AppError::Io)?;
        Ok(path)
    }

    /// Where the cover for a given movie id lives.
    pub fn cover_path(&self, id: i64) -> PathBuf {
        self.covers_dir.join(format!("{}.jpg", id))
    }
}
