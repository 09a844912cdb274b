//! Loader for the RON movement tuning file.

use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

use crate::movement::{MovementTuning, TuningError};

pub const MOVEMENT_TUNING_PATH: &str = "assets/data/movement.ron";

/// Error type for tuning loading failures.
#[derive(Debug, Error)]
pub enum TuningLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid tuning in {path}: {source}")]
    Invalid { path: String, source: TuningError },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning text. `origin` only labels errors.
pub fn parse_tuning(contents: &str, origin: &str) -> Result<MovementTuning, TuningLoadError> {
    let tuning: MovementTuning =
        ron_options()
            .from_str(contents)
            .map_err(|e| TuningLoadError::Parse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

    tuning
        .validate()
        .map_err(|source| TuningLoadError::Invalid {
            path: origin.to_string(),
            source,
        })?;

    Ok(tuning)
}

/// Load tuning from disk. `Ok(None)` means the file does not exist.
pub fn load_tuning(path: &Path) -> Result<Option<MovementTuning>, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(TuningLoadError::Io {
                path: file_name,
                source,
            });
        }
    };

    parse_tuning(&contents, &file_name).map(Some)
}
