//! Motor domain: RON overrides for the tuning surface.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::motor::MotorTuning;

/// Default location for tuning overrides, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/motor.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load tuning from a RON file. A missing file is not an error; the caller
/// keeps the defaults.
pub(crate) fn load_tuning(path: &Path) -> Result<Option<MotorTuning>, TuningLoadError> {
    if !path.exists() {
        return Ok(None);
    }

    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let tuning = ron_options()
        .from_str(&contents)
        .map_err(|e| TuningLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(Some(tuning))
}

/// Apply tuning overrides at startup. Config faults are surfaced, never
/// fatal; the default tuning stands.
pub(crate) fn load_tuning_overrides(mut tuning: ResMut<MotorTuning>) {
    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(Some(loaded)) => {
            info!("Loaded motor tuning from {}", TUNING_PATH);
            *tuning = loaded;
        }
        Ok(None) => {
            info!("No tuning file at {}, using default motor tuning", TUNING_PATH);
        }
        Err(e) => {
            warn!("{}; keeping default motor tuning", e);
        }
    }
}
