//! Runtime configuration: where the model lives and how to log.
//!
//! Precedence for the model path: `--model` flag, then `ACCIDENT_MODEL_PATH`
//! (from the environment or a `.env` file), then `DEFAULT_MODEL_PATH`. clap
//! resolves that chain; this module validates the result and loads the model.

use std::path::{Path, PathBuf};

use crate::cli::RuntimeArgs;
use crate::error::AppError;
use crate::io::JsonModelLoader;
use crate::models::{ModelArtifact, ModelLoader};

pub const DEFAULT_MODEL_PATH: &str = "models/accident_model.json";
pub const MODEL_PATH_ENV: &str = "ACCIDENT_MODEL_PATH";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_args(args: &RuntimeArgs) -> Self {
        Self {
            model_path: args.model.clone(),
            log_level: args.log_level.clone(),
            log_file: args.log_file.clone(),
        }
    }

    /// Load the model artifact once. Any failure here is fatal.
    pub fn load_model(&self) -> Result<ModelArtifact, AppError> {
        let path = validate_model_path(&self.model_path)?;
        JsonModelLoader::new(path).load()
    }
}

/// Load `.env` into the process environment, if present.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Validate the provided path points to a `.json` file.
pub fn validate_model_path(path: &Path) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::config(format!(
            "Error loading model: file not found: {} (set --model or {MODEL_PATH_ENV})",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(AppError::config(format!(
            "Error loading model: expected a file, got a directory: {}",
            path.display()
        )));
    }
    if path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        != Some(true)
    {
        return Err(AppError::config(format!(
            "Error loading model: expected a .json artifact (got: {})",
            path.display()
        )));
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_CONFIG;

    #[test]
    fn missing_model_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_model_path(&dir.path().join("model.json")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_CONFIG);
        assert!(err.to_string().contains(MODEL_PATH_ENV));
    }

    #[test]
    fn directories_and_other_extensions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_model_path(dir.path()).is_err());

        let pkl = dir.path().join("accident_model.pkl");
        std::fs::write(&pkl, b"\x80\x04").unwrap();
        let err = validate_model_path(&pkl).unwrap_err();
        assert!(err.to_string().contains(".json"));
    }

    #[test]
    fn existing_json_file_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Model.JSON");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(validate_model_path(&path).unwrap(), path);
    }
}
