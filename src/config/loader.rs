//! Question file loading

use crate::config::question::Question;
use crate::constants::QUESTION_FILE_EXTENSIONS;
use crate::error::{Error, Result};
use std::path::Path;

impl Question {
    /// Loads a question from a `.json`, `.yaml` or `.yml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();

        if !QUESTION_FILE_EXTENSIONS.contains(&extension) {
            return Err(Error::UnsupportedQuestionFormat {
                path: path.display().to_string(),
                extensions: QUESTION_FILE_EXTENSIONS.join(", "),
            });
        }

        log::debug!("Loading question from '{}'", path.display());
        let content = std::fs::read_to_string(path)?;
        let question = match extension {
            "json" => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };

        Ok(question)
    }
}
