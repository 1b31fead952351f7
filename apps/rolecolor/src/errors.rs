use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// Generation failures during a rewrite never surface here; the rewriter
/// downgrades them to the fallback summary. `Llm` only covers client construction.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("File not found at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Error reading file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error extracting text from PDF {}: {message}", path.display())]
    PdfExtract { path: PathBuf, message: String },

    #[error("No input text provided. Use --input-data or pipe text to stdin.")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("LLM client error: {0}")]
    Llm(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message_names_path() {
        let err = AppError::FileNotFound(PathBuf::from("/tmp/missing_resume.txt"));
        assert_eq!(err.to_string(), "File not found at /tmp/missing_resume.txt");
    }

    #[test]
    fn test_config_error_keeps_context() {
        let err: AppError = anyhow::anyhow!("Required environment variable 'GEMINI_API_KEY' is not set").into();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
