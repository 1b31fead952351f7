//! Resume input resolution for the CLI.
//!
//! Priority: explicit file path → piped stdin → built-in sample (interactive terminal).

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::AppError;

/// Used when the CLI runs interactively with no input.
pub const SAMPLE_RESUME: &str = "I am a software engineer who loves building new things, innovating on strategy, and architecting systems.";

/// Resolves resume text from a path, piped stdin, or the sample.
/// Blank results are rejected with `AppError::EmptyInput`.
pub fn resolve_input(
    path: Option<&Path>,
    stdin_is_terminal: bool,
    mut stdin: impl Read,
) -> Result<String, AppError> {
    let text = match path {
        Some(path) => read_resume_file(path)?,
        None if !stdin_is_terminal => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .map_err(|source| AppError::FileRead {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            debug!("Read {} bytes from stdin", buf.len());
            buf
        }
        None => {
            info!("No input given; scoring the built-in sample");
            SAMPLE_RESUME.to_string()
        }
    };

    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }
    Ok(text)
}

/// Reads a resume file. `.pdf` files go through text extraction; anything else is read as UTF-8.
pub fn read_resume_file(path: &Path) -> Result<String, AppError> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }

    if is_pdf(path) {
        return pdf_extract::extract_text(path).map_err(|e| AppError::PdfExtract {
            path: path.to_path_buf(),
            message: e.to_string(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
