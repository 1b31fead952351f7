//! RoleColor pipeline: score → dominant role → rewrite → output triple.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::rewriting::{Rewriter, SummarySource};
use crate::scoring::{get_dominant_role, score_resume, RoleColor, RoleScores};

/// Final pipeline output, serialized as the CLI's JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub role_scores: RoleScores,
    pub dominant_role: RoleColor,
    pub rewritten_summary: String,
    /// Not part of the JSON document.
    #[serde(skip)]
    pub summary_source: SummarySource,
}

/// Runs scoring and rewriting over a single resume.
///
/// Blank text is rejected with `AppError::EmptyInput`; there is nothing to rewrite.
pub async fn run_pipeline(resume_text: &str, rewriter: &Rewriter) -> Result<PipelineOutput, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let role_scores = score_resume(resume_text);
    let dominant_role = get_dominant_role(&role_scores);
    info!(
        "Dominant role: {dominant_role} ({:.4})",
        role_scores.get(dominant_role)
    );

    let rewritten = rewriter
        .rewrite(resume_text, dominant_role, &role_scores)
        .await;
    info!("Summary source: {:?}", rewritten.source);

    Ok(PipelineOutput {
        role_scores,
        dominant_role,
        rewritten_summary: rewritten.text,
        summary_source: rewritten.source,
    })
}
