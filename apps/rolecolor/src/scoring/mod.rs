// RoleColor classification: fixed keyword taxonomy + frequency scorer.
// Pure and synchronous; no LLM calls here.

pub mod scorer;
pub mod taxonomy;

pub use scorer::{get_dominant_role, score_resume, RoleScores};
pub use taxonomy::RoleColor;
