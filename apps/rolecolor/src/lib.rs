//! RoleColor: classifies a resume into one of four team-role archetypes by keyword
//! frequency, then rewrites its summary for that role.

pub mod config;
pub mod errors;
pub mod input;
pub mod llm_client;
pub mod pipeline;
pub mod rewriting;
pub mod scoring;

pub use pipeline::{run_pipeline, PipelineOutput};
