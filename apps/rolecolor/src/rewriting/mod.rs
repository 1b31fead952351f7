// Summary rewriting: role-aligned prompt, single LLM attempt, template fallback.
// All LLM calls go through llm_client; no direct API calls here.

pub mod prompts;
pub mod rewriter;

pub use rewriter::{fallback_summary, Rewriter, RewrittenSummary, SummarySource};
