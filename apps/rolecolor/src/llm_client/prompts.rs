// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Persona used for every career-writing prompt.
pub const CAREER_COACH_PERSONA: &str = "You are a Senior AI Career Coach.";

/// Common instruction appended to all plain-text generation prompts.
pub const PLAIN_OUTPUT_INSTRUCTION: &str =
    "Output: Only the rewritten summary, no conversational filler.";
