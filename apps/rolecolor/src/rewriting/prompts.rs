// All LLM prompt constants for the Rewriting module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::scoring::RoleColor;

/// Marker prefixed to every template summary so callers can tell it from generated text.
pub const FALLBACK_MARKER: &str = "[FALLBACK SUMMARY]";

/// Maximum number of resume characters sent to the model.
pub const MAX_RESUME_CHARS: usize = 2000;

/// Summary rewrite prompt template.
/// Replace: {persona}, {role}, {role_context}, {resume_text}, {output_instruction}
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"{persona} Rewrite the following resume summary to align with the '{role}' team role.

Role Context: {role_context}

Original Resume Text:
{resume_text}

Requirements:
- Length: 4-6 lines.
- Tone: Professional, impactful, and senior-level.
- Focus: Emphasize traits of a {role} while staying true to the candidate's experience.
- {output_instruction}"#;

/// One-sentence brief for each role, embedded in the rewrite prompt.
pub fn role_description(role: RoleColor) -> &'static str {
    match role {
        RoleColor::Builders => {
            "Focus on innovation, vision, and strategic growth. \
            Highlight architectural decisions and pioneering new solutions."
        }
        RoleColor::Enablers => {
            "Focus on execution, bridging gaps, and cross-functional collaboration. \
            Highlight stakeholder management and operational excellence."
        }
        RoleColor::Thrivers => {
            "Focus on adaptability, speed, and performing under pressure. \
            Highlight resilience in dynamic environments and rapid problem-solving."
        }
        RoleColor::Supportees => {
            "Focus on reliability, consistency, and stability. \
            Highlight maintenance, quality assurance, and robust infrastructure management."
        }
    }
}

/// Template summary for each role, used when generation fails.
pub fn fallback_template(role: RoleColor) -> &'static str {
    match role {
        RoleColor::Builders => {
            "Visionary leader with a proven track record of driving innovation and strategic growth. \
            Expert at architecting scalable solutions and pioneering new product directions to transform business landscapes."
        }
        RoleColor::Enablers => {
            "Collaborative professional focused on bridging gaps between strategy and execution. \
            Skilled at coordinating cross-functional teams and streamlining workflows to ensure consistent delivery."
        }
        RoleColor::Thrivers => {
            "Dynamic problem-solver who excels in high-pressure, fast-paced environments. \
            Highly adaptable and resilient, with a focus on rapid iteration and turning challenges into growth opportunities."
        }
        RoleColor::Supportees => {
            "Reliable infrastructure specialist dedicated to ensuring system stability and operational excellence. \
            Committed to high-quality standards, meticulous documentation, and robust maintenance."
        }
    }
}
