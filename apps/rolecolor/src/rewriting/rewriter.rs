//! Summary rewriter: role-aligned summary via the LLM, with a deterministic template fallback.
//!
//! Flow: build prompt → single generate call → trimmed text.
//! Any generation error is logged and replaced by `[FALLBACK SUMMARY] <template>`.
//! Nothing past construction can fail.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::prompts::{CAREER_COACH_PERSONA, PLAIN_OUTPUT_INSTRUCTION};
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::rewriting::prompts::{
    fallback_template, role_description, FALLBACK_MARKER, MAX_RESUME_CHARS,
    REWRITE_PROMPT_TEMPLATE,
};
use crate::scoring::{RoleColor, RoleScores};

/// Where a summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenSummary {
    pub text: String,
    pub source: SummarySource,
}

/// Produces role-aligned summaries. Holds its generator read-only, so one
/// instance serves any number of calls.
#[derive(Clone)]
pub struct Rewriter {
    generator: Arc<dyn TextGenerator>,
}

impl Rewriter {
    /// Builds a rewriter backed by the Gemini client described by `config`.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = GeminiClient::new(config)?;
        Ok(Self::with_generator(Arc::new(client)))
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Returns the rewritten summary text. Never fails.
    pub async fn rewrite_summary(
        &self,
        original_text: &str,
        dominant_role: RoleColor,
        scores: &RoleScores,
    ) -> String {
        self.rewrite(original_text, dominant_role, scores).await.text
    }

    pub async fn rewrite(
        &self,
        original_text: &str,
        dominant_role: RoleColor,
        scores: &RoleScores,
    ) -> RewrittenSummary {
        let prompt = build_rewrite_prompt(original_text, dominant_role);

        match self.generator.generate(&prompt).await {
            Ok(text) => {
                info!("Generated summary for {dominant_role}");
                RewrittenSummary {
                    text: text.trim().to_string(),
                    source: SummarySource::Generated,
                }
            }
            Err(e) => {
                warn!(
                    "Summary generation failed for {dominant_role} (score {:.4}), using template: {e}",
                    scores.get(dominant_role)
                );
                RewrittenSummary {
                    text: fallback_summary(dominant_role),
                    source: SummarySource::Fallback,
                }
            }
        }
    }
}

/// Fills the rewrite template for `role`, truncating the resume to `MAX_RESUME_CHARS` characters.
pub fn build_rewrite_prompt(original_text: &str, role: RoleColor) -> String {
    let resume_text: String = original_text.chars().take(MAX_RESUME_CHARS).collect();

    REWRITE_PROMPT_TEMPLATE
        .replace("{persona}", CAREER_COACH_PERSONA)
        .replace("{role_context}", role_description(role))
        .replace("{output_instruction}", PLAIN_OUTPUT_INSTRUCTION)
        .replace("{role}", role.as_str())
        // Resume text goes in last so braces inside it are never treated as placeholders.
        .replace("{resume_text}", &resume_text)
}

/// Deterministic template summary. No I/O.
pub fn fallback_summary(role: RoleColor) -> String {
    format!("{FALLBACK_MARKER} {}", fallback_template(role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 401,
                message: "API key not valid".to_string(),
            })
        }
    }

    /// Returns a fixed reply and records every prompt it receives.
    struct CannedGenerator {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn sample_scores() -> RoleScores {
        RoleScores::new([0.4, 0.3, 0.2, 0.1])
    }

    #[test]
    fn test_prompt_contains_role_context_and_requirements() {
        let prompt = build_rewrite_prompt("Led platform migrations.", RoleColor::Enablers);
        assert!(prompt.starts_with("You are a Senior AI Career Coach."));
        assert!(prompt.contains("align with the 'Enablers' team role"));
        assert!(prompt.contains(role_description(RoleColor::Enablers)));
        assert!(prompt.contains("Led platform migrations."));
        assert!(prompt.contains("Length: 4-6 lines."));
        assert!(prompt.contains("Emphasize traits of a Enablers"));
        assert!(prompt.contains("no conversational filler"));
        assert!(!prompt.contains('{'), "unfilled placeholder in: {prompt}");
    }

    #[test]
    fn test_prompt_truncates_resume_to_2000_chars() {
        let long_text = format!("{}{}", "é".repeat(MAX_RESUME_CHARS), "TAIL_MARKER");
        let prompt = build_rewrite_prompt(&long_text, RoleColor::Builders);
        assert!(prompt.contains(&"é".repeat(MAX_RESUME_CHARS)));
        assert!(!prompt.contains("TAIL_MARKER"));
    }

    #[test]
    fn test_prompt_leaves_braces_in_resume_untouched() {
        let prompt = build_rewrite_prompt("Built {role} templating engine", RoleColor::Thrivers);
        assert!(prompt.contains("Built {role} templating engine"));
    }

    #[test]
    fn test_fallback_summary_for_every_role() {
        for role in RoleColor::ALL {
            let summary = fallback_summary(role);
            assert!(summary.starts_with("[FALLBACK SUMMARY] "));
            assert!(summary.ends_with(fallback_template(role)));
        }
    }

    #[test]
    fn test_fallback_summary_is_deterministic() {
        assert_eq!(
            fallback_summary(RoleColor::Supportees),
            fallback_summary(RoleColor::Supportees)
        );
    }

    #[tokio::test]
    async fn test_failing_generator_yields_fallback() {
        let rewriter = Rewriter::with_generator(Arc::new(FailingGenerator));
        let summary = rewriter
            .rewrite_summary("Some resume text", RoleColor::Thrivers, &sample_scores())
            .await;

        assert!(summary.starts_with("[FALLBACK SUMMARY]"));
        assert!(summary.contains(
            "Dynamic problem-solver who excels in high-pressure, fast-paced environments."
        ));
    }

    #[tokio::test]
    async fn test_failing_generator_marks_source_as_fallback() {
        let rewriter = Rewriter::with_generator(Arc::new(FailingGenerator));
        let result = rewriter
            .rewrite("text", RoleColor::Builders, &sample_scores())
            .await;
        assert_eq!(result.source, SummarySource::Fallback);
        assert_eq!(result.text, fallback_summary(RoleColor::Builders));
    }

    #[tokio::test]
    async fn test_generated_text_is_trimmed() {
        let generator = Arc::new(CannedGenerator::new(
            "\n  Strategic engineering leader who architects platforms.  \n",
        ));
        let rewriter = Rewriter::with_generator(generator.clone());
        let result = rewriter
            .rewrite("Resume body", RoleColor::Builders, &sample_scores())
            .await;

        assert_eq!(result.source, SummarySource::Generated);
        assert_eq!(
            result.text,
            "Strategic engineering leader who architects platforms."
        );

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1, "exactly one attempt, no retries");
        assert!(prompts[0].contains("Resume body"));
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_fallback() {
        let config = Config {
            gemini_api_key: "test-key".to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            gemini_timeout_secs: 2,
        };
        let rewriter = Rewriter::new(&config).unwrap();
        let summary = rewriter
            .rewrite_summary("Resume", RoleColor::Supportees, &sample_scores())
            .await;
        assert_eq!(summary, fallback_summary(RoleColor::Supportees));
    }
}
