//! Keyword router: inspects the incoming message and dispatches to exactly
//! one of the four response paths.

use crate::inference::{Answerer, GenerateOptions, Generator};
use crate::knowledge::KnowledgeBase;
use crate::quiz::{QuizBank, QuizQuestion};
use crate::schemes::SchemeTable;
use crate::shared::RequestContext;
use std::sync::Arc;

/// Prompt sent to the generation model for both tip paths.
pub const TIP_PROMPT: &str = "Suggest one practical energy-saving tip for Indian households.";

/// Response path selected for a message. Priority is fixed: quiz beats tip,
/// tip beats scheme, and anything else falls through to QA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Quiz,
    Tip,
    Scheme,
    Qa,
}

impl Intent {
    /// Case-insensitive substring checks, short-circuiting on first match.
    pub fn classify(message: &str) -> Self {
        let m = message.to_lowercase();
        if m.contains("quiz") {
            Intent::Quiz
        } else if m.contains("tip") || m.contains("save energy") {
            Intent::Tip
        } else if m.contains("scheme") || m.contains("state") {
            Intent::Scheme
        } else {
            Intent::Qa
        }
    }
}

/// One reply per chat request; constructed, serialized, and discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    Quiz(QuizQuestion),
    Tip(String),
    Scheme(String),
    Answer { text: String, confidence: f64 },
}

/// Dispatches a classified message to the matching handler. Every table and
/// adapter is injected at construction; nothing mutates after startup.
pub struct ChatRouter {
    knowledge: Arc<KnowledgeBase>,
    quiz: QuizBank,
    schemes: SchemeTable,
    answerer: Arc<dyn Answerer>,
    generator: Arc<dyn Generator>,
}

impl ChatRouter {
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        quiz: QuizBank,
        schemes: SchemeTable,
        answerer: Arc<dyn Answerer>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self {
            knowledge,
            quiz,
            schemes,
            answerer,
            generator,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Routes `message` to exactly one handler and returns its reply.
    pub async fn dispatch(
        &self,
        ctx: &RequestContext,
        message: &str,
        state: &str,
    ) -> Result<ChatReply, Box<dyn std::error::Error + Send + Sync>> {
        match Intent::classify(message) {
            Intent::Quiz => {
                let question = self
                    .quiz
                    .choose(&mut rand::thread_rng())
                    .ok_or("quiz bank is empty")?;
                Ok(ChatReply::Quiz(question.clone()))
            }
            Intent::Tip => Ok(ChatReply::Tip(self.energy_tip(ctx).await?)),
            Intent::Scheme => Ok(ChatReply::Scheme(self.schemes.lookup(state))),
            Intent::Qa => {
                let qa = self
                    .answerer
                    .answer(ctx, message, &self.knowledge.faqs_context)
                    .await?;
                Ok(ChatReply::Answer {
                    text: qa.answer,
                    confidence: round_confidence(qa.score),
                })
            }
        }
    }

    /// Generates one tip: fixed prompt, bounded sampled continuation, echoed
    /// prompt prefix stripped when present, surrounding whitespace trimmed.
    /// An empty continuation passes through unchanged.
    pub async fn energy_tip(
        &self,
        ctx: &RequestContext,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let raw = self
            .generator
            .generate(ctx, TIP_PROMPT, GenerateOptions::default())
            .await?;
        let stripped = raw.strip_prefix(TIP_PROMPT).unwrap_or(&raw);
        Ok(stripped.trim().to_string())
    }
}

/// Rounds a confidence score to exactly two decimal places.
fn round_confidence(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::QaAnswer;

    struct FixedAnswerer {
        answer: &'static str,
        score: f64,
    }

    #[async_trait::async_trait]
    impl Answerer for FixedAnswerer {
        async fn answer(
            &self,
            _ctx: &RequestContext,
            _question: &str,
            _context: &str,
        ) -> Result<QaAnswer, Box<dyn std::error::Error + Send + Sync>> {
            Ok(QaAnswer {
                answer: self.answer.to_string(),
                score: self.score,
            })
        }
    }

    struct EchoGenerator;

    #[async_trait::async_trait]
    impl Generator for EchoGenerator {
        async fn generate(
            &self,
            _ctx: &RequestContext,
            prompt: &str,
            _opts: GenerateOptions,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok(format!("{} Turn off idle appliances.  ", prompt))
        }
    }

    struct FailingAnswerer;

    #[async_trait::async_trait]
    impl Answerer for FailingAnswerer {
        async fn answer(
            &self,
            _ctx: &RequestContext,
            _question: &str,
            _context: &str,
        ) -> Result<QaAnswer, Box<dyn std::error::Error + Send + Sync>> {
            Err("model unavailable".into())
        }
    }

    fn test_router(answerer: Arc<dyn Answerer>) -> ChatRouter {
        ChatRouter::new(
            Arc::new(KnowledgeBase::default()),
            QuizBank::builtin(),
            SchemeTable::builtin(),
            answerer,
            Arc::new(EchoGenerator),
        )
    }

    fn ctx() -> RequestContext {
        RequestContext::with_correlation_id("test")
    }

    #[test]
    fn classify_follows_fixed_priority_order() {
        assert_eq!(Intent::classify("give me a quiz tip"), Intent::Quiz);
        assert_eq!(Intent::classify("any tip for my state scheme?"), Intent::Tip);
        assert_eq!(Intent::classify("scheme for my state"), Intent::Scheme);
        assert_eq!(Intent::classify("what is solar power"), Intent::Qa);
    }

    #[test]
    fn classify_is_case_insensitive_and_positional_anywhere() {
        assert_eq!(Intent::classify("START THE QUIZ NOW"), Intent::Quiz);
        assert_eq!(Intent::classify("how do I Save Energy?"), Intent::Tip);
        assert_eq!(Intent::classify("my STATE is Karnataka"), Intent::Scheme);
    }

    #[test]
    fn round_confidence_keeps_two_decimal_places() {
        assert_eq!(round_confidence(0.876_543), 0.88);
        assert_eq!(round_confidence(0.0), 0.0);
        assert_eq!(round_confidence(1.0), 1.0);
        assert_eq!(round_confidence(0.125), 0.13);
    }

    #[tokio::test]
    async fn dispatch_quiz_returns_bank_question() {
        let router = test_router(Arc::new(FixedAnswerer {
            answer: "solar",
            score: 0.9,
        }));
        let reply = router.dispatch(&ctx(), "quiz me", "").await.unwrap();
        match reply {
            ChatReply::Quiz(q) => assert!(q.options.contains(&q.answer)),
            other => panic!("expected quiz reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn dispatch_tip_strips_prompt_and_trims() {
        let router = test_router(Arc::new(FixedAnswerer {
            answer: "solar",
            score: 0.9,
        }));
        let reply = router.dispatch(&ctx(), "got a tip?", "").await.unwrap();
        assert_eq!(
            reply,
            ChatReply::Tip("Turn off idle appliances.".to_string())
        );
    }

    #[tokio::test]
    async fn dispatch_scheme_uses_state_not_message() {
        let router = test_router(Arc::new(FixedAnswerer {
            answer: "solar",
            score: 0.9,
        }));
        let reply = router
            .dispatch(&ctx(), "any scheme for me?", "Tamil Nadu")
            .await
            .unwrap();
        match reply {
            ChatReply::Scheme(s) => assert!(s.contains("Solar Rooftop")),
            other => panic!("expected scheme reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn dispatch_qa_rounds_confidence() {
        let router = test_router(Arc::new(FixedAnswerer {
            answer: "solar",
            score: 0.876_543,
        }));
        let reply = router
            .dispatch(&ctx(), "tell me about solar panels", "")
            .await
            .unwrap();
        assert_eq!(
            reply,
            ChatReply::Answer {
                text: "solar".to_string(),
                confidence: 0.88,
            }
        );
    }

    #[tokio::test]
    async fn dispatch_propagates_adapter_failure() {
        let router = test_router(Arc::new(FailingAnswerer));
        let err = router
            .dispatch(&ctx(), "unroutable message", "")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("model unavailable"));
    }
}
