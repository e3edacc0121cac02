//! Capability traits for the pre-trained models the router delegates to.
//!
//! The router only sees these contracts, so the hosted models can be swapped
//! for deterministic stubs in tests.

use crate::shared::RequestContext;

/// Extracted answer span and model-reported confidence in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct QaAnswer {
    pub answer: String,
    pub score: f64,
}

/// Sampling parameters forwarded to the generation model.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Upper bound on output length, prompt included.
    pub max_length: u32,
    pub num_return_sequences: u32,
    /// Enables stochastic sampling; output varies across calls when set.
    pub sample: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_length: 40,
            num_return_sequences: 1,
            sample: true,
        }
    }
}

/// Extractive question answering: (question, context) -> answer span + score.
#[async_trait::async_trait]
pub trait Answerer: Send + Sync {
    async fn answer(
        &self,
        ctx: &RequestContext,
        question: &str,
        context: &str,
    ) -> Result<QaAnswer, Box<dyn std::error::Error + Send + Sync>>;
}

/// Free-text generation: prompt -> continuation.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        ctx: &RequestContext,
        prompt: &str,
        opts: GenerateOptions,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
