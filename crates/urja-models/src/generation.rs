//! Text-generation adapter used for energy tips.

use crate::mode::LlmMode;
use serde::{Deserialize, Serialize};
use urja_core::{GenerateOptions, Generator, RequestContext};

const ENV_GEN_API_URL: &str = "URJA_GEN_API_URL";
const ENV_API_TOKEN: &str = "URJA_API_TOKEN";
const DEFAULT_GEN_API_URL: &str = "https://api-inference.huggingface.co/models/gpt2";

/// Canned continuations for mock mode, keyed by prompt length so the same
/// prompt always yields the same tip.
const MOCK_TIPS: [&str; 4] = [
    "Switch off appliances at the plug instead of leaving them on standby.",
    "Run ceiling fans instead of air conditioning during cooler evening hours.",
    "Replace incandescent bulbs with LED lamps in every room.",
    "Dry clothes on a line outdoors rather than using an electric dryer.",
];

#[derive(Serialize)]
struct GenApiRequest<'a> {
    inputs: &'a str,
    parameters: GenParameters,
}

#[derive(Serialize)]
struct GenParameters {
    max_length: u32,
    num_return_sequences: u32,
    do_sample: bool,
}

#[derive(Deserialize)]
struct GeneratedSequence {
    generated_text: String,
}

/// Wraps a pre-trained causal LM: prompt -> sampled continuation.
pub struct GenModel {
    mode: LlmMode,
    client: reqwest::Client,
}

impl GenModel {
    pub fn new() -> Self {
        Self::with_mode(LlmMode::from_env())
    }

    pub fn with_mode(mode: LlmMode) -> Self {
        Self {
            mode,
            client: reqwest::Client::new(),
        }
    }

    fn api_token() -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let token = std::env::var(ENV_API_TOKEN)?.trim().to_string();
        if token.is_empty() {
            return Err("URJA_API_TOKEN is empty".into());
        }
        Ok(token)
    }

    /// Mock generation: echoes the prompt as a prefix (as GPT-2 style models
    /// do) followed by a canned tip.
    fn mock_generate(prompt: &str) -> String {
        let tip = MOCK_TIPS[prompt.len() % MOCK_TIPS.len()];
        format!("{} {}", prompt, tip)
    }

    /// Live call to a hosted text-generation endpoint. Takes the first
    /// returned sequence; an empty result passes through unchanged.
    async fn live_generate(
        &self,
        prompt: &str,
        opts: GenerateOptions,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let url =
            std::env::var(ENV_GEN_API_URL).unwrap_or_else(|_| DEFAULT_GEN_API_URL.to_string());
        let token = Self::api_token()?;

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&GenApiRequest {
                inputs: prompt,
                parameters: GenParameters {
                    max_length: opts.max_length,
                    num_return_sequences: opts.num_return_sequences,
                    do_sample: opts.sample,
                },
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("generation API error ({}): {}", status, error_text).into());
        }

        let sequences: Vec<GeneratedSequence> = response.json().await?;
        Ok(sequences
            .into_iter()
            .next()
            .map(|s| s.generated_text)
            .unwrap_or_default())
    }
}

impl Default for GenModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Generator for GenModel {
    async fn generate(
        &self,
        ctx: &RequestContext,
        prompt: &str,
        opts: GenerateOptions,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        match self.mode {
            LlmMode::Mock => Ok(Self::mock_generate(prompt)),
            LlmMode::Live => {
                tracing::debug!(
                    target: "urja::models",
                    correlation_id = ctx.correlation(),
                    max_length = opts.max_length,
                    "dispatching generation request"
                );
                self.live_generate(prompt, opts).await
            }
        }
    }
}
