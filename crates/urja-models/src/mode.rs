//! Adapter mode selection shared by both models.

const ENV_LLM_MODE: &str = "URJA_LLM_MODE";

/// Mode for model invocation: mock (deterministic output, no network) or
/// live (calls a hosted inference API).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LlmMode {
    #[default]
    Mock,
    Live,
}

impl LlmMode {
    /// Resolves the mode from `URJA_LLM_MODE`; anything but "live" is mock.
    pub fn from_env() -> Self {
        match std::env::var(ENV_LLM_MODE).as_deref() {
            Ok("live") => LlmMode::Live,
            _ => LlmMode::Mock,
        }
    }

    /// Parses a configured mode string ("mock" / "live").
    pub fn from_config(s: &str) -> Self {
        if s.eq_ignore_ascii_case("live") {
            LlmMode::Live
        } else {
            LlmMode::Mock
        }
    }
}
