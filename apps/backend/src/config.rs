//! Runtime configuration, read once at startup.

use review_core::{get_strategy, SchedulingStrategy};

/// Configuration recognized by the AI evaluation collaborator.
///
/// Read once at startup and handed to the collaborator explicitly; no
/// ambient key-value reads happen at call sites.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub ai_prompts_enabled: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Scheduling strategy name; validated against the registry at startup.
    pub strategy_name: String,
    /// Seed for the mock evaluator's RNG.
    pub eval_seed: u64,
    pub ai: AiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strategy_name: "difficulty_offset".to_string(),
            eval_seed: 42,
            ai: AiConfig {
                api_key: None,
                ai_prompts_enabled: true,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let strategy_name = std::env::var("SPEAKBACK_STRATEGY")
            .unwrap_or_else(|_| defaults.strategy_name.clone());
        if get_strategy(&strategy_name).is_none() {
            anyhow::bail!("unknown scheduling strategy: {strategy_name}");
        }

        let eval_seed = match std::env::var("SPEAKBACK_EVAL_SEED") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("SPEAKBACK_EVAL_SEED must be an integer: {raw}"))?,
            Err(_) => defaults.eval_seed,
        };

        let api_key = std::env::var("SPEAKBACK_OPENAI_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let ai_prompts_enabled = match std::env::var("SPEAKBACK_AI_PROMPTS") {
            Ok(raw) => !matches!(raw.to_lowercase().as_str(), "0" | "false" | "off"),
            Err(_) => true,
        };

        Ok(Self {
            strategy_name,
            eval_seed,
            ai: AiConfig {
                api_key,
                ai_prompts_enabled,
            },
        })
    }

    /// Instantiate the configured scheduling strategy.
    pub fn strategy(&self) -> Box<dyn SchedulingStrategy> {
        get_strategy(&self.strategy_name).expect("strategy validated at startup")
    }
}
