//! Agent profile configuration.

use application::{AgentProfile, DEFAULT_AGENT_MODEL, DEFAULT_AGENT_NAME};
use serde::{Deserialize, Serialize};

/// Agent name, model and prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display name (default: "Weather Agent")
    #[serde(default = "default_name")]
    pub name: String,

    /// Model identifier handed to the host (default: "gpt-4o-mini")
    #[serde(default = "default_model")]
    pub model: String,

    /// System prompt override; the built-in prompt is used when unset
    #[serde(default)]
    pub instructions: Option<String>,
}

fn default_name() -> String {
    DEFAULT_AGENT_NAME.to_string()
}

fn default_model() -> String {
    DEFAULT_AGENT_MODEL.to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            model: default_model(),
            instructions: None,
        }
    }
}

impl AgentConfig {
    /// Build the profile the host registers
    #[must_use]
    pub fn profile(&self) -> AgentProfile {
        AgentProfile::new(&self.name, &self.model, self.instructions.clone())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("agent.name must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("agent.model must not be empty".to_string());
        }
        Ok(())
    }
}
