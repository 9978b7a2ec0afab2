//! Weather agent profile and tool dispatch
//!
//! The agent itself (dialogue, model calls) lives in the host. This module
//! holds what the host needs from us: the profile it registers, a dispatcher
//! for tool calls, and per-session memory of the last successful lookup.

use std::{fmt, sync::Arc};

use domain::{entities::WeatherReading, value_objects::SessionId};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::SessionStore,
    services::weather_tool::{
        ToolDefinition, WEATHER_TOOL_ID, WeatherTool, WeatherToolInput, reading_to_json,
    },
};

/// Default agent name
pub const DEFAULT_AGENT_NAME: &str = "Weather Agent";

/// Default model identifier
pub const DEFAULT_AGENT_MODEL: &str = "gpt-4o-mini";

/// Session key holding the location text of the last successful lookup
pub const LAST_LOCATION_KEY: &str = "last_location";

/// Session key holding the last successful reading
pub const LAST_READING_KEY: &str = "last_reading";

/// Built-in system prompt
pub const DEFAULT_INSTRUCTIONS: &str = "\
You are Weather Agent, a concise and accurate weather assistant.

Rules:
1. If the user gives no location, ask one short question to get it.
2. If the location has several parts (for example \"New York, NY\"), look up the main place name (\"New York\").
3. If the location is not in English, use its English name for the tool call but answer in the user's language.
4. Always report temperature, feels-like, humidity and wind.
5. Keep answers short. Use bullet points for data and at most one line of advice.
6. If the tool fails or returns incomplete data, say so plainly and ask only for what you need to try again.

Answer format:
<Location> - <Conditions>, <Temperature>°C
- Feels like, humidity, wind and gusts as bullets
";

/// What the host registers for this agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentProfile {
    pub name: String,
    pub model: String,
    pub instructions: String,
    pub tools: Vec<ToolDefinition>,
}

impl AgentProfile {
    /// Build a profile, falling back to [`DEFAULT_INSTRUCTIONS`]
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        instructions: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            instructions: instructions
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string()),
            tools: vec![WeatherTool::definition()],
        }
    }

    /// Look up a tool by id
    #[must_use]
    pub fn tool(&self, id: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|tool| tool.id == id)
    }
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_NAME, DEFAULT_AGENT_MODEL, None)
    }
}

/// Tool dispatcher with per-session memory
pub struct WeatherAgent {
    profile: AgentProfile,
    tool: WeatherTool,
    sessions: Arc<dyn SessionStore>,
}

impl fmt::Debug for WeatherAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherAgent")
            .field("name", &self.profile.name)
            .field("model", &self.profile.model)
            .finish_non_exhaustive()
    }
}

impl WeatherAgent {
    /// Create an agent
    pub fn new(profile: AgentProfile, tool: WeatherTool, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            profile,
            tool,
            sessions,
        }
    }

    /// The registered profile
    pub const fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Dispatch a raw tool call
    ///
    /// On success the lookup is remembered for `session`. Failed calls leave
    /// the session untouched.
    #[instrument(skip(self, args), fields(session = %session))]
    pub async fn invoke_tool(
        &self,
        session: &SessionId,
        tool_id: &str,
        args: &Value,
    ) -> Result<Value, ApplicationError> {
        if tool_id != WEATHER_TOOL_ID {
            return Err(ApplicationError::Validation(format!(
                "Unknown tool '{tool_id}'"
            )));
        }

        let outcome = self.tool.execute(args).await?;

        self.remember(session, &outcome.input.location, outcome.output.clone())
            .await?;

        Ok(outcome.output)
    }

    /// Look up the weather for `location` and remember it
    #[instrument(skip(self), fields(session = %session))]
    pub async fn ask(
        &self,
        session: &SessionId,
        location: &str,
    ) -> Result<WeatherReading, ApplicationError> {
        let input = WeatherToolInput {
            location: location.to_string(),
        };
        let reading = self.tool.run(&input).await?;

        self.remember(session, location, reading_to_json(&reading)?)
            .await?;

        Ok(reading)
    }

    /// The last successful reading of a session, if any
    #[instrument(skip(self), fields(session = %session))]
    pub async fn recall(
        &self,
        session: &SessionId,
    ) -> Result<Option<WeatherReading>, ApplicationError> {
        let Some(value) = self.sessions.get(session, LAST_READING_KEY).await? else {
            debug!("Nothing remembered for session");
            return Ok(None);
        };

        serde_json::from_value(value).map(Some).map_err(|e| {
            ApplicationError::Internal(format!("Stored reading is malformed: {e}"))
        })
    }

    /// The location text of the last successful lookup, if any
    pub async fn last_location(
        &self,
        session: &SessionId,
    ) -> Result<Option<String>, ApplicationError> {
        Ok(self
            .sessions
            .get(session, LAST_LOCATION_KEY)
            .await?
            .and_then(|value| value.as_str().map(ToString::to_string)))
    }

    /// Drop everything remembered for a session
    #[instrument(skip(self), fields(session = %session))]
    pub async fn forget(&self, session: &SessionId) -> Result<usize, ApplicationError> {
        let removed = self.sessions.clear(session).await?;
        info!(removed, "Session memory cleared");
        Ok(removed)
    }

    async fn remember(
        &self,
        session: &SessionId,
        location: &str,
        reading: Value,
    ) -> Result<(), ApplicationError> {
        self.sessions
            .set_many(
                session,
                vec![
                    (
                        LAST_LOCATION_KEY.to_string(),
                        Value::String(location.to_string()),
                    ),
                    (LAST_READING_KEY.to_string(), reading),
                ],
            )
            .await
    }
}
