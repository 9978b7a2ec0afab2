//! `get-weather` tool surface
//!
//! The shape the agent host sees: a tool id, a description, JSON schemas for
//! input and output, and an `execute` entry point taking raw JSON arguments.

use std::sync::Arc;

use domain::entities::WeatherReading;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, services::WeatherService};

/// Identifier the agent host calls the weather tool by
pub const WEATHER_TOOL_ID: &str = "get-weather";

/// Description shown to the language model
pub const WEATHER_TOOL_DESCRIPTION: &str = "Get current weather for a location";

/// Static description of a callable tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub id: String,
    pub description: String,
    /// JSON Schema of accepted arguments
    pub input_schema: Value,
    /// JSON Schema of the result
    pub output_schema: Value,
}

/// Arguments accepted by the weather tool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherToolInput {
    /// City name, optionally followed by region or country
    pub location: String,
}

impl WeatherToolInput {
    /// Extract arguments from a raw tool call
    ///
    /// Hosts send either `{"location": ...}` or the same object wrapped in
    /// `{"input": ...}`.
    pub fn from_args(args: &Value) -> Result<Self, ApplicationError> {
        let payload = match args.get("input") {
            Some(inner) if !inner.is_null() => inner,
            _ => args,
        };

        Self::deserialize(payload)
            .map_err(|e| ApplicationError::Validation(format!("Invalid tool input: {e}")))
    }
}

/// A completed tool call
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    /// Arguments as extracted from the call
    pub input: WeatherToolInput,
    /// The reading in its camelCase JSON form
    pub output: Value,
}

/// The weather lookup exposed as an agent tool
#[derive(Debug, Clone)]
pub struct WeatherTool {
    service: Arc<WeatherService>,
}

impl WeatherTool {
    /// Create the tool around a weather service
    pub fn new(service: Arc<WeatherService>) -> Self {
        Self { service }
    }

    /// Tool metadata including input and output schemas
    #[must_use]
    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            id: WEATHER_TOOL_ID.to_string(),
            description: WEATHER_TOOL_DESCRIPTION.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "minLength": 2,
                        "maxLength": 80,
                        "description": "City name, optionally with region or country"
                    }
                },
                "required": ["location"],
                "additionalProperties": false
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "temperature": { "type": "number" },
                    "feelsLike": { "type": "number" },
                    "humidity": { "type": "number" },
                    "windSpeed": { "type": "number" },
                    "windGust": { "type": "number" },
                    "conditions": { "type": "string" },
                    "location": { "type": "string" },
                    "observedAt": { "type": "string" }
                },
                "required": [
                    "temperature", "feelsLike", "humidity", "windSpeed",
                    "windGust", "conditions", "location", "observedAt"
                ]
            }),
        }
    }

    /// Run the lookup for already-extracted arguments
    pub async fn run(&self, input: &WeatherToolInput) -> Result<WeatherReading, ApplicationError> {
        self.service.get_weather(&input.location).await
    }

    /// Execute a raw tool call
    #[instrument(skip_all)]
    pub async fn execute(&self, args: &Value) -> Result<ToolOutcome, ApplicationError> {
        let input = WeatherToolInput::from_args(args)?;
        debug!(location = %input.location, "Executing weather tool");

        let reading = self.run(&input).await?;
        Ok(ToolOutcome {
            output: reading_to_json(&reading)?,
            input,
        })
    }
}

/// Serialize a reading in its camelCase tool-output form
pub fn reading_to_json(reading: &WeatherReading) -> Result<Value, ApplicationError> {
    serde_json::to_value(reading)
        .map_err(|e| ApplicationError::Internal(format!("Failed to serialize reading: {e}")))
}
