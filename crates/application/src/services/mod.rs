//! Application services - Use case implementations

mod reading_formatter;
mod weather_agent;
mod weather_service;
mod weather_tool;

pub use reading_formatter::format_reading;
pub use weather_agent::{
    AgentProfile, DEFAULT_AGENT_MODEL, DEFAULT_AGENT_NAME, DEFAULT_INSTRUCTIONS,
    LAST_LOCATION_KEY, LAST_READING_KEY, WeatherAgent,
};
pub use weather_service::WeatherService;
pub use weather_tool::{
    ToolDefinition, ToolOutcome, WEATHER_TOOL_DESCRIPTION, WEATHER_TOOL_ID, WeatherTool,
    WeatherToolInput, reading_to_json,
};
