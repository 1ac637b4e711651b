use async_openai::error::OpenAIError;
use briefing_tools::ExternalServiceError;
use thiserror::Error;

/// Everything that can end a briefing run. Nothing here is retried.
#[derive(Debug, Error)]
pub enum BriefingError {
    #[error(transparent)]
    ExternalService(#[from] ExternalServiceError),

    #[error("model service failed: {0}")]
    ModelService(#[from] OpenAIError),

    #[error("model returned an empty reply in round {round}")]
    EmptyReply { round: u8 },

    #[error("malformed arguments for '{tool}': {reason}")]
    MalformedArguments { tool: String, reason: String },

    #[error("model requested unknown tool '{0}'")]
    UnknownTool(String),

    #[error("tool result for call '{0}' has no matching pending request")]
    UnmatchedToolResult(String),
}
