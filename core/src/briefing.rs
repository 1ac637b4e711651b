use briefing_tools::Lookups;
use serde_json::json;
use tracing::{info, warn};

use crate::conversation::{Conversation, ToolInvocationRequest, ToolInvocationResult};
use crate::error::BriefingError;
use crate::llm::{ChatModel, ChatRequest};
use crate::registry::{Registry, ToolCall, ToolDescriptor};

pub const DAILY_BRIEFING_PROMPT: &str = "Create a daily briefing for me that includes:
1. Today's weather in San Francisco
2. Top news headlines
Organize this information in a creative story not more than 200 words.";

/// Runs the two-round tool-calling exchange that produces the briefing.
pub struct Briefing<M, L> {
    brain: M,
    lookups: L,
    catalog: Vec<ToolDescriptor>,
}

impl<M: ChatModel, L: Lookups> Briefing<M, L> {
    pub fn new(brain: M, lookups: L) -> Self {
        Self {
            brain,
            lookups,
            catalog: Registry::catalog(),
        }
    }

    /// One full briefing cycle. Any failure aborts the run; there is no
    /// partial briefing.
    pub async fn run(&self) -> Result<String, BriefingError> {
        let mut convo = Conversation::new(DAILY_BRIEFING_PROMPT);

        // ROUND 1: offer the tools, let the model decide.
        info!("Round 1: asking the model, {} tools offered", self.catalog.len());
        let reply = self
            .brain
            .complete(ChatRequest {
                messages: convo.messages(),
                tools: &self.catalog,
            })
            .await?;

        if reply.tool_calls.is_empty() {
            info!("Model answered directly without calling any tool");
            return reply
                .content
                .filter(|text| !text.is_empty())
                .ok_or(BriefingError::EmptyReply { round: 1 });
        }

        let calls = reply.tool_calls.clone();
        convo.push_assistant(reply.content, reply.tool_calls);

        // Strictly in order; every result is in the log before round two.
        for request in &calls {
            let result = self.execute(request).await?;
            convo.push_tool_result(result)?;
        }

        // ROUND 2: same history plus results, no tools this time.
        info!("Round 2: sending {} messages", convo.len());
        let reply = self
            .brain
            .complete(ChatRequest {
                messages: convo.messages(),
                tools: &[],
            })
            .await?;

        if !reply.tool_calls.is_empty() {
            warn!(
                "Model requested {} more tool calls in round 2; ignoring them",
                reply.tool_calls.len()
            );
        }

        reply
            .content
            .filter(|text| !text.is_empty())
            .ok_or(BriefingError::EmptyReply { round: 2 })
    }

    async fn execute(&self, request: &ToolInvocationRequest) -> Result<ToolInvocationResult, BriefingError> {
        let call = ToolCall::parse(request)?;
        info!("Brain decided to call tool: '{}' ({})", request.name, request.id);

        let content = match call {
            ToolCall::Weather { city } => {
                let report = self.lookups.weather(&city).await?;
                json!({
                    "city": report.city,
                    "condition": report.condition,
                    "temperature": report.temperature,
                })
            }
            ToolCall::Headlines => {
                let headlines = self.lookups.headlines().await?;
                info!("Fetched {} headlines", headlines.len());
                json!({ "headlines": headlines })
            }
        };

        Ok(ToolInvocationResult {
            call_id: request.id.clone(),
            name: request.name.clone(),
            content: content.to_string(),
        })
    }
}
