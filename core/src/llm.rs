use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
        ChatCompletionRequestMessage, ChatCompletionRequestToolMessageArgs,
        ChatCompletionRequestUserMessageArgs, ChatCompletionTool, ChatCompletionToolArgs,
        ChatCompletionToolChoiceOption, ChatCompletionToolType, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, FunctionCall, FunctionObjectArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::Settings;
use crate::conversation::{Message, ToolInvocationRequest};
use crate::error::BriefingError;
use crate::registry::ToolDescriptor;

/// One round's worth of input. An empty `tools` slice means no tools are
/// offered and no tool choice is sent.
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    pub messages: &'a [Message],
    pub tools: &'a [ToolDescriptor],
}

/// The first choice of a chat completion, reduced to what the briefing uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelReply {
    pub content: Option<String>,
    pub tool_calls: Vec<ToolInvocationRequest>,
}

#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: ChatRequest<'_>) -> Result<ModelReply, BriefingError>;
}

pub struct Brain {
    client: Client<OpenAIConfig>,
    model: String,
}

impl Brain {
    pub fn new(settings: &Settings) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(settings.openai_api_key.as_str())
            .with_api_base(settings.openai_base_url.as_str());
        let client = Client::with_config(config);

        info!("Brain ready. Model: {}", settings.model);
        Self {
            client,
            model: settings.model.clone(),
        }
    }

    pub fn build_request(&self, request: ChatRequest<'_>) -> Result<CreateChatCompletionRequest, OpenAIError> {
        let messages = request
            .messages
            .iter()
            .map(to_openai_message)
            .collect::<Result<Vec<_>, _>>()?;

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model).messages(messages);

        // Round two goes out with no tools at all, not an empty list.
        if !request.tools.is_empty() {
            let tools = request
                .tools
                .iter()
                .map(to_openai_tool)
                .collect::<Result<Vec<_>, _>>()?;
            args.tools(tools).tool_choice(ChatCompletionToolChoiceOption::Auto);
        }

        args.build()
    }
}

#[async_trait]
impl ChatModel for Brain {
    async fn complete(&self, request: ChatRequest<'_>) -> Result<ModelReply, BriefingError> {
        let request = self.build_request(request)?;
        debug!("Sending {} messages to {}", request.messages.len(), self.model);

        let response = self.client.chat().create(request).await?;
        if let Some(usage) = &response.usage {
            debug!("Usage: {:?}", usage);
        }

        let Some(choice) = response.choices.into_iter().next() else {
            return Ok(ModelReply::default());
        };

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| ToolInvocationRequest {
                id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect();

        Ok(ModelReply {
            content: choice.message.content,
            tool_calls,
        })
    }
}

// --- Conversions: our log -> OpenAI wire types ---

fn to_openai_tool(tool: &ToolDescriptor) -> Result<ChatCompletionTool, OpenAIError> {
    ChatCompletionToolArgs::default()
        .r#type(ChatCompletionToolType::Function)
        .function(
            FunctionObjectArgs::default()
                .name(&tool.name)
                .description(&tool.description)
                .parameters(tool.parameters.clone()) // Pass the JSON Schema directly
                .build()?,
        )
        .build()
}

fn to_openai_message(message: &Message) -> Result<ChatCompletionRequestMessage, OpenAIError> {
    let message = match message {
        Message::User(text) => ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessageArgs::default()
                .content(text.as_str())
                .build()?,
        ),
        Message::Assistant { content, tool_calls } => {
            let mut args = ChatCompletionRequestAssistantMessageArgs::default();
            if let Some(content) = content {
                args.content(content.as_str());
            }
            if !tool_calls.is_empty() {
                args.tool_calls(
                    tool_calls
                        .iter()
                        .map(|call| ChatCompletionMessageToolCall {
                            id: call.id.clone(),
                            r#type: ChatCompletionToolType::Function,
                            function: FunctionCall {
                                name: call.name.clone(),
                                arguments: call.arguments.clone(),
                            },
                        })
                        .collect::<Vec<_>>(),
                );
            }
            ChatCompletionRequestMessage::Assistant(args.build()?)
        }
        Message::Tool(result) => ChatCompletionRequestMessage::Tool(
            ChatCompletionRequestToolMessageArgs::default()
                .tool_call_id(result.call_id.as_str())
                .content(result.content.as_str())
                .build()?,
        ),
    };
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{Conversation, ToolInvocationResult};
    use crate::registry::Registry;
    use serde_json::{json, Value};

    fn brain() -> Brain {
        let settings = Settings::from_lookup(|key| match key {
            "OPENAI_API_KEY" => Some("sk-test".to_string()),
            "OPENAI_MODEL" => Some("test-model".to_string()),
            _ => None,
        });
        Brain::new(&settings)
    }

    fn wire(brain: &Brain, request: ChatRequest<'_>) -> Value {
        serde_json::to_value(brain.build_request(request).unwrap()).unwrap()
    }

    #[test]
    fn first_round_offers_tools_with_auto_choice() {
        let brain = brain();
        let convo = Conversation::new("brief me");
        let catalog = Registry::catalog();

        let body = wire(&brain, ChatRequest { messages: convo.messages(), tools: &catalog });

        assert_eq!(body["model"], "test-model");
        assert_eq!(body["tool_choice"], "auto");
        assert_eq!(body["tools"][0]["type"], "function");
        assert_eq!(body["tools"][0]["function"]["name"], "get_weather");
        assert_eq!(body["tools"][1]["function"]["name"], "get_top_headlines");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "brief me");
    }

    #[test]
    fn second_round_carries_calls_and_results_without_tools() {
        let brain = brain();
        let mut convo = Conversation::new("brief me");
        convo.push_assistant(
            None,
            vec![ToolInvocationRequest {
                id: "call_w".to_string(),
                name: "get_weather".to_string(),
                arguments: r#"{"city":"Paris"}"#.to_string(),
            }],
        );
        convo
            .push_tool_result(ToolInvocationResult {
                call_id: "call_w".to_string(),
                name: "get_weather".to_string(),
                content: r#"{"city":"Paris"}"#.to_string(),
            })
            .unwrap();

        let body = wire(&brain, ChatRequest { messages: convo.messages(), tools: &[] });

        assert!(body.get("tools").is_none());
        assert!(body.get("tool_choice").is_none());

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(messages[1]["tool_calls"][0]["id"], "call_w");
        assert_eq!(messages[1]["tool_calls"][0]["function"]["arguments"], json!(r#"{"city":"Paris"}"#));
        assert_eq!(messages[2]["role"], "tool");
        assert_eq!(messages[2]["tool_call_id"], "call_w");
    }
}
