use crate::error::BriefingError;

/// A function call the model asked for. `arguments` is the JSON-encoded
/// string exactly as the model sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocationRequest {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

/// Output of one local tool execution, tied back to its request.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocationResult {
    pub call_id: String,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    User(String),
    Assistant {
        content: Option<String>,
        tool_calls: Vec<ToolInvocationRequest>,
    },
    Tool(ToolInvocationResult),
}

/// Append-only message log for a single run.
///
/// Messages go in through the `push_*` methods and are never reordered or
/// edited. A tool result is only accepted if its call id appears in the most
/// recent assistant message.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::User(prompt.into())],
        }
    }

    pub fn push_assistant(&mut self, content: Option<String>, tool_calls: Vec<ToolInvocationRequest>) {
        self.messages.push(Message::Assistant { content, tool_calls });
    }

    pub fn push_tool_result(&mut self, result: ToolInvocationResult) -> Result<(), BriefingError> {
        if !self.is_requested(&result.call_id) {
            return Err(BriefingError::UnmatchedToolResult(result.call_id));
        }
        self.messages.push(Message::Tool(result));
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True when the most recent assistant message requested `call_id`.
    fn is_requested(&self, call_id: &str) -> bool {
        self.messages
            .iter()
            .rev()
            .find_map(|m| match m {
                Message::Assistant { tool_calls, .. } => Some(tool_calls),
                _ => None,
            })
            .is_some_and(|calls| calls.iter().any(|c| c.id == call_id))
    }
}
