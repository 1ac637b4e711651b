use serde_json::{json, Map, Value};

use crate::conversation::ToolInvocationRequest;
use crate::error::BriefingError;

// What the model sees for each tool: name, description, JSON Schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// The closed set of tools the briefing exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Weather,
    Headlines,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::Weather, ToolKind::Headlines];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Weather => "get_weather",
            ToolKind::Headlines => "get_top_headlines",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn descriptor(self) -> ToolDescriptor {
        let (description, parameters) = match self {
            ToolKind::Weather => (
                "Get the weather for a given city.",
                json!({
                    "type": "object",
                    "properties": {
                        "city": { "type": "string" }
                    },
                    "required": ["city"],
                }),
            ),
            ToolKind::Headlines => (
                "Get the top news headlines.",
                json!({
                    "type": "object",
                    "properties": {},
                    "required": [],
                }),
            ),
        };

        ToolDescriptor {
            name: self.name().to_string(),
            description: description.to_string(),
            parameters,
        }
    }
}

/// A request resolved to a known tool with its typed arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    Weather { city: String },
    Headlines,
}

impl ToolCall {
    pub fn parse(request: &ToolInvocationRequest) -> Result<Self, BriefingError> {
        let kind = ToolKind::from_name(&request.name)
            .ok_or_else(|| BriefingError::UnknownTool(request.name.clone()))?;

        let malformed = |reason: String| BriefingError::MalformedArguments {
            tool: request.name.clone(),
            reason,
        };
        let args: Map<String, Value> =
            serde_json::from_str(&request.arguments).map_err(|e| malformed(e.to_string()))?;

        match kind {
            ToolKind::Weather => {
                let city = args
                    .get("city")
                    .and_then(Value::as_str)
                    .filter(|city| !city.is_empty())
                    .ok_or_else(|| malformed("`city` must be a non-empty string".to_string()))?;
                Ok(ToolCall::Weather {
                    city: city.to_string(),
                })
            }
            ToolKind::Headlines => Ok(ToolCall::Headlines),
        }
    }
}

pub struct Registry;

impl Registry {
    /// Every tool offered to the model in round one.
    pub fn catalog() -> Vec<ToolDescriptor> {
        ToolKind::ALL.into_iter().map(ToolKind::descriptor).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, arguments: &str) -> ToolInvocationRequest {
        ToolInvocationRequest {
            id: "call_1".to_string(),
            name: name.to_string(),
            arguments: arguments.to_string(),
        }
    }

    #[test]
    fn catalog_lists_both_tools() {
        let catalog = Registry::catalog();
        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["get_weather", "get_top_headlines"]);
        assert_eq!(catalog[0].parameters["required"], json!(["city"]));
    }

    #[test]
    fn names_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ToolKind::from_name("get_stock_price"), None);
    }

    #[test]
    fn parses_weather_city() {
        let call = ToolCall::parse(&request("get_weather", r#"{"city":"Paris"}"#)).unwrap();
        assert_eq!(call, ToolCall::Weather { city: "Paris".to_string() });
    }

    #[test]
    fn headlines_ignore_extra_arguments() {
        let call = ToolCall::parse(&request("get_top_headlines", r#"{"topic":"sports"}"#)).unwrap();
        assert_eq!(call, ToolCall::Headlines);
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = ToolCall::parse(&request("get_weather", "{city: Paris")).unwrap_err();
        assert!(matches!(err, BriefingError::MalformedArguments { tool, .. } if tool == "get_weather"));
    }

    #[test]
    fn missing_city_is_malformed() {
        let err = ToolCall::parse(&request("get_weather", "{}")).unwrap_err();
        match err {
            BriefingError::MalformedArguments { reason, .. } => assert!(reason.contains("city")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn empty_city_is_malformed() {
        let err = ToolCall::parse(&request("get_weather", r#"{"city":""}"#)).unwrap_err();
        assert!(matches!(err, BriefingError::MalformedArguments { .. }));
    }

    #[test]
    fn non_string_city_is_malformed() {
        let err = ToolCall::parse(&request("get_weather", r#"{"city":3}"#)).unwrap_err();
        assert!(matches!(err, BriefingError::MalformedArguments { .. }));
    }

    #[test]
    fn non_object_arguments_are_malformed() {
        for tool in ["get_weather", "get_top_headlines"] {
            let err = ToolCall::parse(&request(tool, "[1]")).unwrap_err();
            assert!(matches!(err, BriefingError::MalformedArguments { tool: t, .. } if t == tool));
        }
    }

    #[test]
    fn unknown_tool_is_rejected() {
        let err = ToolCall::parse(&request("rm_rf", "{}")).unwrap_err();
        assert!(matches!(err, BriefingError::UnknownTool(name) if name == "rm_rf"));
    }
}
