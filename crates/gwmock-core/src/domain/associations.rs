//! Capabilities attached to a server: tools, resources and prompts.
//!
//! The mock does not track associations per server. Every existing server
//! reports the same fixed reference collections.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// A tool exposed through a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for input parameters.
    pub input_schema: serde_json::Value,
    pub enabled: bool,
}

/// A resource exposed through a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub uri: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// One argument of a prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptArgument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
}

/// A prompt exposed through a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
}

/// The three association collections reported for a server.
#[derive(Debug, Clone, PartialEq)]
pub struct Associations {
    pub tools: Vec<Tool>,
    pub resources: Vec<Resource>,
    pub prompts: Vec<Prompt>,
}

impl Associations {
    /// The fixed reference data returned for every server.
    #[must_use]
    pub fn reference() -> Self {
        let tools = vec![
            Tool {
                id: "tool-1".to_string(),
                name: "get_weather".to_string(),
                description: Some("Get the current weather for a location".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": { "location": { "type": "string" } },
                    "required": ["location"]
                }),
                enabled: true,
            },
            Tool {
                id: "tool-2".to_string(),
                name: "search_docs".to_string(),
                description: Some("Full-text search over indexed documents".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "query": { "type": "string" },
                        "limit": { "type": "integer", "minimum": 1 }
                    },
                    "required": ["query"]
                }),
                enabled: true,
            },
        ];

        let resources = vec![
            Resource {
                id: "resource-1".to_string(),
                uri: "file:///docs/readme.md".to_string(),
                name: "readme".to_string(),
                description: Some("Project readme".to_string()),
                mime_type: Some("text/markdown".to_string()),
            },
            Resource {
                id: "resource-2".to_string(),
                uri: "config://app/settings".to_string(),
                name: "settings".to_string(),
                description: Some("Application settings".to_string()),
                mime_type: Some("application/json".to_string()),
            },
        ];

        let prompts = vec![Prompt {
            id: "prompt-1".to_string(),
            name: "summarize".to_string(),
            description: Some("Summarize a block of text".to_string()),
            arguments: vec![
                PromptArgument {
                    name: "text".to_string(),
                    description: Some("Text to summarize".to_string()),
                    required: true,
                },
                PromptArgument {
                    name: "style".to_string(),
                    description: Some("bullet or prose".to_string()),
                    required: false,
                },
            ],
        }];

        Self {
            tools,
            resources,
            prompts,
        }
    }
}
