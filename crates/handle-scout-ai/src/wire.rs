//! Request and response bodies of the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /v1beta/models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Schema,
    pub temperature: f32,
    pub top_p: f32,
}

/// Subset of the OpenAPI schema object understood by the structured-output mode
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

impl Schema {
    /// `{ usernames: array<string> }`
    pub fn usernames() -> Self {
        let item = Schema {
            kind: SchemaType::String,
            properties: None,
            items: None,
            description: Some(
                "A suggested available username between 3 and 7 characters.".to_string(),
            ),
        };
        let array = Schema {
            kind: SchemaType::Array,
            properties: None,
            items: Some(Box::new(item)),
            description: None,
        };

        Schema {
            kind: SchemaType::Object,
            properties: Some(BTreeMap::from([("usernames".to_string(), array)])),
            items: None,
            description: None,
        }
    }
}

impl GenerateContentRequest {
    /// Single-turn user prompt constrained to the usernames JSON schema
    pub fn usernames(prompt: String, temperature: f32, top_p: f32) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Schema::usernames(),
                temperature,
                top_p,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, empty if there is none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
