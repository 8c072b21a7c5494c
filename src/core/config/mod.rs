//! Configuration models for tool assembly.
//!
//! Deserializable descriptions of a tool and its AI client backend. Loading
//! these from files is the embedding application's job; this module only
//! defines the shapes and validates them.

pub mod validation;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::errors::ToolError;
use crate::tool::ToolKind;
use self::validation::require_non_empty;

const REDACT_PLACEHOLDER: &str = "****";

/// Connection settings for an AI client backend.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AiClientProperties {
    /// Provider identifier (e.g. "openai", "ollama").
    pub provider: String,
    /// Model name as the provider knows it.
    pub model: String,
    /// API key, when the provider needs one. Masked in debug output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl fmt::Debug for AiClientProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiClientProperties")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACT_PLACEHOLDER))
            .finish()
    }
}

/// Assembly-time description of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolProperties {
    /// Name the tool is registered under.
    pub name: String,
    /// Human-readable description of what the tool is for.
    pub role: String,
    /// Dispatch mode the tool runs in.
    pub kind: ToolKind,
    /// AI client backend settings.
    pub ai_client: AiClientProperties,
    /// Embedding model name, for assemblers that wire up a vector database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings: Option<String>,
}

impl ToolProperties {
    /// Trim whitespace on all string fields and reject empty values.
    pub fn validate(&mut self) -> Result<(), ToolError> {
        require_non_empty("name", &mut self.name)?;
        require_non_empty("role", &mut self.role)?;
        require_non_empty("ai_client.provider", &mut self.ai_client.provider)?;
        require_non_empty("ai_client.model", &mut self.ai_client.model)?;
        if let Some(api_key) = self.ai_client.api_key.as_mut() {
            require_non_empty("ai_client.api_key", api_key)?;
        }
        if let Some(embeddings) = self.embeddings.as_mut() {
            require_non_empty("embeddings", embeddings)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties() -> ToolProperties {
        ToolProperties {
            name: "qa".to_string(),
            role: "answers product questions".to_string(),
            kind: ToolKind::Rag,
            ai_client: AiClientProperties {
                provider: "openai".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key: Some("sk-secret".to_string()),
            },
            embeddings: Some("text-embedding-3-small".to_string()),
        }
    }

    #[test]
    fn validate_trims_string_fields() {
        let mut props = properties();
        props.name = "  qa  ".to_string();
        props.ai_client.model = " gpt-4o-mini ".to_string();
        props.validate().unwrap();
        assert_eq!(props.name, "qa");
        assert_eq!(props.ai_client.model, "gpt-4o-mini");
    }

    #[test]
    fn validate_rejects_blank_role() {
        let mut props = properties();
        props.role = "   ".to_string();
        assert!(matches!(
            props.validate(),
            Err(ToolError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_api_key() {
        let mut props = properties();
        props.ai_client.api_key = Some(String::new());
        assert!(matches!(
            props.validate(),
            Err(ToolError::InvalidConfig(_))
        ));
    }

    #[test]
    fn debug_output_masks_api_key() {
        let rendered = format!("{:?}", properties().ai_client);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("****"));
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = concat!(
            "name: qa\n",
            "role: answers product questions\n",
            "kind: rag\n",
            "ai_client:\n",
            "  provider: openai\n",
            "  model: gpt-4o-mini\n",
            "embeddings: text-embedding-3-small\n",
        );
        let props: ToolProperties = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(props.kind, ToolKind::Rag);
        assert_eq!(props.ai_client.provider, "openai");
        assert_eq!(props.ai_client.api_key, None);
        assert_eq!(props.embeddings.as_deref(), Some("text-embedding-3-small"));
    }
}
