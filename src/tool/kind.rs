use std::fmt;

use serde::{Deserialize, Serialize};

/// Processing mode of a [`Tool`](super::Tool). Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Retrieve document chunks first, then answer with them as context.
    Rag,
    /// Answer directly from the query alone.
    Prompt,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Rag => f.write_str("rag"),
            ToolKind::Prompt => f.write_str("prompt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_snake_case_tags() {
        assert_eq!(serde_json::to_string(&ToolKind::Rag).unwrap(), "\"rag\"");
        let kind: ToolKind = serde_json::from_str("\"prompt\"").unwrap();
        assert_eq!(kind, ToolKind::Prompt);
    }
}
