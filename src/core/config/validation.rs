use crate::core::errors::ToolError;

/// Trim `value` in place and reject the field when nothing remains.
pub fn require_non_empty(field: &str, value: &mut String) -> Result<(), ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::invalid_config(format!(
            "field '{field}' must not be empty"
        )));
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_in_place() {
        let mut value = "  gpt-4o  ".to_string();
        require_non_empty("model", &mut value).unwrap();
        assert_eq!(value, "gpt-4o");
    }

    #[test]
    fn rejects_whitespace_only() {
        let mut value = "   \t".to_string();
        let err = require_non_empty("name", &mut value).unwrap_err();
        assert!(err.to_string().contains("'name'"));
    }
}
