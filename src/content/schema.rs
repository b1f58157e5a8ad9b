//! JSON Schema validation for content documents

use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;

/// Compiled schema for one content document
pub struct ContentSchema {
    validator: Validator,
}

impl ContentSchema {
    /// Compile the schema embedded in the binary
    pub fn embedded() -> Result<Self> {
        let schema_str = include_str!("../../docs/content.schema.json");
        let schema: Value = serde_json::from_str(schema_str)
            .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))?;

        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))?;

        Ok(Self { validator })
    }

    /// Validate a document, naming `source` in the error
    pub fn validate(&self, source: &str, document: &Value) -> Result<()> {
        let error_messages: Vec<String> = self
            .validator
            .iter_errors(document)
            .map(|e| format!("  - {e}"))
            .collect();

        if !error_messages.is_empty() {
            return Err(anyhow!(
                "Content document '{source}' does not match the schema:\n{}",
                error_messages.join("\n")
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_each_document_kind() {
        let schema = ContentSchema::embedded().unwrap();
        schema
            .validate("me", &json!({"type": "document", "text": "hi"}))
            .unwrap();
        schema
            .validate(
                "blog",
                &json!({"type": "collection", "entries": {"post1.txt": {"title": "x"}}}),
            )
            .unwrap();
        schema
            .validate("site", &json!({"type": "site", "user": "a", "host": "b"}))
            .unwrap();
    }

    #[test]
    fn accepts_unknown_entry_fields() {
        let schema = ContentSchema::embedded().unwrap();
        schema
            .validate(
                "blog",
                &json!({"type": "collection", "entries": {"post.txt": {"title": "Blog", "year": "2025"}}}),
            )
            .unwrap();
    }

    #[test]
    fn rejects_non_text_entry_fields() {
        let schema = ContentSchema::embedded().unwrap();
        let err = schema
            .validate(
                "blog",
                &json!({"type": "collection", "entries": {"post1.txt": {"title": 5}}}),
            )
            .unwrap_err();
        assert!(err.to_string().contains("'blog'"));
    }

    #[test]
    fn rejects_document_without_text() {
        let schema = ContentSchema::embedded().unwrap();
        assert!(schema.validate("me", &json!({"type": "document"})).is_err());
    }
}
