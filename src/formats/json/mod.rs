//! JSON format implementation (serialization only)
//!
//! Serializes the record through serde: absent fields are omitted,
//! camelCase keys, nameless ability entries keep `"name": null`, and
//! not-a-number scores serialize as `null`.

use crate::error::FormatError;
use crate::format::Format;
use crate::statblock::StatBlock;

/// JSON output format
#[derive(Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON record (export only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, block: &StatBlock) -> Result<String, FormatError> {
        serde_json::to_string_pretty(block).map_err(|e| {
            FormatError::SerializationError(format!("JSON serialization failed: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statblock::{Ability, Score};

    #[test]
    fn test_json_format_capabilities() {
        let format = JsonFormat;
        assert_eq!(format.name(), "json");
        assert!(!format.supports_parsing());
        assert!(format.supports_serialization());
    }

    #[test]
    fn test_serialized_record_omits_absent_fields() {
        let block = StatBlock {
            name: Some("Bog Howler".to_string()),
            hp: Some(Score::NotANumber),
            actions: Some(vec![Ability {
                name: None,
                description: "It howls.".to_string(),
            }]),
            ..Default::default()
        };
        let text = JsonFormat.serialize(&block).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["name"], "Bog Howler");
        assert_eq!(object["hp"], serde_json::Value::Null);
        assert_eq!(object["actions"][0]["name"], serde_json::Value::Null);
        assert_eq!(object["actions"][0]["description"], "It howls.");
    }
}
