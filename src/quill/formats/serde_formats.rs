//! JSON and YAML dumps of the token tree
//!
//! Each token serializes as `kind`, `raw`, `text`, `children` and `properties`.

use super::registry::{FormatError, Formatter};
use crate::quill::token::Token;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::Serialize(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "Pretty printed JSON token tree"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        serde_yaml::to_string(tokens).map_err(|e| FormatError::Serialize(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "YAML token tree"
    }
}
