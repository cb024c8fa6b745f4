use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing url or property_id";
pub const SUCCESS_MESSAGE: &str = "Scraping successful";

/// Body of `POST /api/scrape`. Fields are kept as raw JSON values: any
/// falsy value (absent, `null`, `false`, `0`, `""`) fails validation, any
/// other value is accepted as-is.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub property_id: Option<Value>,
}

impl ScrapeRequest {
    /// Returns `(url, property_id)` as text when both are truthy.
    pub fn required_fields(&self) -> Result<(String, String)> {
        match (self.url.as_ref(), self.property_id.as_ref()) {
            (Some(url), Some(property_id)) if is_truthy(url) && is_truthy(property_id) => {
                Ok((as_text(url), as_text(property_id)))
            }
            _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ScrapeResponse {
    pub message: String,
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
