use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripRequest {
    pub destination: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_index: Option<u32>,
}

impl TripRequest {
    pub fn new(destination: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            duration: duration.into(),
            when: None,
            budget: None,
            interests: None,
            user_input: None,
            session_id: None,
            user_id: None,
            turn_index: None,
        }
    }

    /// Reject requests whose required fields are blank.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.destination.trim().is_empty() {
            return Err(ApiError::Validation("destination cannot be empty".to_string()));
        }
        if self.duration.trim().is_empty() {
            return Err(ApiError::Validation("duration cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// A tool invocation made while planning, reported back to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    pub agent: String,
    pub tool: String,
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripResponse {
    pub result: String,
    pub tool_calls: Vec<ToolCall>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn optional_fields_default_and_unknown_fields_are_ignored() {
        let request: TripRequest = serde_json::from_value(json!({
            "destination": "Prague",
            "duration": "2 days",
            "turn_index": 0,
            "party_size": 4
        }))
        .unwrap();
        assert_eq!(request.destination, "Prague");
        assert_eq!(request.turn_index, Some(0));
        assert_eq!(request.budget, None);
    }

    #[test]
    fn required_fields_are_required() {
        assert!(serde_json::from_value::<TripRequest>(json!({"duration": "3 days"})).is_err());
        assert!(serde_json::from_value::<TripRequest>(json!({"destination": "Paris"})).is_err());
    }

    #[test]
    fn blank_required_fields_fail_validation() {
        assert!(TripRequest::new("Kyoto", "3 days").validate().is_ok());
        assert!(matches!(
            TripRequest::new("  ", "3 days").validate(),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(TripRequest::new("Kyoto", "").validate(), Err(ApiError::Validation(_))));
    }
}
