use serde::{Deserialize, Serialize};

/// Raw reply of a form endpoint, before UI normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<OutcomeError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// One error reported by the backend. `field_name` is absent for errors that
/// concern the form as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub error: String,
}

impl RequestOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: None,
            msg: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            errors: None,
            msg: None,
        }
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    pub fn with_field_error(mut self, field_name: impl Into<String>, error: impl Into<String>) -> Self {
        self.errors.get_or_insert_with(Vec::new).push(OutcomeError {
            field_name: Some(field_name.into()),
            error: error.into(),
        });
        self
    }

    pub fn with_form_error(mut self, error: impl Into<String>) -> Self {
        self.errors.get_or_insert_with(Vec::new).push(OutcomeError {
            field_name: None,
            error: error.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal_outcome() {
        let outcome: RequestOutcome = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(outcome.success);
        assert!(outcome.errors.is_none());
        assert!(outcome.msg.is_none());
    }

    #[test]
    fn test_builders_accumulate_errors() {
        let outcome = RequestOutcome::failed()
            .with_field_error("email", "required")
            .with_form_error("server down")
            .with_msg("retry later");

        let errors = outcome.errors.as_ref().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field_name.as_deref(), Some("email"));
        assert_eq!(errors[1].field_name, None);
        assert_eq!(outcome.msg.as_deref(), Some("retry later"));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let serialized = serde_json::to_value(RequestOutcome::ok()).unwrap();
        assert_eq!(serialized, json!({ "success": true }));
    }
}
