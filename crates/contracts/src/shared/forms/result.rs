use serde::{Deserialize, Serialize};

use super::outcome::RequestOutcome;

/// Message shown to the user when an unexpected failure was swallowed.
/// The real error goes to the log only.
const INTERNAL_ERROR: &str = "Internal error";

/// Error attached to a single named input field, rendered inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_name: String,
    pub error: String,
}

/// Titled message rendered as an alert banner or a toast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMessage {
    pub title: String,
    pub error: String,
}

/// Uniform result every form submission handler hands to the UI.
///
/// Any combination of `field_errors`, `alert_msgs` and `toast_msgs` may be
/// populated at once; an empty sequence is never emitted, the field is
/// omitted instead. A failure carrying none of them is still a valid,
/// displayable (empty) state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_msgs: Option<Vec<UserMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toast_msgs: Option<Vec<UserMessage>>,
}

impl ActionResult {
    /// Normalize an endpoint reply into a displayable result.
    ///
    /// On success only the optional redirect intent is carried over. On
    /// failure the error list is partitioned by `field_name` into inline
    /// field errors and form-level alerts (alerts take the caller's `title`),
    /// and a declared `msg` becomes exactly one toast.
    pub fn from_outcome(
        outcome: RequestOutcome,
        title: &str,
        redirect_on_success: Option<&str>,
    ) -> Self {
        if outcome.success {
            return Self {
                success: true,
                redirect: redirect_on_success.map(str::to_string),
                ..Self::default()
            };
        }

        let mut field_errors = Vec::new();
        let mut alert_msgs = Vec::new();
        for err in outcome.errors.unwrap_or_default() {
            match err.field_name {
                Some(field_name) => field_errors.push(FieldError {
                    field_name,
                    error: err.error,
                }),
                None => alert_msgs.push(UserMessage {
                    title: title.to_string(),
                    error: err.error,
                }),
            }
        }

        let mut toast_msgs = Vec::new();
        if let Some(msg) = outcome.msg {
            toast_msgs.push(UserMessage {
                title: title.to_string(),
                error: msg,
            });
        }

        Self {
            success: false,
            redirect: None,
            field_errors: (!field_errors.is_empty()).then_some(field_errors),
            alert_msgs: (!alert_msgs.is_empty()).then_some(alert_msgs),
            toast_msgs: (!toast_msgs.is_empty()).then_some(toast_msgs),
        }
    }

    /// Convert an unexpected failure into a displayable result.
    ///
    /// The original error is reported to the log and never reaches the
    /// user-facing value.
    pub fn from_exception(error: &anyhow::Error, title: &str) -> Self {
        log::error!("{}: {:#}", title, error);
        Self {
            success: false,
            toast_msgs: Some(vec![UserMessage {
                title: title.to_string(),
                error: INTERNAL_ERROR.to_string(),
            }]),
            ..Self::default()
        }
    }

    /// Inline error for a named field, if any.
    pub fn field_error(&self, field_name: &str) -> Option<&str> {
        self.field_errors
            .as_deref()?
            .iter()
            .find(|e| e.field_name == field_name)
            .map(|e| e.error.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    const TITLE: &str = "Save Failed";

    #[test]
    fn test_success_without_redirect() {
        let result = ActionResult::from_outcome(RequestOutcome::ok(), TITLE, None);
        assert!(result.success);
        assert_eq!(result.redirect, None);
        assert!(result.field_errors.is_none());
        assert!(result.alert_msgs.is_none());
        assert!(result.toast_msgs.is_none());
    }

    #[test]
    fn test_success_with_redirect() {
        let result = ActionResult::from_outcome(RequestOutcome::ok(), TITLE, Some("/home"));
        assert!(result.success);
        assert_eq!(result.redirect.as_deref(), Some("/home"));
    }

    #[test]
    fn test_field_errors_only() {
        let outcome = RequestOutcome::failed().with_field_error("email", "required");
        let result = ActionResult::from_outcome(outcome, TITLE, None);

        assert!(!result.success);
        assert_eq!(
            result.field_errors,
            Some(vec![FieldError {
                field_name: "email".into(),
                error: "required".into(),
            }])
        );
        assert!(result.alert_msgs.is_none());
        assert!(result.toast_msgs.is_none());
        assert_eq!(result.field_error("email"), Some("required"));
        assert_eq!(result.field_error("password"), None);
    }

    #[test]
    fn test_form_error_and_msg_together() {
        let outcome = RequestOutcome::failed()
            .with_form_error("server down")
            .with_msg("retry later");
        let result = ActionResult::from_outcome(outcome, TITLE, None);

        assert_eq!(
            result.alert_msgs,
            Some(vec![UserMessage {
                title: TITLE.into(),
                error: "server down".into(),
            }])
        );
        assert_eq!(
            result.toast_msgs,
            Some(vec![UserMessage {
                title: TITLE.into(),
                error: "retry later".into(),
            }])
        );
        assert!(result.field_errors.is_none());
    }

    #[test]
    fn test_partition_keeps_all_three_groups() {
        let outcome = RequestOutcome::failed()
            .with_field_error("email", "required")
            .with_form_error("quota exceeded")
            .with_msg("changes not saved");
        let result = ActionResult::from_outcome(outcome, TITLE, None);

        assert!(result.field_errors.is_some());
        assert!(result.alert_msgs.is_some());
        assert!(result.toast_msgs.is_some());
    }

    #[test]
    fn test_bare_failure_has_no_auxiliary_fields() {
        let result = ActionResult::from_outcome(RequestOutcome::failed(), TITLE, None);
        assert!(!result.success);
        assert!(result.redirect.is_none());
        assert!(result.field_errors.is_none());
        assert!(result.alert_msgs.is_none());
        assert!(result.toast_msgs.is_none());

        // Empty partitions are omitted from the wire, not sent as [].
        let serialized = serde_json::to_value(&result).unwrap();
        assert_eq!(serialized, serde_json::json!({ "success": false }));
    }

    #[test]
    fn test_exception_hides_error_detail() {
        let result = ActionResult::from_exception(&anyhow!("boom"), TITLE);

        assert!(!result.success);
        assert_eq!(
            result.toast_msgs,
            Some(vec![UserMessage {
                title: TITLE.into(),
                error: "Internal error".into(),
            }])
        );

        let serialized = serde_json::to_string(&result).unwrap();
        assert!(!serialized.contains("boom"));
    }
}
