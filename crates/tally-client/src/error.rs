use serde_json::{Value, json};
use thiserror::Error;

use crate::auth_form::FieldIssue;

pub(crate) const INPUT_HELP_COMMAND: &str = "tally categories --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `tally {cmd} --help` for usage."),
            None => "Run `tally --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    /// Input was readable but is not one of the accepted document shapes.
    pub fn invalid_input_format(message: &str, received_format: &str) -> Self {
        Self::new(
            "invalid_input_format",
            message,
            vec![
                "Provide a JSON array of transaction objects or CSV with a header row.".to_string(),
                format!("Run `{INPUT_HELP_COMMAND}` to confirm field requirements."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn csv_missing_amount_header(actual_headers: Vec<String>) -> Self {
        Self::new(
            "invalid_input_format",
            "CSV headers must include an `amount` column.",
            vec![
                "Add an `amount` header; `category`, `name` and `date` are optional.".to_string(),
                format!("Run `{INPUT_HELP_COMMAND}` to review accepted columns."),
            ],
        )
        .with_data(json!({
            "received_format": "csv",
            "required_headers": ["amount"],
            "optional_headers": ["category", "name", "date"],
            "actual_headers": actual_headers,
        }))
    }

    pub fn invalid_auth_form(issues: Vec<FieldIssue>) -> Self {
        let fields = issues
            .iter()
            .map(|issue| issue.field.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        Self::new(
            "invalid_auth_form",
            &format!("Form fields need fixes: {fields}."),
            issues
                .iter()
                .map(|issue| format!("`{}` {}.", issue.field, issue.message))
                .collect(),
        )
        .with_data(json!({
            "issues": issues,
        }))
    }

    pub fn bank_link_no_accounts(item_id: &str) -> Self {
        Self::new(
            "bank_link_no_accounts",
            &format!("Linked item `{item_id}` returned no accounts."),
            vec![
                "Reopen the bank link flow and select at least one account.".to_string(),
            ],
        )
        .with_data(json!({
            "item_id": item_id,
        }))
    }

    pub fn funding_source_missing(account_id: &str) -> Self {
        Self::new(
            "funding_source_missing",
            &format!("Payment rail returned no funding source for account `{account_id}`."),
            vec![
                "Retry linking the account.".to_string(),
                "Confirm the payment rail customer is verified.".to_string(),
            ],
        )
    }

    pub fn provider_request_failed(step: &str, detail: &str) -> Self {
        Self::new(
            "provider_request_failed",
            &format!("Provider request `{step}` failed: {detail}"),
            vec!["Retry the bank link flow.".to_string()],
        )
        .with_data(json!({
            "step": step,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_")
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
