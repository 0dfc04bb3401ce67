mod input;
mod parse;

use serde::Serialize;

use crate::aggregate::Transaction;
use crate::error::INPUT_HELP_COMMAND;
use crate::{ClientError, ClientResult};

pub use input::SourceKind;
pub use parse::SourceFormat;

#[derive(Debug, Clone)]
pub struct LoadedTransactions {
    pub transactions: Vec<Transaction>,
    pub source: SourceInfo,
    /// 1-based row numbers whose `amount` was missing or not a finite number.
    pub unparsed_amounts: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub format: String,
}

/// Reads transactions from `path` (or stdin for `-`/no path).
///
/// A `null` document loads as an empty list so downstream aggregation never
/// sees an absent input.
pub fn load_transactions(
    path: Option<String>,
    stdin_override: Option<String>,
) -> ClientResult<LoadedTransactions> {
    let resolved = input::resolve_source(path, stdin_override)?;
    let (format, rows) = parse::parse_source(&resolved.content)?;
    tracing::debug!(
        source = resolved.source_kind.as_str(),
        format = format.as_str(),
        rows = rows.len(),
        "loaded transaction source"
    );

    let unparsed_amounts = rows
        .iter()
        .filter(|row| !row.amount_parsed)
        .map(|row| row.row)
        .collect::<Vec<usize>>();
    if !unparsed_amounts.is_empty() {
        tracing::warn!(
            count = unparsed_amounts.len(),
            "some amounts were not numeric and will count as zero"
        );
    }

    Ok(LoadedTransactions {
        transactions: rows.into_iter().map(|row| row.transaction).collect(),
        source: SourceInfo {
            kind: resolved.source_kind.as_str().to_string(),
            path: resolved.source_ref,
            format: format.as_str().to_string(),
        },
        unparsed_amounts,
    })
}

pub(crate) fn invalid_input_error(message: &str) -> ClientError {
    ClientError::invalid_argument_with_recovery(
        message,
        vec![
            "Provide a JSON array or CSV input via path or stdin.".to_string(),
            format!("Run `{INPUT_HELP_COMMAND}` to confirm field requirements."),
        ],
    )
}
