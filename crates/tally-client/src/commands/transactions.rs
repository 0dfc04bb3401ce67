use chrono::NaiveDateTime;

use crate::ClientResult;
use crate::commands::categories::summable_total;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{TransactionRow, TransactionsData};
use crate::format::{format_amount, format_date_time, transaction_status};
use crate::source::load_transactions;

#[derive(Debug)]
pub struct TransactionsRunOptions {
    pub path: Option<String>,
    /// Reference point for the processing/success status.
    pub now: NaiveDateTime,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<String>, now: NaiveDateTime) -> ClientResult<SuccessEnvelope> {
    run_with_options(TransactionsRunOptions {
        path,
        now,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: TransactionsRunOptions) -> ClientResult<SuccessEnvelope> {
    let loaded = load_transactions(options.path, options.stdin_override)?;
    let total_amount = summable_total(&loaded.transactions);

    let rows = loaded
        .transactions
        .iter()
        .map(|transaction| TransactionRow {
            name: transaction.name.clone(),
            category: transaction.category_label().to_string(),
            amount: Some(transaction.amount).filter(|amount| amount.is_finite()),
            amount_display: format_amount(transaction.amount),
            date: transaction.date.as_ref().map(format_date_time),
            status: transaction
                .date
                .as_ref()
                .map(|date| transaction_status(date, &options.now)),
        })
        .collect::<Vec<TransactionRow>>();

    let data = TransactionsData {
        source: loaded.source,
        total_count: rows.len(),
        total_amount,
        total_amount_display: format_amount(total_amount),
        rows,
    };

    success("transactions", data)
}
