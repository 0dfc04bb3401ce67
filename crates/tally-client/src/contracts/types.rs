use serde::Serialize;

use crate::aggregate::{CategoryCount, CategoryStat};
use crate::format::{FormattedDateTime, TransactionStatus};
use crate::source::SourceInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    #[default]
    Spend,
    Count,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStatRow {
    #[serde(flatten)]
    pub stat: CategoryStat,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCountRow {
    #[serde(flatten)]
    pub count: CategoryCount,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CategoryRows {
    Spend(Vec<CategoryStatRow>),
    Count(Vec<CategoryCountRow>),
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesData {
    pub rank_by: RankBy,
    pub source: SourceInfo,
    pub total_count: usize,
    pub total_amount: f64,
    pub unparsed_amounts: Vec<usize>,
    pub rows: CategoryRows,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub name: Option<String>,
    pub category: String,
    /// `None` when the source amount was not numeric.
    pub amount: Option<f64>,
    pub amount_display: String,
    pub date: Option<FormattedDateTime>,
    pub status: Option<TransactionStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsData {
    pub source: SourceInfo,
    pub total_count: usize,
    pub total_amount: f64,
    pub total_amount_display: String,
    pub rows: Vec<TransactionRow>,
}
