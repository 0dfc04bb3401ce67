use crate::ClientResult;
use crate::aggregate::{Transaction, aggregate_by_category, count_by_category};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    CategoriesData, CategoryCountRow, CategoryRows, CategoryStatRow, RankBy,
};
use crate::source::load_transactions;

#[derive(Debug, Default)]
pub struct CategoriesRunOptions {
    pub path: Option<String>,
    pub rank_by: RankBy,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<String>, rank_by: RankBy) -> ClientResult<SuccessEnvelope> {
    run_with_options(CategoriesRunOptions {
        path,
        rank_by,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: CategoriesRunOptions) -> ClientResult<SuccessEnvelope> {
    let loaded = load_transactions(options.path, options.stdin_override)?;
    let data = CategoriesData {
        rank_by: options.rank_by,
        total_count: loaded.transactions.len(),
        total_amount: summable_total(&loaded.transactions),
        rows: rank_rows(&loaded.transactions, options.rank_by),
        source: loaded.source,
        unparsed_amounts: loaded.unparsed_amounts,
    };

    success("categories", data)
}

pub fn rank_rows(transactions: &[Transaction], rank_by: RankBy) -> CategoryRows {
    match rank_by {
        RankBy::Spend => CategoryRows::Spend(
            aggregate_by_category(transactions)
                .into_iter()
                .map(|stat| CategoryStatRow {
                    share: stat.share_of_count(),
                    stat,
                })
                .collect(),
        ),
        RankBy::Count => CategoryRows::Count(
            count_by_category(transactions)
                .into_iter()
                .map(|count| CategoryCountRow {
                    share: count.share_of_count(),
                    count,
                })
                .collect(),
        ),
    }
}

pub(crate) fn summable_total(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::summable_amount).sum()
}
