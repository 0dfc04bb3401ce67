use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{CategoryCount, CategoryStat, Transaction};

#[derive(Debug, Clone)]
struct CategoryGroup<'a> {
    name: &'a str,
    count: usize,
    total_amount: f64,
}

/// Groups in first-encounter order, one per distinct label.
fn partition(transactions: &[Transaction]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        let name = transaction.category_label();
        let index = *index_by_name.entry(name).or_insert_with(|| {
            groups.push(CategoryGroup {
                name,
                count: 0,
                total_amount: 0.0,
            });
            groups.len() - 1
        });

        let group = &mut groups[index];
        group.count += 1;
        group.total_amount += transaction.summable_amount();
    }

    groups
}

/// `sort_by` is stable, so equal keys keep first-encounter order.
fn rank_descending<T, K>(rows: &mut [T], key: K)
where
    K: Fn(&T, &T) -> Ordering,
{
    rows.sort_by(|left, right| key(right, left));
}

/// Category totals ranked by spend: highest `total_amount` first.
pub fn aggregate_by_category(transactions: &[Transaction]) -> Vec<CategoryStat> {
    let total_count = transactions.len();
    let mut rows = partition(transactions)
        .into_iter()
        .map(|group| CategoryStat {
            name: group.name.to_string(),
            count: group.count,
            total_amount: group.total_amount,
            total_count,
        })
        .collect::<Vec<CategoryStat>>();

    rank_descending(&mut rows, |left, right| {
        left.total_amount.total_cmp(&right.total_amount)
    });
    tracing::debug!(
        transactions = total_count,
        categories = rows.len(),
        "aggregated transactions by spend"
    );
    rows
}

/// Category counts ranked by frequency: highest `count` first.
pub fn count_by_category(transactions: &[Transaction]) -> Vec<CategoryCount> {
    let total_count = transactions.len();
    let mut rows = partition(transactions)
        .into_iter()
        .map(|group| CategoryCount {
            name: group.name.to_string(),
            count: group.count,
            total_count,
        })
        .collect::<Vec<CategoryCount>>();

    rank_descending(&mut rows, |left, right| left.count.cmp(&right.count));
    tracing::debug!(
        transactions = total_count,
        categories = rows.len(),
        "aggregated transactions by frequency"
    );
    rows
}
