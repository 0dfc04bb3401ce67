mod categories;
mod types;

pub use categories::{aggregate_by_category, count_by_category};
pub use types::{CategoryCount, CategoryStat, Transaction, UNCATEGORIZED};
