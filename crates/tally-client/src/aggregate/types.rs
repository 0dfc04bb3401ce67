use chrono::NaiveDateTime;
use serde::Serialize;

/// Label used for transactions whose category is missing or empty.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub category: Option<String>,
    /// Signed amount. Non-numeric source values are carried as `NaN`.
    pub amount: f64,
    pub name: Option<String>,
    pub date: Option<NaiveDateTime>,
}

impl Transaction {
    pub fn new(category: Option<&str>, amount: f64) -> Self {
        Self {
            category: category.map(std::string::ToString::to_string),
            amount,
            name: None,
            date: None,
        }
    }

    /// Grouping label, with `"Uncategorized"` standing in for absent or empty labels.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => UNCATEGORIZED,
        }
    }

    /// Amount as it contributes to a sum: non-finite values count as zero.
    pub fn summable_amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub name: String,
    pub count: usize,
    pub total_amount: f64,
    pub total_count: usize,
}

impl CategoryStat {
    pub fn share_of_count(&self) -> f64 {
        share(self.count, self.total_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
    pub total_count: usize,
}

impl CategoryCount {
    pub fn share_of_count(&self) -> f64 {
        share(self.count, self.total_count)
    }
}

fn share(count: usize, total_count: usize) -> f64 {
    if total_count == 0 {
        return 0.0;
    }
    count as f64 / total_count as f64
}
