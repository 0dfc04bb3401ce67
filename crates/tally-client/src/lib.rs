pub mod aggregate;
pub mod auth_form;
pub mod commands;
pub mod contracts;
pub mod error;
pub mod format;
pub mod ids;
pub mod providers;
pub mod source;

pub use aggregate::{
    CategoryCount, CategoryStat, Transaction, UNCATEGORIZED, aggregate_by_category,
    count_by_category,
};
pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
