use clap::{Parser, Subcommand, ValueEnum};
use tally_client::contracts::types::RankBy;

/// Extended help shown after `tally categories --help`.
pub const CATEGORIES_AFTER_HELP: &str = "\
Input:
  JSON - one top-level array of transaction objects (`null` means no transactions)
  CSV  - one header row; `amount` is required, `category`, `name`, `date` are optional.
         Other columns are ignored.

  <path> is a local file path. Use `-` (or pipe without a path) to read stdin.
  Example: cat rows.json | tally categories --by count -

  JSON example:
  [
    {\"name\": \"Whole Foods\", \"category\": \"Groceries\", \"amount\": 42.15, \"date\": \"2026-01-15\"},
    {\"name\": \"ATM\", \"category\": null, \"amount\": 60}
  ]

Rules:
  - A missing, null or empty category is grouped as `Uncategorized`.
  - Categories are matched exactly: `Food` and `food` are different.
  - A non-numeric amount still counts the transaction but adds 0 to the total.
  - Ties keep the order in which categories first appear in the input.
";

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "category summaries for transaction exports",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank spending categories by total amount or by transaction count
    #[command(after_long_help = CATEGORIES_AFTER_HELP)]
    Categories {
        /// Path to a JSON or CSV transaction file (use `-` for stdin)
        path: Option<String>,
        /// Ranking key
        #[arg(long, value_enum, default_value_t = RankArg::Spend)]
        by: RankArg,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List transactions with formatted amounts, dates and settlement status
    Transactions {
        /// Path to a JSON or CSV transaction file (use `-` for stdin)
        path: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankArg {
    /// Highest total amount first
    Spend,
    /// Most transactions first
    Count,
}

impl From<RankArg> for RankBy {
    fn from(value: RankArg) -> Self {
        match value {
            RankArg::Spend => Self::Spend,
            RankArg::Count => Self::Count,
        }
    }
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
