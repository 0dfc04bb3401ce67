use chrono::{Local, NaiveDate, NaiveDateTime};
use tally_client::{ClientError, ClientResult};

pub const LOG_ENV: &str = "TALLY_LOG";
pub const TODAY_ENV: &str = "TALLY_TODAY";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Settings {
    pub log_filter: String,
    pub today: Option<NaiveDate>,
}

impl Settings {
    pub fn from_env() -> ClientResult<Self> {
        Self::from_values(
            std::env::var(LOG_ENV).ok(),
            std::env::var(TODAY_ENV).ok(),
        )
    }

    fn from_values(log_filter: Option<String>, today: Option<String>) -> ClientResult<Self> {
        let log_filter = log_filter
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let today = match today.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                ClientError::invalid_argument_with_recovery(
                    &format!("`{TODAY_ENV}` must use YYYY-MM-DD format, got `{value}`."),
                    vec![format!("Unset `{TODAY_ENV}` or set it to a date like 2026-01-15.")],
                )
            })?),
        };

        Ok(Self { log_filter, today })
    }

    /// Reference time for transaction status: start of `today` when pinned.
    pub fn now(&self) -> NaiveDateTime {
        self.today
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_else(|| Local::now().naive_local())
    }
}
