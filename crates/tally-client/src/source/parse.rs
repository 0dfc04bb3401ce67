use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::aggregate::Transaction;
use crate::source::invalid_input_error;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub(crate) struct ParsedRow {
    pub(crate) row: usize,
    pub(crate) transaction: Transaction,
    pub(crate) amount_parsed: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceFormat {
    JsonArray,
    JsonNull,
    Csv,
}

impl SourceFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JsonArray => "json_array",
            Self::JsonNull => "json_null",
            Self::Csv => "csv",
        }
    }
}

pub(crate) fn parse_source(content: &str) -> ClientResult<(SourceFormat, Vec<ParsedRow>)> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(invalid_input_error("Transaction source is empty."));
    }

    if trimmed == "null" {
        return Ok((SourceFormat::JsonNull, Vec::new()));
    }

    if trimmed.starts_with('[') {
        return Ok((SourceFormat::JsonArray, parse_json_array(trimmed)?));
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(ClientError::invalid_input_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    if looks_like_csv(trimmed) {
        return Ok((SourceFormat::Csv, parse_csv(trimmed)?));
    }

    Err(ClientError::invalid_input_format(
        "Unsupported input format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let parsed = serde_json::from_str::<Value>(content)
        .map_err(|_| invalid_input_error("Invalid JSON input. Provide a valid JSON array."))?;

    let Some(items) = parsed.as_array() else {
        return Err(invalid_input_error(
            "JSON input must be a top-level array of transaction objects.",
        ));
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(invalid_input_error(
                "JSON array entries must all be objects with transaction fields.",
            ));
        };
        rows.push(json_row(index + 1, object));
    }

    Ok(rows)
}

fn json_row(row: usize, object: &Map<String, Value>) -> ParsedRow {
    let amount = json_amount(object.get("amount"));
    ParsedRow {
        row,
        amount_parsed: amount.is_some(),
        transaction: Transaction {
            category: json_category(object.get("category")),
            amount: amount.unwrap_or(f64::NAN),
            name: read_optional_string(object.get("name")),
            date: read_optional_string(object.get("date"))
                .as_deref()
                .and_then(parse_date),
        },
    }
}

fn json_amount(value: Option<&Value>) -> Option<f64> {
    let current = value?;
    if let Some(number) = current.as_f64() {
        return Some(number).filter(|amount| amount.is_finite());
    }
    current.as_str().and_then(parse_amount)
}

fn parse_csv(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| invalid_input_error("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers.iter().any(|header| header == "amount") {
        return Err(ClientError::csv_missing_amount_header(headers));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record =
            result_row.map_err(|_| invalid_input_error("CSV rows are malformed or not UTF-8."))?;

        let amount = value_for(&record, &index_by_name, "amount")
            .as_deref()
            .and_then(parse_amount);
        rows.push(ParsedRow {
            row: row_index + 1,
            amount_parsed: amount.is_some(),
            transaction: Transaction {
                category: value_for(&record, &index_by_name, "category"),
                amount: amount.unwrap_or(f64::NAN),
                name: value_for(&record, &index_by_name, "name"),
                date: value_for(&record, &index_by_name, "date")
                    .as_deref()
                    .and_then(parse_date),
            },
        });
    }

    Ok(rows)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

/// `null`, `false`, zero and `""` carry no label; other non-strings keep their JSON text.
fn json_category(value: Option<&Value>) -> Option<String> {
    let current = value?;
    let falsy = match current {
        Value::Null | Value::Bool(false) => true,
        Value::Number(number) => number
            .as_f64()
            .is_none_or(|amount| amount == 0.0 || amount.is_nan()),
        Value::String(text) => text.is_empty(),
        _ => false,
    };
    if falsy {
        return None;
    }
    read_optional_string(Some(current))
}

fn read_optional_string(value: Option<&Value>) -> Option<String> {
    let current = value?;

    if current.is_null() {
        return None;
    }

    if let Some(string_value) = current.as_str() {
        return Some(string_value.to_string());
    }

    Some(current.to_string())
}

/// Finite decimal amounts only; `"NaN"` and `"inf"` are treated as unparsed.
fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(date_time);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|date_time| date_time.naive_local())
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}
