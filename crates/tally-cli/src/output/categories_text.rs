use std::io;

use serde_json::Value;
use tally_client::format::format_amount;

use super::table::{self, Align, Column};

pub fn render_categories(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("categories output requires rows"))?;

    if rows.is_empty() {
        return Ok([
            "No transactions found.",
            "",
            "Pass a JSON array of transactions or a CSV file with an `amount` column.",
            "Run `tally categories --help` for the accepted input shapes.",
        ]
        .join("\n"));
    }

    let by_spend = data.get("rank_by").and_then(Value::as_str) != Some("count");
    let total_count = data.get("total_count").and_then(Value::as_u64).unwrap_or(0);

    let mut lines = vec![
        format!(
            "{} ({} across {}):",
            if by_spend {
                "Categories by spend"
            } else {
                "Categories by frequency"
            },
            plural(total_count, "transaction"),
            plural(rows.len() as u64, "category"),
        ),
        String::new(),
    ];

    let mut columns = vec![
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Count",
            align: Align::Right,
        },
        Column {
            name: "Share",
            align: Align::Right,
        },
    ];
    if by_spend {
        columns.push(Column {
            name: "Total",
            align: Align::Right,
        });
    }

    let table_rows = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                row.get("count")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .to_string(),
                format_share(row.get("share").and_then(Value::as_f64).unwrap_or(0.0)),
            ];
            if by_spend {
                cells.push(format_amount(
                    row.get("total_amount")
                        .and_then(Value::as_f64)
                        .unwrap_or(0.0),
                ));
            }
            cells
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(table::render_table_or_blocks(
        &columns,
        &table_rows,
        table::terminal_width(),
        "Category",
    ));

    lines.push(String::new());
    lines.push("Summary:".to_string());
    let mut summary = vec![(
        "Total amount:",
        format_amount(data.get("total_amount").and_then(Value::as_f64).unwrap_or(0.0)),
    )];
    if let Some(source) = data.get("source") {
        summary.push(("Source:", describe_source(source)));
    }
    lines.extend(table::key_value_rows(&summary, 2));

    let unparsed = data
        .get("unparsed_amounts")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_u64)
                .map(|row| row.to_string())
                .collect::<Vec<String>>()
        })
        .unwrap_or_default();
    if !unparsed.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Note: {} had a non-numeric amount and counted as $0.00 (rows: {}).",
            plural(unparsed.len() as u64, "row"),
            unparsed.join(", ")
        ));
    }

    Ok(lines.join("\n"))
}

pub(super) fn describe_source(source: &Value) -> String {
    let kind = source.get("kind").and_then(Value::as_str).unwrap_or("unknown");
    let format = source.get("format").and_then(Value::as_str).unwrap_or("unknown");
    match source.get("path").and_then(Value::as_str) {
        Some(path) => format!("{path} ({format})"),
        None => format!("{kind} ({format})"),
    }
}

fn format_share(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

fn plural(count: u64, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "category") => format!("{count} categories"),
        _ => format!("{count} {noun}s"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_categories;

    #[test]
    fn spend_view_renders_totals_and_unparsed_note() {
        let data = json!({
            "rank_by": "spend",
            "source": {"kind": "stdin", "format": "json_array"},
            "total_count": 4,
            "total_amount": 35.0,
            "unparsed_amounts": [4],
            "rows": [
                {"name": "Uncategorized", "count": 1, "total_amount": 20.0, "total_count": 4, "share": 0.25},
                {"name": "Food", "count": 3, "total_amount": 15.0, "total_count": 4, "share": 0.75}
            ]
        });
        let rendered = render_categories(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Categories by spend (4 transactions across 2 categories):"));
            assert!(text.contains("Uncategorized"));
            assert!(text.contains("$20.00"));
            assert!(text.contains("75%"));
            assert!(text.contains("Total amount:  $35.00"));
            assert!(text.contains("Source:        stdin (json_array)"));
            assert!(text.contains("Note: 1 row had a non-numeric amount"));
        }
    }

    #[test]
    fn count_view_omits_total_column() {
        let data = json!({
            "rank_by": "count",
            "total_count": 1,
            "total_amount": 2.0,
            "unparsed_amounts": [],
            "rows": [{"name": "Food", "count": 1, "total_count": 1, "share": 1.0}]
        });
        let rendered = render_categories(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Categories by frequency (1 transaction across 1 category):"));
            assert!(!text.lines().any(|line| line.ends_with("Total")));
            assert!(!text.contains("Note:"));
        }
    }

    #[test]
    fn empty_rows_render_guidance() {
        let rendered = render_categories(&json!({"rows": []}));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("No transactions found."));
        }
    }

    #[test]
    fn missing_rows_is_an_output_error() {
        assert!(render_categories(&json!({})).is_err());
    }
}
