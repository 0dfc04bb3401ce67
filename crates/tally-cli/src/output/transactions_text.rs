use std::io;

use serde_json::Value;

use super::categories_text::describe_source;
use super::table::{self, Align, Column};

pub fn render_transactions(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("transactions output requires rows"))?;

    if rows.is_empty() {
        return Ok("No transactions found.".to_string());
    }

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Name",
            align: Align::Left,
        },
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.pointer("/date/date_only")
                    .and_then(Value::as_str)
                    .unwrap_or("-")
                    .to_string(),
                text_field(row, "name"),
                text_field(row, "category"),
                text_field(row, "amount_display"),
                text_field(row, "status"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![format!("Transactions ({}):", rows.len()), String::new()];
    lines.extend(table::render_table_or_blocks(
        &columns,
        &table_rows,
        table::terminal_width(),
        "Transaction",
    ));

    lines.push(String::new());
    lines.push("Summary:".to_string());
    let mut summary = vec![("Net amount:", text_field(data, "total_amount_display"))];
    if let Some(source) = data.get("source") {
        summary.push(("Source:", describe_source(source)));
    }
    lines.extend(table::key_value_rows(&summary, 2));

    Ok(lines.join("\n"))
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}
