use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use stock_core::entities::Item;
use stock_core::time::format_date_in;

use crate::cli::OutputFormat;

pub mod table;

/// Display form of an item: tags as discrete labels, the timestamp as a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub tags: Vec<String>,
    pub amount: u32,
    pub date: String,
}

impl ItemRow {
    #[must_use]
    pub fn new(item: &Item, date_format: &str) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            tags: item.tag_labels(),
            amount: item.amount,
            date: format_date_in(item.time, &Local, date_format),
        }
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render item rows; the table form uses fixed item columns.
pub fn render_items(rows: &[ItemRow], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&rows, format);
    }
    if rows.is_empty() {
        return Ok(String::from("(no items)"));
    }

    let cells = rows
        .iter()
        .map(|row| {
            vec![
                row.id.to_string(),
                row.name.clone(),
                row.tags.join(", "),
                row.amount.to_string(),
                row.date.clone(),
            ]
        })
        .collect::<Vec<_>>();
    Ok(table::render_table(
        &["id", "name", "tags", "amount", "date"],
        &cells,
        &[0, 3],
        table::TableOptions::from_env(),
    ))
}

/// Print item rows in the requested format.
pub fn output_items(rows: &[ItemRow], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_items(rows, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_key_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let headers = ["key", "value"];
    let rows = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| vec![key, value_to_cell(&value)])
            .collect::<Vec<_>>(),
        other => vec![vec![String::from("value"), value_to_cell(&other)]],
    };
    Ok(table::render_table(
        &headers,
        &rows,
        &[],
        table::TableOptions::from_env(),
    ))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}
