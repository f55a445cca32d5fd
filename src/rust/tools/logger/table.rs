//! Boxed grid rendering for `table` output.
//!
//! Rows come from an array (indexed `0..n`) or an object (indexed by key).
//! Each row contributes columns from its own keys, in first-seen order;
//! scalar rows land in a trailing `Values` column. An optional second value,
//! a JSON array of strings, restricts which columns are shown.
//!
//! Column widths count `char`s, not terminal cells, so double-width text
//! (CJK, most emoji) pushes the borders of its row out of line.

use serde_json::Value;

use super::value::LogValue;

const INDEX_HEADER: &str = "(index)";
const VALUES_HEADER: &str = "Values";

struct Row {
    index: String,
    cells: Vec<(String, String)>,
    scalar: Option<String>,
}

/// Render `values` as a table, or `None` when the data is not tabular.
pub fn render_table(values: &[LogValue]) -> Option<String> {
    let data = values.first()?.as_json()?;
    let filter = values.get(1).and_then(column_filter);

    let rows = collect_rows(data)?;

    let mut columns: Vec<String> = Vec::new();
    let mut has_scalar = false;
    for row in &rows {
        for (key, _) in &row.cells {
            let allowed = filter
                .as_ref()
                .map(|wanted| wanted.iter().any(|c| c == key))
                .unwrap_or(true);
            if allowed && !columns.contains(key) {
                columns.push(key.clone());
            }
        }
        has_scalar |= row.scalar.is_some();
    }
    if let Some(wanted) = &filter {
        // keep the caller's column order
        columns.sort_by_key(|c| wanted.iter().position(|w| w == c));
    }

    let mut header = vec![INDEX_HEADER.to_string()];
    header.extend(columns.iter().cloned());
    if has_scalar {
        header.push(VALUES_HEADER.to_string());
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut line = vec![row.index.clone()];
            for column in &columns {
                let cell = row
                    .cells
                    .iter()
                    .find(|(key, _)| key == column)
                    .map(|(_, text)| text.clone())
                    .unwrap_or_default();
                line.push(cell);
            }
            if has_scalar {
                line.push(row.scalar.clone().unwrap_or_default());
            }
            line
        })
        .collect();

    Some(draw(&header, &body))
}

fn column_filter(value: &LogValue) -> Option<Vec<String>> {
    let items = value.as_json()?.as_array()?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn collect_rows(data: &Value) -> Option<Vec<Row>> {
    let entries: Vec<(String, &Value)> = match data {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        _ => return None,
    };

    let rows = entries
        .into_iter()
        .map(|(index, value)| match value {
            Value::Object(map) => Row {
                index,
                cells: map.iter().map(|(k, v)| (k.clone(), cell_text(v))).collect(),
                scalar: None,
            },
            Value::Array(items) => Row {
                index,
                cells: items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), cell_text(v)))
                    .collect(),
                scalar: None,
            },
            other => Row {
                index,
                cells: Vec::new(),
                scalar: Some(cell_text(other)),
            },
        })
        .collect();

    Some(rows)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn draw(header: &[String], body: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header[col])
                .chain(body.iter().map(|row| &row[col]))
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: char, mid: char, right: char| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| {
                let pad = w - cell.chars().count();
                format!(" {}{} ", cell, " ".repeat(pad))
            })
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = Vec::with_capacity(body.len() + 4);
    out.push(rule('┌', '┬', '┐'));
    out.push(line(header));
    out.push(rule('├', '┼', '┤'));
    for row in body {
        out.push(line(row.as_slice()));
    }
    out.push(rule('└', '┴', '┘'));
    out.join("\n")
}

#[cfg(test)]
#[path = "test_table.rs"]
mod tests;
