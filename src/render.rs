/// Plain-text table rendering for terminal output.

use crate::model::EMPTY_TABLE_MESSAGE;
use crate::table::TableView;
use serde_json::Value;

/// Display text for a single cell. Strings are shown without quotes.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders a page as an aligned text table with a pager footer.
pub fn render_text(view: &TableView) -> String {
    let labels: Vec<&str> = view.headers.labels().collect();
    let cells: Vec<Vec<String>> = view
        .page
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let mut widths: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(labels.iter().copied(), &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_line(rule.iter().map(String::as_str), &widths));

    if cells.is_empty() {
        out.push_str(EMPTY_TABLE_MESSAGE);
        out.push('\n');
    } else {
        for row in &cells {
            out.push_str(&format_line(row.iter().map(String::as_str), &widths));
        }
    }

    out.push_str(&format!(
        "\nPage {} of {} ({} rows) - fetched {}\n",
        view.page.page_index + 1,
        view.page.page_count().max(1),
        view.page.total_rows,
        view.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}
