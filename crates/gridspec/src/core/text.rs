//! Text output for parsed definitions
//!
//! Canonical spec formatting and an aligned table view for terminals.

use super::types::SizingDefinition;
use unicode_width::UnicodeWidthStr;

const TABLE_HEADER: [&str; 6] = ["#", "KIND", "VALUE", "MIN", "MAX", "GROUP"];

/// Join definitions back into a specification string.
///
/// Parsing the output yields the same definitions.
///
/// # Example
/// ```
/// use gridspec::core::{format_definitions, DefinitionParser};
///
/// let defs = DefinitionParser::new().parse("auto,foo,*(MIN=10),200");
/// assert_eq!(format_definitions(&defs), "Auto,*(min=10),200");
/// ```
pub fn format_definitions(definitions: &[SizingDefinition]) -> String {
    definitions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Render definitions as a table with one row per definition.
///
/// Columns are padded by display width so group names with wide
/// characters stay aligned.
pub fn render_table(definitions: &[SizingDefinition]) -> String {
    let rows: Vec<[String; 6]> = definitions
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let value = if def.is_auto() {
                "-".to_string()
            } else {
                def.value.to_string()
            };
            [
                index.to_string(),
                def.kind.to_string(),
                value,
                optional_cell(def.min_value),
                optional_cell(def.max_value),
                def.shared_size_group.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADER.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header = TABLE_HEADER.map(str::to_string);
    std::iter::once(&header)
        .chain(rows.iter())
        .map(|cells| format_row(cells, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn optional_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.width());
        line.push_str(&" ".repeat(pad));
    }
    line.trim_end().to_string()
}
