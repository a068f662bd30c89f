//! Pipe table serialization.
//!
//! The first row is always the header row. Ragged rows are padded with
//! empty cells to the widest row.

use crate::node::{Element, Tag};

/// Serialize rows of cell text to a pipe table.
///
/// Returns an empty string when there are no rows. Lines are joined with
/// `\n` and the result carries no trailing newline.
pub fn serialize_table(rows: &[Vec<String>]) -> String {
    let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(rows.len() + 1);

    for (index, row) in rows.iter().enumerate() {
        let padded: Vec<&str> = (0..col_count)
            .map(|i| row.get(i).map_or("", |c| c.trim()))
            .collect();
        lines.push(table_line(&padded));

        if index == 0 {
            lines.push(table_line(&vec!["---"; col_count]));
        }
    }

    lines.join("\n")
}

/// Table children that describe the table rather than hold rows
const NON_ROW_ELEMENTS: &[&str] = &["caption", "colgroup", "col"];

/// Collect cell text from a table element.
///
/// Rows are the element children of the table, with row groups
/// (`thead`/`tbody`/`tfoot`) expanded in place. Captions and column
/// groups are skipped. Cells are the element children of each row,
/// flattened to plain text.
pub fn table_rows(table: &Element) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for child in table.element_children().filter(|c| !is_non_row(&c.tag)) {
        if child.tag == Tag::TableSection {
            rows.extend(child.element_children().map(row_cells));
        } else {
            rows.push(row_cells(child));
        }
    }

    rows
}

fn is_non_row(tag: &Tag) -> bool {
    matches!(tag, Tag::Other(name) if NON_ROW_ELEMENTS.contains(&name.as_str()))
}

fn row_cells(row: &Element) -> Vec<String> {
    row.element_children().map(Element::text_content).collect()
}

fn table_line(cells: &[&str]) -> String {
    format!("| {} |", cells.join(" | "))
}
