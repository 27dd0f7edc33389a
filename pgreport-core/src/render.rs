//! Column-aligned text rendering of schema snapshots.
//!
//! Each table is rendered independently: field widths are computed over
//! that table's columns only, never globally, so a long column name in one
//! table does not widen another table's block.

use crate::models::{SchemaSnapshot, Table};

/// Width consumed by the two ` | ` separators on each column row.
const SEPARATOR_PADDING: usize = 6;

/// Renders the snapshot as per-table aligned text.
///
/// Pure over its input; the caller decides where the text goes.
pub fn render(snapshot: &SchemaSnapshot) -> String {
    let mut out = String::new();
    for (i, table) in snapshot.tables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_table(table, &mut out);
    }
    out
}

fn nullable_label(is_nullable: bool) -> &'static str {
    if is_nullable { "YES" } else { "NO" }
}

fn length_label(length: Option<i32>) -> String {
    // Absent lengths render as an empty field of width 0, never "None"
    length.map(|l| l.to_string()).unwrap_or_default()
}

fn render_table(table: &Table, out: &mut String) {
    // Widths count chars, not bytes, to match the char-based `{:<w$}`
    // padding below.
    let mut widths = [0usize; 4];
    for column in &table.columns {
        widths[0] = widths[0].max(column.name.chars().count());
        widths[1] = widths[1].max(column.data_type.chars().count());
        widths[2] = widths[2].max(nullable_label(column.is_nullable).chars().count());
        widths[3] = widths[3].max(length_label(column.character_maximum_length).chars().count());
    }

    let rule_len = widths.iter().sum::<usize>() + SEPARATOR_PADDING;

    out.push_str(&format!(
        "{} | {}\n",
        table.qualified_name(),
        table.table_type
    ));
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for column in &table.columns {
        out.push_str(&format!(
            "{:<w0$} | {:<w1$} | {:<w2$}{:<w3$}\n",
            column.name,
            column.data_type,
            nullable_label(column.is_nullable),
            length_label(column.character_maximum_length),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        ));
    }
}
