use crate::models::SearchResult;
use crate::utils::{pad_to_width, sanitize_cell};

/// Column labels, in display order
pub const COLUMN_LABELS: [&str; 4] =
    ["Title", "Content Type", "Publication Date", "Content Snippet"];

const MAX_TITLE_WIDTH: usize = 40;
const MAX_TYPE_WIDTH: usize = 16;
const COLUMN_GAP: &str = "  ";

/// Render results as a plain-text table with a header row.
///
/// Title and type columns are sized to their content (with an upper bound) and
/// the snippet column is printed in full. Every cell is sanitized first.
pub fn render_table(results: &[SearchResult]) -> String {
    let rows: Vec<[String; 4]> = results
        .iter()
        .map(|r| {
            [
                sanitize_cell(&r.title),
                sanitize_cell(&r.content_type),
                sanitize_cell(&r.date),
                sanitize_cell(&r.snippet),
            ]
        })
        .collect();

    let width_of = |col: usize, max: usize| {
        rows.iter()
            .map(|row| row[col].chars().count())
            .chain(std::iter::once(COLUMN_LABELS[col].chars().count()))
            .max()
            .unwrap_or(0)
            .min(max)
    };
    let widths = [
        width_of(0, MAX_TITLE_WIDTH),
        width_of(1, MAX_TYPE_WIDTH),
        COLUMN_LABELS[2].len(),
    ];

    let mut out = String::new();
    push_line(&mut out, &widths, COLUMN_LABELS.map(String::from));
    let rule = widths.map(|w| "-".repeat(w));
    push_line(
        &mut out,
        &widths,
        [rule[0].clone(), rule[1].clone(), rule[2].clone(), "-".repeat(COLUMN_LABELS[3].len())],
    );
    for row in rows {
        push_line(&mut out, &widths, row);
    }
    out
}

fn push_line(out: &mut String, widths: &[usize; 3], cells: [String; 4]) {
    for (cell, width) in cells.iter().zip(widths) {
        out.push_str(&pad_to_width(cell, *width));
        out.push_str(COLUMN_GAP);
    }
    out.push_str(&cells[3]);
    out.push('\n');
}
