//! Pipe-table rendering for the console report.

/// Column alignment in a pipe table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Render a markdown pipe table.
///
/// Every row must have `headers.len()` cells. Widths are measured in chars.
pub fn pipe_table(headers: &[String], aligns: &[Align], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers, aligns, &widths));

    let separator: Vec<String> = widths
        .iter()
        .zip(aligns)
        .map(|(&w, align)| match align {
            Align::Left => format!(":{}", "-".repeat(w + 1)),
            Align::Right => format!("{}:", "-".repeat(w + 1)),
        })
        .collect();
    lines.push(format!("|{}|", separator.join("|")));

    for row in rows {
        lines.push(render_row(row, aligns, &widths));
    }

    lines.join("\n")
}

fn render_row(cells: &[String], aligns: &[Align], widths: &[usize]) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(aligns.iter().zip(widths))
        .map(|(cell, (align, &w))| match align {
            Align::Left => format!(" {:<w$} ", cell, w = w),
            Align::Right => format!(" {:>w$} ", cell, w = w),
        })
        .collect();
    format!("|{}|", rendered.join("|"))
}
