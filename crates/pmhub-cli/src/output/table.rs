#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                format_cell(&truncated, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the row fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, render_entity_table, truncate_text};

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".to_string(), "Slack".to_string(), "Growth loops in B2B chat".to_string()],
            vec!["200".to_string(), "Spotify".to_string(), "Wrapped".to_string()],
        ]
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let table = render_entity_table(&["id", "company", "title"], &rows(), TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // Numeric cells are right-aligned.
        assert!(lines[2].starts_with("     1"));
        assert!(lines[3].starts_with("   200"));
    }

    #[test]
    fn max_width_truncates_widest_column() {
        let options = TableOptions {
            max_width: Some(30),
        };
        let table = render_entity_table(&["id", "company", "title"], &rows(), options);
        for line in table.lines().skip(2) {
            assert!(line.chars().count() <= 30, "line too wide: {line:?}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefgh", 4), "abc…");
    }
}
