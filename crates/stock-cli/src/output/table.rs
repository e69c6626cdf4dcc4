#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Width from `COLUMNS`, ignored when unset or implausibly narrow.
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        Self { max_width }
    }
}

/// Render a simple aligned table for string rows.
///
/// Columns listed in `numeric` are right-aligned.
#[must_use]
pub fn render_table(
    headers: &[&str],
    rows: &[Vec<String>],
    numeric: &[usize],
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
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(index, (header, width))| {
            format_cell(&truncate_text(header, *width), *width, numeric.contains(&index))
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                format_cell(&truncate_text(value, *width), *width, numeric.contains(&index))
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

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
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

fn format_cell(value: &str, width: usize, right_align: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if right_align {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aligns_mixed_widths() {
        let rows = vec![
            vec!["1".to_string(), "Hammer".to_string(), "3".to_string()],
            vec!["20".to_string(), "Nail".to_string(), "100".to_string()],
        ];
        let table = render_table(
            &["id", "name", "amount"],
            &rows,
            &[0, 2],
            TableOptions::default(),
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id  name    amount");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], " 1  Hammer       3");
        assert_eq!(lines[3], "20  Nail       100");
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let rows = vec![vec!["a very long item name indeed".to_string(), "1".to_string()]];
        let table = render_table(
            &["name", "amount"],
            &rows,
            &[1],
            TableOptions {
                max_width: Some(20),
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 20, "row too wide: {row:?}");
        assert!(row.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["1".to_string()]];
        let table = render_table(&["id", "name"], &rows, &[], TableOptions::default());
        assert!(table.lines().nth(2).unwrap().ends_with('-'));
    }
}
