use std::fmt::Write;

use crate::cli::ui::style::UiStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub align: Align,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, min_width: usize) -> Self {
        Self {
            header: header.into(),
            min_width,
            align: Align::Left,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .chain([column.header.chars().count(), column.min_width])
                    .max()
                    .unwrap_or(column.min_width)
            })
            .collect()
    }
}

/// Renders [`Table`] instances as padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(table: &Table, style: &UiStyle) -> String {
        let mut out = String::new();
        if let Some(title) = &table.title {
            let _ = writeln!(out, "{}", style.header(title));
        }
        if table.columns.is_empty() {
            return out;
        }

        let widths = table.widths();
        let total_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        let headers: Vec<String> = table.columns.iter().map(|col| col.header.clone()).collect();

        let _ = writeln!(out, "{}", style.horizontal_line(total_width));
        let header_line = Self::format_line(&table.columns, &widths, &headers);
        let _ = writeln!(out, "{}", style.apply_header_style(&header_line));
        let _ = writeln!(out, "{}", style.horizontal_line(total_width));
        for row in &table.rows {
            let _ = writeln!(out, "{}", Self::format_line(&table.columns, &widths, row));
        }
        out
    }

    fn format_line(columns: &[TableColumn], widths: &[usize], cells: &[String]) -> String {
        let mut line = String::new();
        for (idx, (column, width)) in columns.iter().zip(widths).enumerate() {
            if idx > 0 {
                line.push(' ');
            }
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            match column.align {
                Align::Left => {
                    let _ = write!(line, "{:<width$}", cell, width = *width);
                }
                Align::Right => {
                    let _ = write!(line, "{:>width$}", cell, width = *width);
                }
            }
        }
        line.trim_end().to_string()
    }
}
