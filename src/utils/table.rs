//! Table rendering utilities for CLI outputs.
//! Widths are display columns, so CJK names and emoji stay aligned.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(UnicodeWidthStr::width(header)),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Left-align `text` in `width` display columns, followed by one space.
fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let used = UnicodeWidthStr::width(text);
    out.push_str(&" ".repeat(width.saturating_sub(used) + 1));
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns whose content is wider than the header.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            pad(&mut out, &col.header, col.width);
        }
        out.push('\n');

        for col in &self.columns {
            pad(&mut out, &"-".repeat(col.width), col.width);
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                pad(&mut out, cell, col.width);
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_fit_rows() {
        let mut t = Table::new(vec![Column::new("ID", 2), Column::new("Name", 4)]);
        t.add_row(vec!["10".into(), "Computer Science".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID Name"));
        assert!(lines[2].contains("Computer Science"));
        assert_eq!(t.columns[1].width, "Computer Science".len());
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        let mut t = Table::new(vec![Column::new("Name", 4), Column::new("Class", 5)]);
        t.add_row(vec!["李小龙".into(), "1".into()]);
        t.add_row(vec!["Ann".into(), "2".into()]);
        assert_eq!(t.columns[0].width, 6);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Name   Class ");
        assert_eq!(lines[2], "李小龙 1     ");
        assert_eq!(lines[3], "Ann    2     ");
    }
}
