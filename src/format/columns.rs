//! Side-by-side column layout of already formatted text.

use console::{pad_str, Alignment};

use crate::format::options::FormatOptions;

/// One column of a row, as passed to the logger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub content: String,
    pub options: FormatOptions,
}

impl Column {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            options: FormatOptions::default(),
        }
    }

    /// Per-column overrides, applied on top of the row options.
    pub fn with_options(mut self, options: impl Into<FormatOptions>) -> Self {
        self.options = options.into();
        self
    }
}

impl From<&str> for Column {
    fn from(content: &str) -> Self {
        Column::new(content)
    }
}

impl From<String> for Column {
    fn from(content: String) -> Self {
        Column::new(content)
    }
}

/// A formatted cell and the width it occupies in the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub content: String,
    pub width: usize,
}

/// Lay `cells` out next to each other.
///
/// Each cell is padded to its width by visible width, so styled text lines up.
/// The row is as tall as the tallest cell. Returns an empty string when every
/// cell is empty.
pub fn layout(cells: &[Cell]) -> String {
    if cells.iter().all(|cell| cell.content.is_empty()) {
        return String::new();
    }

    let split: Vec<Vec<&str>> = cells
        .iter()
        .map(|cell| cell.content.split('\n').collect())
        .collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for (cell, lines) in cells.iter().zip(&split) {
            let text = lines.get(row).copied().unwrap_or("");
            line.push_str(&pad_str(text, cell.width, Alignment::Left, None));
        }
        rows.push(line);
    }
    rows.join("\n")
}

/// Split `total` between `count` columns, handing the remainder to the last ones.
pub fn share_width(total: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let base = (total / count).max(1);
    let extra = total.saturating_sub(base * count);
    (0..count)
        .map(|index| base + usize::from(index >= count - extra.min(count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(content: &str, width: usize) -> Cell {
        Cell {
            content: content.to_string(),
            width,
        }
    }

    #[test]
    fn test_layout_pads_cells() {
        let row = layout(&[cell("a", 4), cell("b", 3)]);
        assert_eq!(row, "a   b  ");
    }

    #[test]
    fn test_layout_uses_tallest_cell() {
        let row = layout(&[cell("one\ntwo\nthree", 6), cell("x", 2)]);
        let lines: Vec<&str> = row.split('\n').collect();
        assert_eq!(lines, vec!["one   x ", "two     ", "three   "]);
    }

    #[test]
    fn test_layout_measures_visible_width() {
        let styled = "\u{1b}[32mok\u{1b}[0m";
        let row = layout(&[cell(styled, 4), cell("|", 1)]);
        assert_eq!(console::strip_ansi_codes(&row), "ok  |");
    }

    #[test]
    fn test_layout_of_empty_cells_is_empty() {
        assert_eq!(layout(&[cell("", 10), cell("", 10)]), "");
        assert_eq!(layout(&[]), "");
    }

    #[test]
    fn test_share_width() {
        assert_eq!(share_width(90, 3), vec![30, 30, 30]);
        assert_eq!(share_width(80, 3), vec![26, 27, 27]);
        assert_eq!(share_width(2, 4), vec![1, 1, 1, 1]);
        assert!(share_width(80, 0).is_empty());
    }

    #[test]
    fn test_column_from_str() {
        let column = Column::from("content");
        assert_eq!(column.content, "content");
        assert_eq!(column.options, FormatOptions::default());
    }
}
