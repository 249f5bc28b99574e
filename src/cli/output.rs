// Console rendering for the flash loan CLI
use colored::{ColoredString, Colorize};
use std::io::Write;

use crate::errors::FlashLoanResult;

/// Colour applied to a table column or status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Cyan,
    Green,
    Yellow,
}

impl Style {
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Style::Plain => text.normal(),
            Style::Cyan => text.cyan(),
            Style::Green => text.green(),
            Style::Yellow => text.yellow(),
        }
    }
}

struct Column {
    header: String,
    style: Style,
}

/// A titled table with box-drawing borders.
///
/// Column widths are measured on the unstyled text, so the layout is the
/// same whether or not colours are enabled.
pub struct Table {
    title: Option<String>,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Table {
            title: Some(title.into()),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn add_column(&mut self, header: impl Into<String>, style: Style) -> &mut Self {
        self.columns.push(Column {
            header: header.into(),
            style,
        });
        self
    }

    /// Append a row; missing cells render empty and extra cells are dropped
    pub fn add_row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
        self
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(column.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn line<F>(widths: &[usize], cells: &[String], paint: F) -> String
    where
        F: Fn(usize, &str) -> String,
    {
        let cells: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let padding = widths[i] - cell.chars().count();
                format!(" {}{} ", paint(i, cell), " ".repeat(padding))
            })
            .collect();
        format!("│{}│", cells.join("│"))
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 5);

        if let Some(title) = &self.title {
            let inner: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
            let indent = inner.saturating_sub(title.chars().count()) / 2;
            lines.push(format!("{}{}", " ".repeat(indent), title.italic()));
        }

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        lines.push(Self::border(&widths, '┌', '┬', '┐'));
        lines.push(Self::line(&widths, &headers, |_, cell| cell.bold().to_string()));
        lines.push(Self::border(&widths, '├', '┼', '┤'));
        for row in &self.rows {
            lines.push(Self::line(&widths, row, |i, cell| {
                self.columns[i].style.paint(cell).to_string()
            }));
        }
        lines.push(Self::border(&widths, '└', '┴', '┘'));

        lines.join("\n")
    }

    pub fn print<W: Write>(&self, out: &mut W) -> FlashLoanResult<()> {
        writeln!(out, "{}", self.render())?;
        Ok(())
    }
}

/// Bold green headline announcing what a command is about to describe
pub fn headline<W: Write>(out: &mut W, text: &str) -> FlashLoanResult<()> {
    writeln!(out, "{}", text.green().bold())?;
    Ok(())
}

/// Red warning line
pub fn warning<W: Write>(out: &mut W, text: &str) -> FlashLoanResult<()> {
    writeln!(out, "{}", text.red())?;
    Ok(())
}

/// Yellow hint, preceded by a blank line
pub fn hint<W: Write>(out: &mut W, text: &str) -> FlashLoanResult<()> {
    writeln!(out, "\n{}", text.yellow())?;
    Ok(())
}

/// ✓ or ✗ marker for a checklist entry
pub fn check_mark(present: bool) -> ColoredString {
    if present {
        "✓".green()
    } else {
        "✗".red()
    }
}
