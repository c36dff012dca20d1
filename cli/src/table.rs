// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// A plain text table with a bold header row and width-aligned columns.
#[derive(Debug)]
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
        }
    }

    fn widths(&self, rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .fold(col.name().width(), usize::max)
            })
            .collect()
    }

    fn write_row<S: AsRef<str>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        cells: &[S],
        widths: &[usize],
        header: bool,
    ) -> fmt::Result {
        let last = self.columns.len().saturating_sub(1);
        for (i, ((col, cell), width)) in self.columns.iter().zip(cells).zip(widths).enumerate() {
            let cell = cell.as_ref();
            let fill = " ".repeat(width.saturating_sub(cell.width()));
            let padded = match col.padding_direction() {
                PaddingDirection::Left if i == last => cell.to_string(), // no trailing spaces
                PaddingDirection::Left => format!("{cell}{fill}"),
                PaddingDirection::Right => format!("{fill}{cell}"),
            };

            if header {
                write!(f, "{}", padded.bold())?;
            } else {
                write!(f, "{padded}")?;
            }

            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|item| self.columns.iter().map(|col| col.format(item)).collect())
            .collect();
        let widths = self.widths(&rows);

        let header: Vec<_> = self.columns.iter().map(|col| col.name()).collect();
        self.write_row(f, &header, &widths, true)?;
        for row in &rows {
            self.write_row(f, row, &widths, false)?;
        }
        Ok(())
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}
