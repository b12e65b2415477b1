//! Sheet preview - header labels, leading data rows and column types

use crate::types::{format_number, CellValue, ColumnType, TypeInference};
use calamine::{Data, Range};
use serde::Serialize;
use std::fmt;

/// One column of a preview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewColumn {
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// The first rows of a sheet plus the inferred type of each column.
///
/// The first row of the sheet's used range is the header. Types are
/// inferred over every data row, not only the ones kept in `rows`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub columns: Vec<PreviewColumn>,
    pub rows: Vec<Vec<CellValue>>,
    /// Data rows in the sheet (excluding the header)
    pub total_rows: usize,
}

impl Preview {
    /// Build a preview keeping at most `limit` data rows
    pub fn from_range(range: &Range<Data>, limit: usize) -> Self {
        let mut sheet_rows = range.rows();
        let Some(header) = sheet_rows.next() else {
            return Self::empty();
        };

        let labels: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(idx, cell)| column_label(idx, cell))
            .collect();
        let mut inference = vec![TypeInference::default(); labels.len()];
        let mut rows = Vec::with_capacity(limit.min(range.height()));
        let mut total_rows = 0;

        for row in sheet_rows {
            let cells: Vec<CellValue> = row.iter().map(CellValue::from).collect();
            for (column, cell) in inference.iter_mut().zip(&cells) {
                column.observe(cell);
            }
            if rows.len() < limit {
                rows.push(cells);
            }
            total_rows += 1;
        }

        let columns = labels
            .into_iter()
            .zip(&inference)
            .map(|(label, column)| PreviewColumn {
                label,
                column_type: column.finish(),
            })
            .collect();

        Self {
            columns,
            rows,
            total_rows,
        }
    }

    /// A sheet with no cells at all
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            total_rows: 0,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Number of rows kept in the preview
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Label for a header cell; blank headers get `Unnamed: <index>`
fn column_label(idx: usize, cell: &Data) -> String {
    match cell {
        Data::String(s) if !s.trim().is_empty() => s.clone(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Empty | Data::String(_) => format!("Unnamed: {}", idx),
        other => CellValue::from(other).to_string(),
    }
}

/// Text on one line: `\r` dropped, `\n` written as a literal `\n`
pub(crate) fn single_line(text: &str) -> String {
    text.replace('\r', "").replace('\n', "\\n")
}

fn cell_text(cell: &CellValue) -> String {
    single_line(&cell.to_string())
}

impl fmt::Display for Preview {
    /// Render as an aligned table: a left-aligned row index followed by one
    /// right-aligned column per label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "Empty sheet")?;
            return write!(f, "Columns: {:?}", self.labels());
        }

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                (0..self.columns.len())
                    .map(|col| row.get(col).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        let header: Vec<String> = self.columns.iter().map(|c| single_line(&c.label)).collect();
        let widths: Vec<usize> = header
            .iter()
            .enumerate()
            .map(|(col, label)| {
                body.iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(label.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let index_width = (self.rows.len() - 1).to_string().len();

        write!(f, "{}", " ".repeat(index_width))?;
        for (label, width) in header.iter().zip(&widths) {
            write!(f, "  {:>width$}", label, width = *width)?;
        }

        for (idx, row) in body.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<width$}", idx, width = index_width)?;
            for (text, width) in row.iter().zip(&widths) {
                write!(f, "  {:>width$}", text, width = *width)?;
            }
        }
        Ok(())
    }
}
