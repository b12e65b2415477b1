//! Workbook fixtures generated at test time

#![allow(dead_code)] // each test binary uses a different subset

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// A cell to write into a fixture sheet
#[derive(Debug, Clone)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    /// Year, month, day (written with a `yyyy-mm-dd` number format)
    Date(u16, u8, u8),
    Blank,
}

pub use Cell::{Blank, Bool, Date, Number, Text};

/// Write an .xlsx workbook with the given sheets (name, rows)
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, *s).unwrap();
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    Cell::Bool(b) => {
                        worksheet.write_boolean(r, c, *b).unwrap();
                    }
                    Cell::Date(y, m, d) => {
                        let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                        worksheet
                            .write_datetime_with_format(r, c, &date, &date_format)
                            .unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// The personal finance workbook used across tests:
/// - Income: 3 data rows, integer amounts, dates
/// - Expenses: header only
/// - Assets: 7 data rows, a text value in the last row of `Value`
pub fn finance_workbook(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("finance.xlsx");
    write_workbook(
        &path,
        &[
            (
                "Income",
                vec![
                    vec![Text("Date"), Text("Amount"), Text("Category")],
                    vec![Date(2026, 1, 5), Number(1500.0), Text("Salary")],
                    vec![Date(2026, 1, 20), Number(200.0), Text("Bonus")],
                    vec![Date(2026, 2, 5), Number(1500.0), Text("Salary")],
                ],
            ),
            (
                "Expenses",
                vec![vec![Text("Date"), Text("Amount"), Text("Note")]],
            ),
            (
                "Assets",
                vec![
                    vec![Text("Name"), Text("Value"), Text("Liquid")],
                    vec![Text("Cash"), Number(1000.0), Bool(true)],
                    vec![Text("Savings"), Number(5000.5), Bool(true)],
                    vec![Text("Gold"), Number(2500.0), Bool(false)],
                    vec![Text("Stock"), Number(3000.0), Bool(true)],
                    vec![Text("Bond"), Number(1200.0), Bool(false)],
                    vec![Text("Crypto"), Number(800.0), Blank],
                    vec![Text("House"), Text("unknown"), Bool(false)],
                ],
            ),
        ],
    );
    path
}

/// Cut one part of a workbook archive in half, leaving the rest intact.
///
/// `xl/worksheets/sheet2.xml` is the second sheet of a generated .xlsx.
pub fn truncate_part(path: &Path, part: &str) {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut parts = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let mut data = Vec::new();
        entry.read_to_end(&mut data).unwrap();
        if entry.name() == part {
            data.truncate(data.len() / 2);
        }
        parts.push((entry.name().to_string(), data));
    }
    assert!(
        parts.iter().any(|(name, _)| name == part),
        "{} not found in archive",
        part
    );
    drop(archive);

    let mut writer = ZipWriter::new(File::create(path).unwrap());
    for (name, data) in parts {
        writer.start_file(name, SimpleFileOptions::default()).unwrap();
        writer.write_all(&data).unwrap();
    }
    writer.finish().unwrap();
}

/// The finance workbook with its second sheet (Expenses) damaged
pub fn damaged_finance_workbook(dir: &TempDir) -> PathBuf {
    let path = finance_workbook(dir);
    truncate_part(&path, "xl/worksheets/sheet2.xml");
    path
}
