use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use std::fmt;

//==============================================================================
// Cell Values
//==============================================================================

/// A single decoded cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Blank cell
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// Date or date-time (Excel serial dates and ISO strings)
    DateTime(NaiveDateTime),
    /// Elapsed time, rendered as `[-]H:MM:SS` (or kept as the ISO string)
    Duration(String),
    /// Cell error such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => from_excel_datetime(dt),
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Duration(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

fn from_excel_datetime(dt: &ExcelDateTime) -> CellValue {
    if dt.is_duration() {
        return CellValue::Duration(format_duration(dt.as_f64()));
    }
    match dt.as_datetime() {
        Some(datetime) => CellValue::DateTime(datetime),
        // Serial outside chrono's range: keep the raw number
        None => CellValue::Float(dt.as_f64()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format a duration given in (fractional) days as `[-]H:MM:SS`
fn format_duration(days: f64) -> String {
    let total = (days * 86_400.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Format a number for display, removing unnecessary decimal places
pub fn format_number(n: f64) -> String {
    if !n.is_finite() || n.abs() >= 1e15 {
        return n.to_string();
    }
    // Round to 6 decimal places for display
    let rounded = (n * 1e6).round() / 1e6;
    let text = format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(dt) => {
                if dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0 {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Duration(s) | CellValue::Error(s) => f.write_str(s),
        }
    }
}

//==============================================================================
// Column Types
//==============================================================================

/// Scalar type inferred for a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "float64")]
    Float64,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "duration")]
    Duration,
    #[serde(rename = "text")]
    Text,
    /// No non-empty cell in the column
    #[serde(rename = "empty")]
    Empty,
}

impl ColumnType {
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Bool => "bool",
            ColumnType::DateTime => "datetime",
            ColumnType::Duration => "duration",
            ColumnType::Text => "text",
            ColumnType::Empty => "empty",
        }
    }

    /// Infer the type of a column from all of its cells
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut inference = TypeInference::default();
        for cell in cells {
            inference.observe(cell);
        }
        inference.finish()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Integral,
    Fractional,
    Bool,
    DateTime,
    Duration,
    Text,
}

impl Kind {
    fn of(cell: &CellValue) -> Option<Kind> {
        match cell {
            CellValue::Empty => None,
            CellValue::Int(_) => Some(Kind::Integral),
            // xlsx stores every number as a float
            CellValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(Kind::Integral),
            CellValue::Float(_) => Some(Kind::Fractional),
            CellValue::Bool(_) => Some(Kind::Bool),
            CellValue::DateTime(_) => Some(Kind::DateTime),
            CellValue::Duration(_) => Some(Kind::Duration),
            CellValue::Text(_) | CellValue::Error(_) => Some(Kind::Text),
        }
    }

    fn merge(self, other: Kind) -> Kind {
        match (self, other) {
            (a, b) if a == b => a,
            (Kind::Integral, Kind::Fractional) | (Kind::Fractional, Kind::Integral) => {
                Kind::Fractional
            }
            _ => Kind::Text,
        }
    }
}

/// Incremental column type inference.
///
/// Empty cells are skipped but promote an integral column to `float64`.
/// Mixed kinds collapse to `text`.
#[derive(Debug, Clone, Default)]
pub struct TypeInference {
    kind: Option<Kind>,
    saw_empty: bool,
}

impl TypeInference {
    pub fn observe(&mut self, cell: &CellValue) {
        match Kind::of(cell) {
            None => self.saw_empty = true,
            Some(kind) => {
                self.kind = Some(self.kind.map_or(kind, |current| current.merge(kind)));
            }
        }
    }

    pub fn finish(&self) -> ColumnType {
        match self.kind {
            None => ColumnType::Empty,
            Some(Kind::Integral) if self.saw_empty => ColumnType::Float64,
            Some(Kind::Integral) => ColumnType::Int64,
            Some(Kind::Fractional) => ColumnType::Float64,
            Some(Kind::Bool) => ColumnType::Bool,
            Some(Kind::DateTime) => ColumnType::DateTime,
            Some(Kind::Duration) => ColumnType::Duration,
            Some(Kind::Text) => ColumnType::Text,
        }
    }
}
