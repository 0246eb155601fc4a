use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value. CSV carries no type information, so
/// each field is inferred on load.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Infer a typed value from a raw CSV field.
    pub fn parse(s: &str) -> CellValue {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::Text(s.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric view of the cell, for threshold and coordinate checks.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Textual view of the cell; `None` for non-text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the value the way it is written back to CSV: `Null` becomes
/// an empty field.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – ordered columns, ordered rows
// ---------------------------------------------------------------------------

/// A rectangular table with named, order-preserving columns.
///
/// Produced once by the loader and never mutated afterwards; filters
/// derive new tables instead.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Table { columns, rows }
    }

    pub fn empty() -> Self {
        Table::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by its exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Derive a new table keeping only the rows satisfying `pred`.
    pub fn retain_rows<F>(&self, pred: F) -> Table
    where
        F: Fn(&[CellValue]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| pred(row.as_slice()))
            .cloned()
            .collect();
        Table::new(self.columns.clone(), rows)
    }

    /// Derive a new table without the columns that are null in every row.
    pub fn drop_empty_columns(&self) -> Table {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&c| self.rows.iter().any(|row| !row[c].is_null()))
            .collect();

        let columns = keep.iter().map(|&c| self.columns[c].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| keep.iter().map(|&c| row[c].clone()).collect())
            .collect();
        Table::new(columns, rows)
    }

    /// Serialize the table back to CSV text (header row first).
    pub fn to_csv_string(&self) -> Result<String, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read-only summary: row count, column names, per-column missing
    /// counts and inferred types.
    pub fn summary(&self) -> TableSummary {
        let columns = self
            .columns
            .iter()
            .enumerate()
            .map(|(c, name)| {
                let missing = self.rows.iter().filter(|row| row[c].is_null()).count();
                ColumnSummary {
                    name: name.clone(),
                    missing,
                    inferred: self.infer_column_type(c),
                }
            })
            .collect();
        TableSummary {
            rows: self.len(),
            columns,
        }
    }

    fn infer_column_type(&self, col: usize) -> ColumnType {
        let mut seen: Option<ColumnType> = None;
        for row in &self.rows {
            let kind = match &row[col] {
                CellValue::Null => continue,
                CellValue::Integer(_) => ColumnType::Integer,
                CellValue::Float(_) => ColumnType::Float,
                CellValue::Bool(_) => ColumnType::Bool,
                CellValue::Text(_) => ColumnType::Text,
            };
            seen = Some(match seen {
                None => kind,
                Some(prev) if prev == kind => kind,
                // Integer and Float cells coexist as a numeric column.
                Some(ColumnType::Integer) if kind == ColumnType::Float => ColumnType::Float,
                Some(ColumnType::Float) if kind == ColumnType::Integer => ColumnType::Float,
                Some(_) => return ColumnType::Mixed,
            });
        }
        seen.unwrap_or(ColumnType::Empty)
    }
}

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Bool,
    Text,
    Mixed,
    Empty,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::Text => "text",
            ColumnType::Mixed => "mixed",
            ColumnType::Empty => "empty",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: String,
    pub missing: usize,
    pub inferred: ColumnType,
}

#[derive(Debug, Clone)]
pub struct TableSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}
