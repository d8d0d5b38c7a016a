use crate::Error;
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{Read, Write};

/// A 2-D table of numbers with labeled rows and columns.
///
/// Undefined cells (missing data, undefined ratios) are stored as NaN. When written to CSV the
/// row labels occupy the first column, the column labels the header row, and NaN cells are left
/// empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledTable {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    cells: Vec<Vec<f64>>,
}

impl LabeledTable {
    /// Creates a table with the given rows and no columns.
    pub fn new(row_labels: Vec<String>) -> Self {
        let cells = vec![Vec::new(); row_labels.len()];
        LabeledTable {
            row_labels,
            column_labels: Vec::new(),
            cells,
        }
    }

    /// Creates a table of the given shape with every cell undefined.
    pub fn filled_with_nan(row_labels: Vec<String>, column_labels: Vec<String>) -> Self {
        let cells = vec![vec![f64::NAN; column_labels.len()]; row_labels.len()];
        LabeledTable {
            row_labels,
            column_labels,
            cells,
        }
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    pub fn row_index(&self, label: &str) -> Option<usize> {
        self.row_labels.iter().position(|row| row == label)
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.column_labels.iter().position(|column| column == label)
    }

    pub fn has_column(&self, label: &str) -> bool {
        self.column_index(label).is_some()
    }

    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let row_index = self.row_index(row)?;
        let column_index = self.column_index(column)?;
        Some(self.cells[row_index][column_index])
    }

    /// Sets an existing cell. Returns `false` if either label is unknown.
    pub fn set(&mut self, row: &str, column: &str, value: f64) -> bool {
        match (self.row_index(row), self.column_index(column)) {
            (Some(row_index), Some(column_index)) => {
                self.cells[row_index][column_index] = value;
                true
            }
            _ => false,
        }
    }

    /// Values of one row, in column order.
    pub fn row_values(&self, label: &str) -> Option<&[f64]> {
        self.row_index(label).map(|index| self.cells[index].as_slice())
    }

    /// Values of one column, in row order.
    pub fn column_values(&self, label: &str) -> Option<Vec<f64>> {
        let column_index = self.column_index(label)?;
        Some(self.cells.iter().map(|row| row[column_index]).collect())
    }

    /// Appends a column, or replaces it if a column with this label already exists.
    pub fn insert_column(&mut self, label: &str, values: &[f64]) -> Result<(), Error> {
        if values.len() != self.row_labels.len() {
            return Err(Error::ParserError(format!(
                "Column '{}' has {} values but the table has {} rows",
                label,
                values.len(),
                self.row_labels.len()
            )));
        }

        match self.column_index(label) {
            Some(column_index) => {
                for (row, value) in self.cells.iter_mut().zip(values) {
                    row[column_index] = *value;
                }
            }
            None => {
                self.column_labels.push(label.to_string());
                for (row, value) in self.cells.iter_mut().zip(values) {
                    row.push(*value);
                }
            }
        }

        Ok(())
    }

    /// Appends a row filled with NaN if the label is not present yet.
    pub fn ensure_row(&mut self, label: &str) -> usize {
        if let Some(index) = self.row_index(label) {
            return index;
        }
        self.row_labels.push(label.to_string());
        self.cells.push(vec![f64::NAN; self.column_labels.len()]);
        self.row_labels.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty() || self.column_labels.is_empty()
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);

        let mut header = vec![String::new()];
        header.extend(self.column_labels.iter().cloned());
        csv_writer.write_record(&header)?;

        for (label, row) in self.row_labels.iter().zip(&self.cells) {
            let mut record = vec![label.clone()];
            record.extend(row.iter().map(|value| format_cell(*value)));
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn read_csv<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let column_labels: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        let mut row_labels = Vec::new();
        let mut cells = Vec::new();

        for record in csv_reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let label = record
                .get(0)
                .ok_or_else(|| Error::ParserError("Missing row label".to_string()))?;

            let row = record
                .iter()
                .skip(1)
                .map(parse_cell)
                .collect::<Result<Vec<f64>, Error>>()?;

            row_labels.push(label.to_string());
            cells.push(row);
        }

        Ok(LabeledTable {
            row_labels,
            column_labels,
            cells,
        })
    }
}

fn format_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn parse_cell(cell: &str) -> Result<f64, Error> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .map_err(|e| Error::ParserError(format!("Invalid number '{}': {}", cell, e)))
}
