//! `DataFrame` module for named column containers and dataset sources.
//!
//! Holds the shipment training table: four feature columns plus a price
//! target. Datasets come either from a headered CSV file or from the
//! built-in sample rows.

use crate::error::{Result, TarifaError};
use crate::primitives::{Matrix, Vector};
use std::path::Path;

/// Feature columns, in the fixed order the model is fit on.
///
/// The trainer and the predictor agree on this set out of band; the model
/// artifact carries no schema tag.
pub const FEATURE_COLUMNS: [&str; 4] = ["type", "length", "weight", "distance"];

/// Target column holding the price to learn.
pub const TARGET_COLUMN: &str = "price";

/// A minimal `DataFrame` with named f32 columns.
///
/// This is a thin wrapper around `Vec<(String, Vector<f32>)>` with
/// convenience methods for assembling feature matrices.
///
/// # Examples
///
/// ```
/// use tarifa::data::DataFrame;
/// use tarifa::primitives::Vector;
///
/// let columns = vec![
///     ("x".to_string(), Vector::from_slice(&[1.0, 2.0, 3.0])),
///     ("y".to_string(), Vector::from_slice(&[4.0, 5.0, 6.0])),
/// ];
/// let df = DataFrame::new(columns).expect("DataFrame creation should succeed with valid columns");
/// assert_eq!(df.shape(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DataFrame {
    columns: Vec<(String, Vector<f32>)>,
    n_rows: usize,
}

impl DataFrame {
    /// Creates a new `DataFrame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if columns have different lengths or if empty.
    pub fn new(columns: Vec<(String, Vector<f32>)>) -> Result<Self> {
        if columns.is_empty() {
            return Err("DataFrame must have at least one column".into());
        }

        let n_rows = columns[0].1.len();

        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err("All columns must have the same length".into());
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err("Duplicate column names not allowed".into());
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Loads a `DataFrame` from a headered CSV file.
    ///
    /// Every field is parsed as f32. The header row names the columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a field fails to
    /// parse; parse errors report the 1-based line and the column name.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| TarifaError::Other(format!("cannot open {}: {e}", path.display())))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TarifaError::CsvParse {
                line: 1,
                message: format!("cannot read header row: {e}"),
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut columns: Vec<(String, Vec<f32>)> =
            headers.iter().map(|h| (h.clone(), Vec::new())).collect();

        // Header is line 1, so data rows start at line 2.
        for (row_idx, record) in reader.records().enumerate() {
            let line = row_idx + 2;
            let record = record.map_err(|e| TarifaError::CsvParse {
                line,
                message: e.to_string(),
            })?;

            for (col_idx, field) in record.iter().enumerate() {
                let value: f32 = field.trim().parse().map_err(|_| TarifaError::CsvParse {
                    line,
                    message: format!(
                        "'{}' in column '{}' is not numeric",
                        field,
                        headers.get(col_idx).map_or("?", String::as_str)
                    ),
                })?;
                columns[col_idx].1.push(value);
            }
        }

        Self::new(
            columns
                .into_iter()
                .map(|(name, data)| (name, Vector::from_vec(data)))
                .collect(),
        )
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a column by name.
    ///
    /// # Errors
    ///
    /// Returns an error naming the column when it is absent.
    pub fn column(&self, name: &str) -> Result<&Vector<f32>> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, col)| col)
            .ok_or_else(|| TarifaError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Projects the `DataFrame` onto the named columns, preserving the
    /// order given.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is absent.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let mut selected = Vec::with_capacity(names.len());
        for &name in names {
            let col = self.column(name)?;
            selected.push((name.to_string(), col.clone()));
        }
        Self::new(selected)
    }

    /// Converts the `DataFrame` to a row-major feature matrix.
    ///
    /// Column order in the matrix follows column order in the frame.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix<f32> {
        let (n_rows, n_cols) = self.shape();
        let mut data = Vec::with_capacity(n_rows * n_cols);

        for row in 0..n_rows {
            for (_, col) in &self.columns {
                data.push(col[row]);
            }
        }

        Matrix::from_vec(n_rows, n_cols, data)
            .expect("data length is n_rows * n_cols by construction")
    }
}

/// The built-in sample order table.
///
/// Used by the trainer when no CSV dataset is supplied. Replace with real
/// order data for anything beyond a smoke-test model.
#[must_use]
pub fn sample_orders() -> DataFrame {
    let columns = vec![
        ("type".to_string(), Vector::from_slice(&[0.0, 1.0, 0.0])),
        ("length".to_string(), Vector::from_slice(&[10.0, 30.0, 5.0])),
        ("weight".to_string(), Vector::from_slice(&[5.0, 15.0, 2.0])),
        ("distance".to_string(), Vector::from_slice(&[3.0, 8.0, 1.0])),
        ("price".to_string(), Vector::from_slice(&[50.0, 100.0, 30.0])),
    ];
    DataFrame::new(columns).expect("sample columns are well formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn frame() -> DataFrame {
        sample_orders()
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = DataFrame::new(vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_ragged_columns() {
        let columns = vec![
            ("a".to_string(), Vector::from_slice(&[1.0, 2.0])),
            ("b".to_string(), Vector::from_slice(&[1.0])),
        ];
        assert!(DataFrame::new(columns).is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let columns = vec![
            ("a".to_string(), Vector::from_slice(&[1.0])),
            ("a".to_string(), Vector::from_slice(&[2.0])),
        ];
        assert!(DataFrame::new(columns).is_err());
    }

    #[test]
    fn test_sample_orders_shape() {
        let df = frame();
        assert_eq!(df.shape(), (3, 5));
        assert_eq!(
            df.column_names(),
            vec!["type", "length", "weight", "distance", "price"]
        );
    }

    #[test]
    fn test_column_missing() {
        let df = frame();
        let err = df.column("volume").unwrap_err();
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_select_preserves_order() {
        let df = frame();
        let selected = df.select(&FEATURE_COLUMNS).expect("all feature columns exist");
        assert_eq!(selected.column_names(), FEATURE_COLUMNS.to_vec());
        assert_eq!(selected.shape(), (3, 4));
    }

    #[test]
    fn test_select_missing_column() {
        let df = frame();
        assert!(df.select(&["type", "volume"]).is_err());
    }

    #[test]
    fn test_to_matrix_row_major() {
        let df = frame().select(&FEATURE_COLUMNS).expect("select succeeds");
        let m = df.to_matrix();
        assert_eq!(m.shape(), (3, 4));
        // Second row is (1, 30, 15, 8)
        assert!((m.get(1, 0) - 1.0).abs() < 1e-6);
        assert!((m.get(1, 1) - 30.0).abs() < 1e-6);
        assert!((m.get(1, 3) - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_csv() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "type,length,weight,distance,price").expect("write header");
        writeln!(file, "0,10,5,3,50").expect("write row");
        writeln!(file, "1,30,15,8,100").expect("write row");
        file.flush().expect("flush");

        let df = DataFrame::from_csv(file.path()).expect("CSV loads");
        assert_eq!(df.shape(), (2, 5));
        let price = df.column("price").expect("price column exists");
        assert!((price[1] - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_csv_non_numeric_field() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "type,length,weight,distance,price").expect("write header");
        writeln!(file, "0,ten,5,3,50").expect("write row");
        file.flush().expect("flush");

        let err = DataFrame::from_csv(file.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "unexpected message: {msg}");
        assert!(msg.contains("length"), "unexpected message: {msg}");
    }

    #[test]
    fn test_from_csv_missing_file() {
        let err = DataFrame::from_csv("/nonexistent/orders.csv").unwrap_err();
        assert!(err.to_string().contains("orders.csv"));
    }
}
