//! Error types for tarifa operations.
//!
//! Provides error context for library consumers.

use std::fmt;

/// Main error type for tarifa operations.
///
/// Covers data-shape problems, dataset loading failures, and model
/// persistence failures.
///
/// # Examples
///
/// ```
/// use tarifa::error::TarifaError;
///
/// let err = TarifaError::MissingColumn {
///     name: "price".to_string(),
/// };
/// assert!(err.to_string().contains("price"));
/// ```
#[derive(Debug)]
pub enum TarifaError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A named column is absent from a `DataFrame`.
    MissingColumn {
        /// Column name that was requested
        name: String,
    },

    /// A CSV field could not be parsed.
    CsvParse {
        /// 1-based line number in the file (header is line 1)
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Prediction was requested before the model was fitted.
    NotFitted,

    /// Feature table width does not match what the model was fit on.
    FeatureCountMismatch {
        /// Feature count the model was trained with
        expected: usize,
        /// Feature count of the supplied table
        actual: usize,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for TarifaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TarifaError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            TarifaError::MissingColumn { name } => {
                write!(f, "column '{name}' not found in dataset")
            }
            TarifaError::CsvParse { line, message } => {
                write!(f, "CSV parse error at line {line}: {message}")
            }
            TarifaError::NotFitted => {
                write!(f, "model has not been fitted")
            }
            TarifaError::FeatureCountMismatch { expected, actual } => {
                write!(
                    f,
                    "feature count mismatch: model was fit on {expected} features, got {actual}"
                )
            }
            TarifaError::Io(e) => write!(f, "I/O error: {e}"),
            TarifaError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            TarifaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for TarifaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TarifaError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TarifaError {
    fn from(err: std::io::Error) -> Self {
        TarifaError::Io(err)
    }
}

impl From<&str> for TarifaError {
    fn from(msg: &str) -> Self {
        TarifaError::Other(msg.to_string())
    }
}

impl From<String> for TarifaError {
    fn from(msg: String) -> Self {
        TarifaError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, TarifaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = TarifaError::DimensionMismatch {
            expected: "3 rows".to_string(),
            actual: "5 rows".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("3 rows"));
        assert!(err.to_string().contains("5 rows"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = TarifaError::MissingColumn {
            name: "distance".to_string(),
        };
        assert!(err.to_string().contains("distance"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_csv_parse_display() {
        let err = TarifaError::CsvParse {
            line: 4,
            message: "'abc' is not numeric".to_string(),
        };
        assert!(err.to_string().contains("line 4"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_feature_count_mismatch_display() {
        let err = TarifaError::FeatureCountMismatch {
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("4"));
        assert!(msg.contains("3"));
        assert!(msg.contains("feature count"));
    }

    #[test]
    fn test_from_str() {
        let err: TarifaError = "test error".into();
        assert!(matches!(err, TarifaError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TarifaError = io_err.into();
        assert!(matches!(err, TarifaError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = TarifaError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = TarifaError::NotFitted;
        assert!(err.source().is_none());
    }
}
