use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Required column '{0}' not found in the price file header.")]
    MissingColumn(String),

    #[error("Line {line}: column '{column}' value '{value}' is not a number.")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },

    #[error("The price file contains no data rows.")]
    Empty,

    #[error("Invalid price table: {0}")]
    Core(#[from] core_types::CoreError),
}
