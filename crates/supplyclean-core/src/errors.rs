use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    /// Column not found in the dataset
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// The store has no table under this name
    #[error("Table '{0}' not found in store")]
    TableNotFound(String),

    /// A failure while handling a specific table
    #[error("Failed to clean table '{table}': {source}")]
    InvalidTable {
        table: String,
        #[source]
        source: Box<CleanError>,
    },

    /// The Arrow kernel produced an error (e.g., unsupported cast)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Parquet encoding or decoding error
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// CSV reading or IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A CSV file without a header line
    #[error("File '{0}' is empty")]
    EmptyFile(String),
}

impl CleanError {
    /// Attach the table name to an error raised while processing that table.
    pub fn in_table(self, table: &str) -> Self {
        match self {
            CleanError::InvalidTable { .. } => self,
            other => CleanError::InvalidTable {
                table: table.to_string(),
                source: Box::new(other),
            },
        }
    }
}
