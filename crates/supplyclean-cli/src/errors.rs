use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: '{path}'")]
    FileNotFound { path: String },
    #[error("Invalid reference_date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("Command '{command}' needs an [{section}] section in the config")]
    MissingSection { command: String, section: String },
    #[error("CSV delimiter '{delimiter}' must be a single-byte character")]
    InvalidDelimiter { delimiter: char },
    #[error("Invalid log level '{level}'")]
    InvalidLogLevel { level: String },
}
