use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use supplyclean_core::readers::{ReaderConfig, ReaderConfigBuilder};
use supplyclean_core::FileFormat;

use crate::errors::ConfigError;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub store: Store,
    pub ingest: Option<Ingest>,
    #[serde(default)]
    pub cleaning: Cleaning,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Deserialize)]
pub struct Store {
    pub dir: PathBuf,
    #[serde(default)]
    pub format: StoreFormat,
    /// Rows per decoded batch when reading tables.
    pub batch_size: Option<usize>,
    /// Single-byte CSV field delimiter.
    pub delimiter: Option<char>,
}

impl Store {
    pub fn reader_config(&self) -> Result<ReaderConfig, ConfigError> {
        let mut builder = ReaderConfigBuilder::new();
        if let Some(batch_size) = self.batch_size {
            builder = builder.with_batch_size(batch_size);
        }
        if let Some(delimiter) = self.delimiter {
            let byte = u8::try_from(delimiter).map_err(|_| ConfigError::InvalidDelimiter { delimiter })?;
            builder = builder.with_delimiter(byte);
        }
        Ok(builder.build())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFormat {
    #[default]
    Csv,
    Parquet,
}

impl From<StoreFormat> for FileFormat {
    fn from(format: StoreFormat) -> Self {
        match format {
            StoreFormat::Csv => FileFormat::Csv,
            StoreFormat::Parquet => FileFormat::Parquet,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Ingest {
    pub source_dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct Cleaning {
    #[serde(default)]
    pub parallel: bool,
    /// `YYYY-MM-DD`; defaults to the local date at run time.
    pub reference_date: Option<String>,
}

impl Cleaning {
    pub fn reference_date(&self) -> Result<Option<NaiveDate>, ConfigError> {
        self.reference_date
            .as_deref()
            .map(|value| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                    ConfigError::InvalidDate {
                        value: value.to_string(),
                    }
                })
            })
            .transpose()
    }
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_file() -> String {
    "supplyclean.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn parse_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config_str(&config_str)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config_str(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.cleaning.reference_date()?;
    config.store.reader_config()?;
    Ok(config)
}
