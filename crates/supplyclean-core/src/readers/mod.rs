mod config;
pub mod reader;
pub mod writer;

pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use reader::{read_sequential, FileFormat};
pub use writer::write_file;
