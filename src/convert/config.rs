//! Conversion configuration

use crate::format::Format;
use std::path::PathBuf;

/// Configuration for one conversion run
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Library to read
    pub input: PathBuf,

    pub input_format: Format,

    /// Library to create
    pub output: PathBuf,

    pub output_format: Format,

    /// Re-read the written library and compare it with the source
    pub validate: bool,
}

impl ConversionConfig {
    /// Create a new conversion configuration
    pub fn new(
        input: PathBuf,
        input_format: Format,
        output: PathBuf,
        output_format: Format,
    ) -> Self {
        Self {
            input,
            input_format,
            output,
            output_format,
            validate: false,
        }
    }

    /// Enable post-write validation
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
