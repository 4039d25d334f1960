//! Main conversion pipeline

use super::config::ConversionConfig;
use crate::error::ConvertError;
use crate::format::{LibraryReader, LibraryWriter};
use crate::model::Library;
use crate::validation::validate_roundtrip;
use anyhow::Result;

/// Reads a library in one format and writes it in another
pub struct ConversionPipeline {
    config: ConversionConfig,
    reader: Box<dyn LibraryReader>,
    writer: Box<dyn LibraryWriter>,
}

impl ConversionPipeline {
    /// Resolve the reader and writer for the configured formats
    ///
    /// Fails before any file is touched if the input format cannot be read.
    pub fn new(config: ConversionConfig) -> Result<Self> {
        if !config.input_format.can_read() {
            return Err(ConvertError::ReadNotSupported(config.input_format.name()).into());
        }

        let reader = config.input_format.reader();
        let writer = config.output_format.writer();

        Ok(Self {
            config,
            reader,
            writer,
        })
    }

    /// Run the complete conversion and return the converted library
    pub fn run(&self) -> Result<Library> {
        log::info!(
            "Converting {} library {:?} to {} library {:?}",
            self.config.input_format,
            self.config.input,
            self.config.output_format,
            self.config.output
        );

        log::info!("Parsing original database...");
        let library = self.reader.parse(&self.config.input)?;

        log::info!("Writing new database...");
        self.writer.write(&self.config.output, &library)?;

        if self.config.validate {
            if self.config.output_format.can_read() {
                log::info!("Running post-write validation...");
                let written = self.config.output_format.reader().parse(&self.config.output)?;
                validate_roundtrip(&library, &written)?;
                log::info!("Validation passed");
            } else {
                log::warn!(
                    "Skipping validation: {} libraries cannot be read back",
                    self.config.output_format
                );
            }
        }

        Ok(library)
    }
}
