//! Conversion orchestration

pub mod config;
pub mod pipeline;

pub use config::ConversionConfig;
pub use pipeline::ConversionPipeline;
