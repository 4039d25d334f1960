use anyhow::Result;
use clap::Parser;
use djconvert::{ConversionConfig, ConversionPipeline, Format};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "djconvert")]
#[command(about = "Convert DJ libraries between DJUCED and rekordbox", long_about = None)]
struct Args {
    /// Library to convert
    input: String,

    /// Library file to create
    #[arg(short = 'o', long)]
    output: String,

    /// Format of the input library (djuced, rekordbox, rb)
    #[arg(long = "input-format", alias = "if")]
    input_format: Format,

    /// Format of the output library (djuced, rekordbox, rb)
    #[arg(long = "output-format", alias = "of")]
    output_format: Format,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Read the written library back and compare it with the input
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let input = PathBuf::from(shellexpand::tilde(&args.input).as_ref());
    let output = PathBuf::from(shellexpand::tilde(&args.output).as_ref());

    let config = ConversionConfig::new(input, args.input_format, output, args.output_format)
        .with_validation(args.validate);

    let pipeline = ConversionPipeline::new(config)?;
    let library = pipeline.run()?;

    log::info!(
        "Converted {} tracks, {} playlists, {} samples",
        library.track_count(),
        library.playlist_count(),
        library.sample_count()
    );
    log::info!("Finished!");

    Ok(())
}
