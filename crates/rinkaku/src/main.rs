//! rinkaku: edge-detect an image from the command line.
//!
//! Loads the input image, runs the row-parallel grayscale and 3x3
//! edge-convolution pipeline, and writes the result as a JPEG.
//!
//! # Usage
//!
//! ```text
//! rinkaku --input photo.png --output edges.jpg --quality 85
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rinkaku_pipeline::{PipelineConfig, PipelineError, process};

/// Apply 3x3 edge detection to an image and save the result as JPEG.
#[derive(Parser)]
#[command(name = "rinkaku", version)]
struct Cli {
    /// Input image path (PNG, JPEG, BMP, WebP).
    #[arg(long, default_value = "input.jpg")]
    input: PathBuf,

    /// Output image path.
    #[arg(long, default_value = "output.jpg")]
    output: PathBuf,

    /// JPEG quality for the output image.
    #[arg(
        long,
        default_value_t = PipelineConfig::DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100),
    )]
    quality: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let image_bytes = match std::fs::read(&cli.input) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Error loading image '{}': {err}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    let config = PipelineConfig {
        quality: cli.quality,
    };
    let result = match process(&image_bytes, &config) {
        Ok(result) => result,
        Err(err @ PipelineError::ImageEncode(_)) => {
            eprintln!("Error saving image '{}': {err}", cli.output.display());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Error loading image '{}': {err}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Processed {}x{} image at quality {}",
        result.dimensions.width, result.dimensions.height, cli.quality,
    );

    if let Err(err) = std::fs::write(&cli.output, &result.jpeg) {
        eprintln!("Error saving image '{}': {err}", cli.output.display());
        return ExitCode::FAILURE;
    }

    println!("Edge detection applied and saved to {}", cli.output.display());
    ExitCode::SUCCESS
}
