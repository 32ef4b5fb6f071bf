use std::path::Path;

use tracing::{error, info};

use pixelart::{
    InputFormat, PixelArtParams, load_preset, process_directory_to_path, process_file_to_path,
};

use super::args::CliArgs;
use super::errors::AppError;

/// Resolve the effective parameters: a preset wins over individual flags.
fn resolve_params(args: &CliArgs) -> Result<PixelArtParams, AppError> {
    let params = match &args.preset {
        Some(path) => load_preset(path)?,
        None => PixelArtParams::new(args.pixel_size, args.shape),
    };
    params.validate()?;
    Ok(params)
}

fn process_single_file(input: &Path, output: &Path, params: &PixelArtParams) -> Result<(), AppError> {
    if !InputFormat::matches_extension(input) {
        return Err(AppError::UnsupportedInput {
            path: input.display().to_string(),
        });
    }

    let art = process_file_to_path(input, output, params)?;
    if art.resized() {
        info!("Image resized to standard smartphone wallpaper dimensions.");
    }
    info!(
        "Pixelated {}x{} image with {}px {} cells",
        art.image.width(),
        art.image.height(),
        params.pixel_size,
        params.shape.as_str()
    );
    Ok(())
}

fn run_inner(args: CliArgs) -> Result<(), AppError> {
    let params = resolve_params(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(&input_dir, &output_dir, &params, args.batch)?;

        println!(
            "Processed: {}, Skipped: {}, Errors: {}",
            report.processed, report.skipped, report.errors
        );
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;

        process_single_file(&input, &args.output, &params)?;
        info!("Successfully processed: {:?} -> {:?}", input, args.output);
        println!("Your pixel art is ready: {}", args.output.display());
    }

    Ok(())
}

/// User-facing text for a failed run.
pub fn failure_message(err: &AppError) -> String {
    format!("An error occurred: {}", err)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Single reporting boundary: nothing below recovers from a failure
    run_inner(args).map_err(|e| {
        let message = failure_message(&e);
        error!("{}", message);
        eprintln!("{}", message);
        e.into()
    })
}
