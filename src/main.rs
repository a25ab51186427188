mod cli;

use anyhow::Result;
use audio_file::{Codec, FrameSink, FrameSource, Properties};
use audio_transfer::{process, scan_peak, Gain, Stats, TransferConfig};
use cli::{ArgError, Command};
use log::Level;
use std::path::Path;

fn main() -> Result<()> {
    let matches = cli::app().get_matches();
    let args = match cli::parse(&matches) {
        Ok(args) => args,
        Err(ArgError::Missing(missing)) => {
            println!("{}", missing.message());
            println!("{}", matches.usage());
            std::process::exit(1);
        }
        Err(ArgError::Invalid(e)) => e.exit(),
    };

    let level = if args.verbose {
        Level::Debug
    } else {
        Level::Warn
    };
    simple_logger::init_with_level(level)?;

    let codec = Codec::init();
    let result = match &args.command {
        Command::Info {
            source,
            block_size,
            gain,
        } => info(&codec, source, *block_size, *gain),
        Command::Process {
            source,
            destination,
            config,
        } => run(&codec, source, destination, config, args.verbose),
    };
    // Teardown runs even after a failure, but the first error is the one reported.
    let finished = codec.finish();
    result?;
    finished?;

    Ok(())
}

fn run(
    codec: &Codec,
    source: &Path,
    destination: &Path,
    config: &TransferConfig,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("Block Size: {}", config.block_size());
    }

    let input = codec.open(source)?;
    if verbose {
        print_properties(input.path(), input.properties());
    }

    let output = match codec.create(input.properties(), destination) {
        Ok(output) => output,
        Err(e) => {
            if let Err(close_error) = input.close() {
                log::error!("{}", close_error);
            }
            return Err(e.into());
        }
    };
    let output_path = output.path().to_path_buf();
    let output_properties = *output.properties();

    let stats = process(input, output, config)?;

    if stats.clipped() {
        log::warn!(
            "Peak {} exceeds full scale in {}",
            stats.peak,
            output_path.display()
        );
    }
    if verbose {
        print_properties(&output_path, &output_properties);
        print_stats(&stats);
    }

    Ok(())
}

fn info(codec: &Codec, source: &Path, block_size: usize, gain: Gain) -> Result<()> {
    let mut input = codec.open(source)?;
    print_properties(input.path(), input.properties());
    println!("Sample Type: {}", input.properties().sample_type);
    println!("Frames: {}", input.frames());

    let peak = scan_peak(&mut input, block_size);
    let closed = input.close();
    let peak = peak?;
    closed?;

    println!("Peak: {}", peak);
    println!("Max Gain: {}", Gain::max_for_peak(peak).0);
    println!("Adjusted Gain: {}", gain.0);
    Ok(())
}

fn print_properties(path: &Path, properties: &Properties) {
    println!("File: {}", path.display());
    println!("Sample Rate: {}", properties.sample_rate);
    println!("Channel Count: {}", properties.channels);
}

fn print_stats(stats: &Stats) {
    println!("Blocks: {}", stats.blocks);
    println!("Frames: {}", stats.frames);
    println!("Bytes: {}", stats.bytes());
    println!("Peak: {}", stats.peak);
}
