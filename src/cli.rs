use audio_transfer::{Gain, TransferConfig, MAX_BLOCK_SIZE};
use clap::{
    app_from_crate, crate_authors, crate_description, crate_name, crate_version, value_t, App,
    Arg, ArgMatches,
};
use std::path::PathBuf;

pub const DEFAULT_GAIN: &str = "1.0";
pub const DEFAULT_BLOCK_SIZE: &str = "1024";

pub fn app<'a, 'b>() -> App<'a, 'b> {
    app_from_crate!()
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("SOURCE")
                .help("Sound file to read."),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("DEST")
                .help("Sound file to write. The extension picks the format."),
        )
        .arg(
            Arg::with_name("gain")
                .short("g")
                .long("gain")
                .value_name("GAIN")
                .default_value(DEFAULT_GAIN)
                .allow_hyphen_values(true)
                .help("Multiplier applied to every sample."),
        )
        .arg(
            Arg::with_name("block-size")
                .short("b")
                .long("block-size")
                .value_name("FRAMES")
                .default_value(DEFAULT_BLOCK_SIZE)
                .validator(block_size)
                .help("Frames moved per read/write."),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Print file properties and transfer statistics."),
        )
        .arg(
            Arg::with_name("info")
                .short("i")
                .long("info")
                .conflicts_with("output")
                .help("Print source properties and the largest safe gain, then exit."),
        )
}

fn block_size(v: String) -> Result<(), String> {
    match v.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(n) if n > MAX_BLOCK_SIZE => Err(format!("must be at most {}", MAX_BLOCK_SIZE)),
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Missing {
    Source,
    Destination,
}

impl Missing {
    pub fn message(self) -> &'static str {
        match self {
            Missing::Source => "No file to load specified, use the -f flag",
            Missing::Destination => "No output file specified, use the -o flag",
        }
    }
}

#[derive(Debug)]
pub enum ArgError {
    Missing(Missing),
    Invalid(clap::Error),
}

impl From<clap::Error> for ArgError {
    fn from(e: clap::Error) -> Self {
        ArgError::Invalid(e)
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Info {
        source: PathBuf,
        block_size: usize,
        gain: Gain,
    },
    Process {
        source: PathBuf,
        destination: PathBuf,
        config: TransferConfig,
    },
}

#[derive(Debug, PartialEq)]
pub struct Args {
    pub command: Command,
    pub verbose: bool,
}

pub fn parse(matches: &ArgMatches) -> Result<Args, ArgError> {
    let gain = Gain(value_t!(matches, "gain", f32)?);
    let block_size = value_t!(matches, "block-size", usize)?;
    let verbose = matches.is_present("verbose");

    let source = matches
        .value_of_os("file")
        .map(PathBuf::from)
        .ok_or(ArgError::Missing(Missing::Source))?;

    let command = if matches.is_present("info") {
        Command::Info {
            source,
            block_size,
            gain,
        }
    } else {
        let destination = matches
            .value_of_os("output")
            .map(PathBuf::from)
            .ok_or(ArgError::Missing(Missing::Destination))?;
        let config = TransferConfig::new(block_size, gain).map_err(|e| {
            clap::Error::with_description(&e.to_string(), clap::ErrorKind::InvalidValue)
        })?;
        Command::Process {
            source,
            destination,
            config,
        }
    };

    Ok(Args { command, verbose })
}
