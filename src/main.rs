//! wavlsb CLI
//!
//! Recovers a message hidden in the least significant bits of a WAV file and writes it to
//! a text file.
//!
//! Exit codes: `0` on success, `1` for argument errors, `2` when a file cannot be opened or read
//! and `3` when the input is not a usable PCM WAV file.

use clap::Parser;
use std::{fs::File, path::PathBuf, process::ExitCode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wavlsb::{
    lsb::{Extraction, Package},
    wav::WavHeader,
    Error, Reveal, Summary,
};

#[derive(Parser)]
#[command(name = "wavlsb")]
#[command(about = "Recover a text message hidden in the LSBs of a WAV file", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of least significant bits per sample (1, 2 or 4)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=8))]
    bits: u8,

    /// Input WAV file
    input: PathBuf,

    /// Output text file, overwritten if it exists
    output: PathBuf,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not failures.
            let code = u8::from(e.use_stderr());
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(e.downcast_ref::<Error>().map_or(1, Error::exit_code))
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<Summary> {
    let extraction = Extraction::new(cli.bits)?;
    let input_error = |e: Error| {
        let context = if e.is_format_error() {
            format!("wav file {} has incompatible format", cli.input.display())
        } else {
            format!("could not read wav file {}", cli.input.display())
        };
        anyhow::Error::new(e).context(context)
    };

    info!("Reading {}", cli.input.display());
    let mut input = File::open(&cli.input).map_err(|source| Error::Open {
        path: cli.input.clone(),
        source,
    })?;

    let header = WavHeader::read(&mut input).map_err(input_error)?;
    header.ensure_pcm().map_err(input_error)?;
    debug!(?header, "parsed header");

    let package = Package::new(extraction, &header, input).map_err(input_error)?;

    let output = File::create(&cli.output).map_err(|source| Error::Create {
        path: cli.output.clone(),
        source,
    })?;

    info!("Writing message to {}", cli.output.display());
    Ok(package.reveal(output)?)
}
