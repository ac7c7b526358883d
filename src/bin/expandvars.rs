use std::{
    error::Error,
    io::{self, Read, Write},
    process::ExitCode,
};

use clap::Parser;
use expandvars::{Expander, ProcessEnvProvider};
use tracing_subscriber::EnvFilter;

const LOG_VAR: &str = "EXPANDVARS_LOG";

/// Expands shell variable references in STRING, or in standard input when no
/// STRING is given, and writes the result to standard output.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Environment:\n  \
        EXPANDVARS_RECOVER_NULL   substituted for failing ${VAR:?} references\n  \
        EXPANDVARS_LOG            log filter, e.g. `debug`"
)]
struct Cli {
    /// Fail on references to unset variables.
    #[arg(short = 'u', long)]
    nounset: bool,
    /// Text to expand, joined by single spaces.
    #[arg(value_name = "STRING")]
    words: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("expandvars: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let expander = Expander::from_env().nounset(cli.nounset);
    let mut stdout = io::stdout().lock();
    if cli.words.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let output = expander.expand(&input, &mut ProcessEnvProvider)?;
        stdout.write_all(output.as_bytes())?;
    } else {
        let output = expander.expand(&cli.words.join(" "), &mut ProcessEnvProvider)?;
        writeln!(stdout, "{output}")?;
    }
    Ok(())
}
