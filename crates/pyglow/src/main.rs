#![forbid(unsafe_code)]

//! `pyglow` command-line highlighter.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use pyglow::cli::Opts;
use pyglow::output;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter when `RUST_LOG` is unset.
const LOG_ENV: &str = "PYGLOW_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr; stdout carries the rendered output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(opts: &Opts) -> pyglow::Result<()> {
    let source = match &opts.input {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let rendered = output::render(&source, opts)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let opts = Opts::parse();
    debug!(?opts, "parsed options");

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "pyglow failed");
            eprintln!("pyglow: {err}");
            ExitCode::FAILURE
        }
    }
}
