use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sprig_diagnostic::Verbosity;
use tracing_subscriber::EnvFilter;

use sprigc::commands::{repl, run_file, RunConfig};

const USAGE: &str = "\
Sprig interpreter

Usage:
  sprig                 start an interactive session
  sprig repl            start an interactive session
  sprig run <file>      run a script
  sprig <file.sprig>    run a script

Options:
  -v, --verbose         enable debug diagnostics
      --no-color        disable ANSI colors
  -h, --help            show this help
";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let mut verbose = false;
    let mut use_colors = true;
    let mut rest: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--no-color" => use_colors = false,
            "-h" | "--help" | "help" => {
                print!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ => rest.push(arg),
        }
    }
    init_tracing(verbose);
    let config = RunConfig {
        verbosity: if verbose {
            Verbosity::Debug
        } else {
            Verbosity::default()
        },
        use_colors,
    };

    let code = match rest.as_slice() {
        [] => repl(config),
        [mode] if mode == "repl" => repl(config),
        [mode, path] if mode == "run" => run_or_report(&PathBuf::from(path), config),
        [path] if path.ends_with(".sprig") => run_or_report(&PathBuf::from(path), config),
        _ => {
            eprint!("{USAGE}");
            2
        }
    };
    ExitCode::from(code as u8)
}

fn run_or_report(path: &Path, config: RunConfig) -> i32 {
    match run_file(path, config) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    }
}
