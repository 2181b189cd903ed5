//! The CLI's two modes: run a script file, or an interactive session.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use sprig_chunk::Chunker;
use sprig_diagnostic::{Reporter, Verbosity};
use sprig_eval::{Console, Engine};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Settings shared by both modes.
#[derive(Copy, Clone)]
pub struct RunConfig {
    pub verbosity: Verbosity,
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            verbosity: Verbosity::default(),
            use_colors: true,
        }
    }
}

fn new_engine(config: RunConfig) -> Engine {
    let reporter = Rc::new(Reporter::new(config.verbosity, false).with_colors(config.use_colors));
    Engine::with_builtins(reporter, Console::Stdout)
}

/// Run one script file to completion. The process exit code is 1 when any
/// error was reported, 0 otherwise.
pub fn run_file(path: &Path, config: RunConfig) -> Result<i32, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let start = Instant::now();
    let mut engine = new_engine(config);
    let chunks = {
        let chunker = Chunker::new(engine.reporter());
        chunker.decode(&source)
    };
    engine.run(&chunks);
    let errors = engine.reporter().error_count();
    tracing::debug!(
        path = %path.display(),
        elapsed = ?start.elapsed(),
        errors,
        "script finished"
    );
    Ok(i32::from(errors > 0))
}

/// Interactive session. A block starts at the `>>> ` prompt; indented
/// continuation lines are collected at `... ` until an empty line executes
/// the block. `end`, `exit` or end-of-input leaves the session.
pub fn repl(config: RunConfig) -> i32 {
    let mut engine = new_engine(config);
    let stdin = io::stdin();
    let mut block = String::new();
    loop {
        let prompt = if block.is_empty() { ">>> " } else { "... " };
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if block.is_empty() {
            if matches!(line.trim(), "end" | "exit") {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            block.push_str(line);
            continue;
        }
        if !line.trim().is_empty() {
            block.push('\n');
            block.push_str(line);
            continue;
        }

        let chunks = {
            let chunker = Chunker::new(engine.reporter());
            chunker.decode(&block)
        };
        engine.run(&chunks);
        block.clear();
    }
    i32::from(engine.reporter().error_count() > 0)
}
