//! The `sprig` command line: script-file execution and an interactive
//! session, both thin wrappers around `sprig_eval`.

pub mod commands;
