//! Console sink for language-level output and line input.
//!
//! Enum dispatch keeps this frequently-hit path free of vtable indirection.
//! `out`, `input` prompts, and inspection descriptions all go through here,
//! so tests can capture them with [`Console::buffer`] and script the lines
//! `input` reads.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub enum Console {
    /// Writes to stdout, reads from stdin (default).
    Stdout,
    /// Captures output and serves scripted input (tests).
    Buffer(BufferConsole),
    /// Discards output, reads nothing.
    Silent,
}

impl Console {
    /// A capturing console for tests.
    pub fn buffer() -> Self {
        Console::Buffer(BufferConsole::default())
    }

    pub fn println(&self, msg: &str) {
        match self {
            Console::Stdout => println!("{msg}"),
            Console::Buffer(buffer) => buffer.println(msg),
            Console::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Console::Stdout => {
                print!("{msg}");
                let _ = io::stdout().flush();
            }
            Console::Buffer(buffer) => buffer.print(msg),
            Console::Silent => {}
        }
    }

    /// Read one line, without its terminator. Empty on EOF or when no
    /// scripted input remains.
    pub fn read_line(&self) -> String {
        match self {
            Console::Stdout => {
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line).is_err() {
                    return String::new();
                }
                line.trim_end_matches(['\n', '\r']).to_string()
            }
            Console::Buffer(buffer) => buffer.pop_input(),
            Console::Silent => String::new(),
        }
    }

    /// Everything captured so far. Empty for non-capturing consoles.
    pub fn output(&self) -> String {
        match self {
            Console::Buffer(buffer) => buffer.output(),
            Console::Stdout | Console::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Console::Buffer(buffer) = self {
            buffer.clear();
        }
    }

    /// Queue a line for a later [`read_line`]. No-op for non-capturing
    /// consoles.
    ///
    /// [`read_line`]: Console::read_line
    pub fn push_input(&self, line: impl Into<String>) {
        if let Console::Buffer(buffer) = self {
            buffer.push_input(line.into());
        }
    }
}

/// Backing store for [`Console::Buffer`].
#[derive(Default)]
pub struct BufferConsole {
    output: RefCell<String>,
    input: RefCell<VecDeque<String>>,
}

impl BufferConsole {
    fn println(&self, msg: &str) {
        let mut output = self.output.borrow_mut();
        output.push_str(msg);
        output.push('\n');
    }

    fn print(&self, msg: &str) {
        self.output.borrow_mut().push_str(msg);
    }

    fn output(&self) -> String {
        self.output.borrow().clone()
    }

    fn clear(&self) {
        self.output.borrow_mut().clear();
    }

    fn push_input(&self, line: String) {
        self.input.borrow_mut().push_back(line);
    }

    fn pop_input(&self) -> String {
        self.input.borrow_mut().pop_front().unwrap_or_default()
    }
}
