// src/console.rs
use crate::value::Value;
use std::io::{self, Write};

/// `console.log` over any byte sink.
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Console::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console { out }
    }

    /// Writes one line: every argument rendered, separated by a single space.
    pub fn log(&mut self, args: &[Value]) -> io::Result<()> {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                write!(self.out, " ")?;
            }
            write!(self.out, "{}", arg)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `console.log(a, b, ...)` with each argument converted into a `Value`.
#[macro_export]
macro_rules! console_log {
    ($console:expr $(, $arg:expr)* $(,)?) => {
        $console.log(&[$($crate::value::Value::from($arg)),*])
    };
}
