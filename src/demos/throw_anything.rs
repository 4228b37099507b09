// src/demos/throw_anything.rs
//! Any value can be raised, and one handler can catch all of them.

use crate::console::Console;
use crate::console_log;
use crate::error::{ErrorKind, ErrorObject, Exception, throw, try_catch};
use crate::value::Value;
use std::io::Write;

fn test_error<W: Write>(console: &mut Console<W>, err: Value) -> Result<(), Exception> {
    try_catch(
        console,
        |_| throw(err),
        |console, error| {
            console_log!(console, "ERROR:", error)?;
            Ok(())
        },
    )
}

pub fn run<W: Write>(console: &mut Console<W>) -> Result<(), Exception> {
    test_error(console, Value::from("An error has occurred"))?;
    test_error(console, Value::from(true))?;
    test_error(
        console,
        ErrorObject::new(ErrorKind::Error, "I detect an error!").into(),
    )?;
    test_error(
        console,
        ErrorObject::new(ErrorKind::SyntaxError, "Your syntax is no good").into(),
    )?;
    Ok(())
}
