// src/demos/propagation.rs
//! Calling accessors on a string fails two frames down; nothing in between
//! handles it.

use crate::console::Console;
use crate::console_log;
use crate::error::{Exception, try_catch};
use crate::policy::CatchPolicy;
use crate::value::Value;
use std::io::Write;

pub const DEFAULT_POLICY: CatchPolicy = CatchPolicy::Wrap;

fn foo<W: Write>(console: &mut Console<W>, data: &Value) -> Result<(), Exception> {
    let x = data.call_method("data", "x", vec![])?;
    let y = data.call_method("data", "y", vec![])?;
    let sum = x.add(&y);
    console_log!(console, "sum =", sum)?;
    Ok(())
}

fn bar<W: Write>(console: &mut Console<W>, data: &Value) -> Result<(), Exception> {
    foo(console, data)?;
    console_log!(console, "we never get here")?;
    Ok(())
}

pub fn run<W: Write>(
    console: &mut Console<W>,
    policy: CatchPolicy,
    valid_data: bool,
) -> Result<(), Exception> {
    let data = if valid_data {
        Value::record(1.0, 2.0)
    } else {
        Value::from("bad data")
    };

    try_catch(
        console,
        |console| bar(console, &data),
        |console, error| {
            let message = Value::from("Oopsy, something went wrong:").add(&error);
            policy.handle(console, message, error)
        },
    )?;

    console_log!(console, "we got here")?;
    Ok(())
}
