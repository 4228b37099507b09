// src/demos/division.rs
//! The divisor is checked up front and a bare string is raised on zero.

use crate::console::Console;
use crate::console_log;
use crate::error::{Exception, throw, try_catch};
use crate::policy::CatchPolicy;
use crate::value::Value;
use std::io::Write;

pub const DEFAULT_POLICY: CatchPolicy = CatchPolicy::Swallow;

pub const DIVIDE_BY_ZERO: &str = "You cannot divide by zero!";

fn foo<W: Write>(console: &mut Console<W>, data: &Value) -> Result<Value, Exception> {
    if data
        .call_method("data", "y", vec![])?
        .strict_equals(&Value::Number(0.0))
    {
        return throw(DIVIDE_BY_ZERO);
    }
    let x = data.call_method("data", "x", vec![])?;
    let y = data.call_method("data", "y", vec![])?;
    let result = x.divide(&y);
    console_log!(console, Value::from("result = ").add(&result))?;
    Ok(result)
}

fn bar<W: Write>(console: &mut Console<W>, data: &Value) -> Result<Value, Exception> {
    let x = foo(console, data)?;
    console_log!(console, "we never get here")?;
    Ok(x)
}

pub fn run<W: Write>(
    console: &mut Console<W>,
    policy: CatchPolicy,
    dividend: f64,
    divisor: f64,
) -> Result<(), Exception> {
    try_catch(
        console,
        |console| {
            let data = Value::record(dividend, divisor);
            let answer = bar(console, &data)?;
            log::debug!("answer = {}", answer);
            Ok(())
        },
        |console, error| {
            let message = Value::from("Oops, something went wrong: ").add(&error);
            policy.handle(console, message, error)
        },
    )?;

    console_log!(
        console,
        "I really want to see this message, even if we failed above"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(policy: CatchPolicy, divisor: f64) -> (String, Result<(), Exception>) {
        let mut console = Console::new(Vec::new());
        let result = run(&mut console, policy, 3.0, divisor);
        (String::from_utf8(console.into_inner()).unwrap(), result)
    }

    #[test]
    fn zero_divisor_is_caught_and_execution_continues() {
        let (out, result) = output(CatchPolicy::Swallow, 0.0);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "Oops, something went wrong: You cannot divide by zero!\n\
             I really want to see this message, even if we failed above\n"
        );
    }

    #[test]
    fn negative_zero_is_still_zero() {
        let (out, _) = output(CatchPolicy::Swallow, -0.0);
        assert!(out.starts_with("Oops, something went wrong: You cannot divide by zero!"));
        assert!(!out.contains("result = "));
    }

    #[test]
    fn nonzero_divisor_computes_the_quotient() {
        let (out, result) = output(CatchPolicy::Swallow, 2.0);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "result = 1.5\nwe never get here\n\
             I really want to see this message, even if we failed above\n"
        );
    }

    #[test]
    fn rethrow_original_raises_the_bare_string() {
        let (out, result) = output(CatchPolicy::RethrowOriginal, 0.0);
        assert_eq!(out, "Oops, something went wrong: You cannot divide by zero!\n");
        match result {
            Err(Exception::Thrown(Value::String(s))) => assert_eq!(s, DIVIDE_BY_ZERO),
            other => panic!("expected the original string, got {:?}", other),
        }
    }

    #[test]
    fn wrap_raises_an_error_around_the_message() {
        let (_, result) = output(CatchPolicy::Wrap, 0.0);
        match result {
            Err(e) => assert_eq!(
                e.to_string(),
                "Uncaught Error: Oops, something went wrong: You cannot divide by zero!"
            ),
            Ok(()) => panic!("expected a raise"),
        }
    }
}
