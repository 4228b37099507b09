// src/error.rs
use crate::value::Value;
use std::fmt;
use std::io;
use thiserror::Error;

/// Anything that unwinds a call chain.
#[derive(Error, Debug)]
pub enum Exception {
    /// A script-level raise. The payload is whatever was raised, untouched.
    #[error("Uncaught {0}")]
    Thrown(Value),

    /// The host failed underneath the script. Handlers never see these.
    #[error("Console write failed: {0}")]
    Io(#[from] io::Error),
}

/// Built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    TypeError,
    SyntaxError,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::SyntaxError => "SyntaxError",
        }
    }
}

/// The result of `new Error(message)` and its subtypes.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorObject {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorObject {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorObject {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(self.kind.name())
        } else {
            write!(f, "{}: {}", self.kind.name(), self.message)
        }
    }
}

/// Raise `value`. Works for any payload shape.
pub fn throw<T>(value: impl Into<Value>) -> Result<T, Exception> {
    let value = value.into();
    log::trace!("throw {:?}", value);
    Err(Exception::Thrown(value))
}

/// A try/catch region.
///
/// Runs `protected`; if it raises, `handler` gets the raised value exactly as
/// it was thrown. Host failures skip the handler and keep unwinding.
pub fn try_catch<C, T>(
    ctx: &mut C,
    protected: impl FnOnce(&mut C) -> Result<T, Exception>,
    handler: impl FnOnce(&mut C, Value) -> Result<T, Exception>,
) -> Result<T, Exception> {
    match protected(ctx) {
        Err(Exception::Thrown(value)) => {
            log::debug!("caught {:?}", value);
            handler(ctx, value)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_objects_render_name_and_message() {
        let error = ErrorObject::new(ErrorKind::Error, "I detect an error!");
        assert_eq!(error.to_string(), "Error: I detect an error!");
        let syntax = ErrorObject::new(ErrorKind::SyntaxError, "Your syntax is no good");
        assert_eq!(syntax.to_string(), "SyntaxError: Your syntax is no good");
        assert_eq!(ErrorObject::new(ErrorKind::Error, "").to_string(), "Error");
    }

    #[test]
    fn uncaught_report_renders_the_payload() {
        let e = Exception::Thrown(Value::from("You cannot divide by zero!"));
        assert_eq!(e.to_string(), "Uncaught You cannot divide by zero!");
    }

    #[test]
    fn handler_skipped_when_nothing_is_raised() {
        let mut trace = Vec::new();
        let result = try_catch(
            &mut trace,
            |t| {
                t.push("protected");
                Ok(1)
            },
            |t, _| {
                t.push("handler");
                Ok(2)
            },
        );
        assert_eq!(result.unwrap(), 1);
        assert_eq!(trace, ["protected"]);
    }

    #[test]
    fn raise_on_first_statement_skips_the_rest() {
        fn inner(t: &mut Vec<&'static str>) -> Result<(), Exception> {
            throw::<()>(true)?;
            t.push("inner after throw");
            Ok(())
        }
        fn outer(t: &mut Vec<&'static str>) -> Result<(), Exception> {
            inner(t)?;
            t.push("outer after call");
            Ok(())
        }

        let mut trace = Vec::new();
        let caught = try_catch(
            &mut trace,
            |t| {
                outer(t)?;
                t.push("protected after call");
                Ok(None)
            },
            |t, value| {
                t.push("handler");
                Ok(Some(value))
            },
        )
        .unwrap();
        assert_eq!(trace, ["handler"]);
        assert!(matches!(caught, Some(Value::Boolean(true))));
    }

    #[test]
    fn handler_receives_the_value_uncoerced() {
        let original = ErrorObject::new(ErrorKind::SyntaxError, "nope");
        let caught = try_catch(&mut (), |_| throw(original.clone()), |_, v| Ok(v)).unwrap();
        match caught {
            Value::Error(e) => assert_eq!(e, original),
            other => panic!("expected the error object back, got {:?}", other),
        }
    }

    #[test]
    fn host_failures_bypass_the_handler() {
        let result: Result<(), Exception> = try_catch(
            &mut (),
            |_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into()),
            |_, _| Ok(()),
        );
        assert!(matches!(result, Err(Exception::Io(_))));
    }

    #[test]
    fn handler_can_raise_again() {
        let result: Result<(), Exception> =
            try_catch(&mut (), |_| throw("first"), |_, _| throw("second"));
        match result {
            Err(Exception::Thrown(v)) => assert_eq!(v.to_string(), "second"),
            other => panic!("expected a raise, got {:?}", other),
        }
    }
}
