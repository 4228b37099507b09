// src/policy.rs
use crate::console::Console;
use crate::error::{ErrorKind, ErrorObject, Exception, throw};
use crate::value::Value;
use clap::ValueEnum;
use std::io::Write;

/// What a handler does after it has logged the caught value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatchPolicy {
    /// Log only; execution resumes after the region.
    Swallow,
    /// Raise a fresh `Error` whose message is the logged line.
    Wrap,
    /// Raise the caught value again, unchanged.
    RethrowOriginal,
}

impl CatchPolicy {
    pub fn from_swallow_flag(swallow: bool) -> Self {
        if swallow {
            CatchPolicy::Swallow
        } else {
            CatchPolicy::Wrap
        }
    }

    /// Handler tail shared by the demos: log `message`, then suppress or escalate.
    pub fn handle<W: Write>(
        self,
        console: &mut Console<W>,
        message: Value,
        original: Value,
    ) -> Result<(), Exception> {
        console.log(&[message.clone()])?;
        match self {
            CatchPolicy::Swallow => {
                log::debug!("swallowed {:?}", original);
                Ok(())
            }
            CatchPolicy::Wrap => throw(ErrorObject::new(ErrorKind::Error, message.to_string())),
            CatchPolicy::RethrowOriginal => throw(original),
        }
    }
}
