// src/demos/mod.rs
//! The three try/catch walkthroughs and the runner that picks between them.

pub mod division;
pub mod propagation;
pub mod throw_anything;

use crate::console::Console;
use crate::error::Exception;
use crate::policy::CatchPolicy;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// A failure deep in a call chain reaches the top-level handler.
    Propagation,
    /// A string is raised before dividing by zero.
    Division,
    /// Strings, booleans and error objects are all catchable.
    ThrowAnything,
    /// Every demo in order, stopping at the first uncaught raise.
    All,
}

/// Knobs shared across demos. `None` policy means each demo's own default.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub policy: Option<CatchPolicy>,
    pub valid_data: bool,
    pub dividend: f64,
    pub divisor: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            policy: None,
            valid_data: false,
            dividend: 3.0,
            divisor: 0.0,
        }
    }
}

pub fn run<W: Write>(
    demo: Demo,
    config: &RunConfig,
    console: &mut Console<W>,
) -> Result<(), Exception> {
    log::debug!("running {:?} with {:?}", demo, config);
    match demo {
        Demo::Propagation => {
            let policy = config.policy.unwrap_or(propagation::DEFAULT_POLICY);
            propagation::run(console, policy, config.valid_data)
        }
        Demo::Division => {
            let policy = config.policy.unwrap_or(division::DEFAULT_POLICY);
            division::run(console, policy, config.dividend, config.divisor)
        }
        Demo::ThrowAnything => throw_anything::run(console),
        Demo::All => {
            for demo in [Demo::Propagation, Demo::Division, Demo::ThrowAnything] {
                run(demo, config, console)?;
            }
            Ok(())
        }
    }
}
