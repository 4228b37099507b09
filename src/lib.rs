// src/lib.rs
pub mod console;
pub mod demos;
pub mod error;
pub mod policy;
pub mod value;

pub use console::Console;
pub use demos::{Demo, RunConfig};
pub use error::{ErrorKind, ErrorObject, Exception};
pub use policy::CatchPolicy;
pub use value::Value;
