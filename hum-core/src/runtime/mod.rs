//! Hum runtime: values and the dispatch loop

mod value;
mod vm;

pub use value::Value;
pub use vm::{InterpretResult, Vm};
