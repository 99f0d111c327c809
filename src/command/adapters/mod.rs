//! Concrete line sources and output sinks.

pub mod io;
pub mod memory;
