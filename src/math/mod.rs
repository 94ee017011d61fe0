//! Mathematical utilities: the table interpolation engine.

pub mod interp;

pub use interp::*;
