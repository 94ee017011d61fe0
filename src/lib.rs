//! `emfun` library crate.
//!
//! The binary (`emfun`) is a thin wrapper around this library so that:
//!
//! - the interpolation engine and the algorithm cascade are testable without
//!   spawning processes
//! - evaluation can be reused against synthetic table sets in tests
//! - input handling and presentation stay out of the math code

pub mod app;
pub mod cli;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod eval;
pub mod math;
pub mod report;
