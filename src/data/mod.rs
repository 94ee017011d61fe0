//! Packaged lookup data for the T/U functions.

pub mod tables;

pub use tables::*;
