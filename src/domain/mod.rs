//! Domain types used throughout the evaluation pipeline.
//!
//! This module defines:
//!
//! - the table sample record (`Sample`) and table identity (`TableId`)
//! - the recalculation tags raised by the primary algorithm (`Recalc`)
//! - the evaluation output (`Evaluation`, `EvalDetail`)

pub mod types;

pub use types::*;
