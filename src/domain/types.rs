//! Shared domain types.
//!
//! These types are intentionally lightweight: evaluation is pure arithmetic
//! over stack-local floats, so everything here is `Copy` apart from the table
//! rows owned by the data layer.

use serde::Deserialize;

/// One row of a T/U lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub t: f64,
    pub u: f64,
}

/// Which of the three packaged tables a query resolves to.
///
/// The coordinate passed to the interpolation engine is `x` itself for
/// `Direct` and `-1/x` for the two inverse branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    /// `|x| <= 1`.
    Direct,
    /// `x < -1`.
    NegInverse,
    /// `x > 1`.
    PosInverse,
}

impl TableId {
    /// Human-readable label for trace output.
    pub fn display_name(self) -> &'static str {
        match self {
            TableId::Direct => "direct",
            TableId::NegInverse => "neg-inverse",
            TableId::PosInverse => "pos-inverse",
        }
    }
}

/// Which recalculation variant replaces the primary closed form.
///
/// Raised by `srs`/`srs1` when a square-root or logarithm argument leaves its
/// valid domain; resolved by `rrz`, which dispatches the matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recalc {
    /// Products scaled by 1.44 in place of the square root.
    Scaled,
    /// Plain products in place of the square root.
    Product,
    /// The variant shared with the `Krm` quantity.
    Krm,
}

/// How the final value was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalDetail {
    /// Both quantities came out of the cascade.
    Cascaded { km: f64, krm: f64 },
    /// A table condition escaped the cascade; the flat formula was used.
    Flat,
}

/// Result of one `fun(x, y, z)` evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub value: f64,
    pub detail: EvalDetail,
}

impl Evaluation {
    /// Whether the flat fallback produced the value.
    pub fn is_flat(&self) -> bool {
        matches!(self.detail, EvalDetail::Flat)
    }
}
