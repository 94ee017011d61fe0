//! The algorithm cascade behind `Km` and `Krm`.
//!
//! The primary algorithm computes closed forms involving square roots and
//! logarithms. When an argument leaves its valid domain, the computation
//! returns a `Recalc` tag instead of a value and `rrz` dispatches the named
//! variant over the same inputs, so every fallback path is visible in that
//! one match. Table errors pass through untouched; only the top-level evaluator
//! resolves them.
//!
//! The formulas are an external empirical set and are preserved exactly,
//! including the places where the variants are not parallel to each other.

use crate::data::TuTables;
use crate::domain::Recalc;
use crate::eval::lookup::srz;
use crate::math::InterpError;

/// Weights combining the two `rrz` terms into `Km`.
const KM_W1: f64 = 73.1389;
const KM_W2: f64 = 14.838;

/// Weights combining the two `rrz_krm` terms into `Krm`.
const KRM_W1: f64 = 83.1389;
const KRM_W2: f64 = 4.838;

/// Multiplier replacing the square root in the scaled variant.
const SCALED_K: f64 = 1.44;

/// Coefficients of the flat fallback formula.
const FLAT_XZ: f64 = 4.349;
const FLAT_Y: f64 = 23.23;
const FLAT_XYZ: f64 = 2.348;

/// Why a primary-algorithm computation could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// A square-root or logarithm argument left its valid domain; the tagged
    /// variant recomputes the quantity.
    Recalc(Recalc),
    /// A table lookup failed; recalculation cannot help.
    Table(InterpError),
}

impl From<InterpError> for Interrupt {
    fn from(err: InterpError) -> Self {
        Interrupt::Table(err)
    }
}

// --- primary algorithm ---

/// Square-root form of the primary `srs` quantity.
pub fn srs(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, Interrupt> {
    if z > y {
        let val = z * z + x * y;
        if val > 0.0 {
            Ok(srz(tables, x, y, z)? + y * val.sqrt())
        } else {
            Err(Interrupt::Recalc(Recalc::Scaled))
        }
    } else {
        let val = x * x + z * y;
        if val > 0.0 {
            Ok(y + srz(tables, z, x, y)? * val.sqrt())
        } else {
            Err(Interrupt::Recalc(Recalc::Product))
        }
    }
}

/// Logarithmic form of the primary `srs` quantity.
///
/// The `z > y` branch needs `val > 1` for the logarithm; the other branch
/// keeps the square root but hands domain failures to the Krm variant.
pub fn srs1(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, Interrupt> {
    if z > y {
        let val = z * z + x * y;
        if val > 1.0 {
            Ok(srz(tables, x, y, z)? + y * val.ln())
        } else {
            Err(Interrupt::Recalc(Recalc::Scaled))
        }
    } else {
        let val = x * x + z * y;
        if val > 1.0 {
            Ok(y + srz(tables, z, x, y)? * val.sqrt())
        } else {
            Err(Interrupt::Recalc(Recalc::Krm))
        }
    }
}

pub fn qrz(tables: &TuTables, x: f64, y: f64) -> Result<f64, Interrupt> {
    if x.abs() < 1.0 {
        Ok(x * srs(tables, x, y, x)?)
    } else {
        Ok(y * srs1(tables, y, x, y)?)
    }
}

/// Primary `rrz`, resolving recalculation tags raised anywhere below it.
pub fn rrz(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    let attempt = if x > y {
        qrz(tables, y, z).map(|q| x * z * q - x)
    } else {
        qrz(tables, x, y).map(|q| y * x * q + y)
    };

    match attempt {
        Ok(v) => Ok(v),
        Err(Interrupt::Table(err)) => Err(err),
        Err(Interrupt::Recalc(Recalc::Scaled)) => rrz_scaled(tables, x, y, z),
        Err(Interrupt::Recalc(Recalc::Product)) => rrz_product(tables, x, y, z),
        Err(Interrupt::Recalc(Recalc::Krm)) => rrz_krm(tables, x, y, z),
    }
}

/// `Km`, the externally visible entry point of the cascade.
pub fn km(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    Ok(KM_W1 * rrz(tables, x, y, y)? + KM_W2 * rrz(tables, x - y, z, y)?)
}

// --- scaled variant ---

pub fn srs_scaled(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    if z > y {
        Ok(srz(tables, x, y, z)? + SCALED_K * y * z)
    } else {
        Ok(y + SCALED_K * srz(tables, z, x, y)?)
    }
}

/// Branches on `|y|`, unlike the other variants' `qrz`.
pub fn qrz_scaled(tables: &TuTables, x: f64, y: f64) -> Result<f64, InterpError> {
    if y.abs() < 1.0 {
        Ok(x * srs_scaled(tables, x, y, x)?)
    } else {
        Ok(y * srs_scaled(tables, y, x, y)?)
    }
}

pub fn rrz_scaled(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    if x > y {
        Ok(x * y * qrz_scaled(tables, y, z)?)
    } else {
        Ok(x * z * qrz_scaled(tables, x, y)?)
    }
}

// --- product variant ---

pub fn srs_product(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    if z > y {
        Ok(srz(tables, x, y, z)? + y * x)
    } else {
        Ok(y * z + srz(tables, z, x, y)?)
    }
}

pub fn qrz_product(tables: &TuTables, x: f64, y: f64) -> Result<f64, InterpError> {
    if x.abs() < 1.0 {
        Ok(x * srs_product(tables, x, y, x)?)
    } else {
        Ok(y * srs_product(tables, y, x, y)?)
    }
}

pub fn rrz_product(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    if x > y {
        Ok(x * y * qrz_product(tables, y, z)?)
    } else {
        Ok(y * z * qrz_product(tables, x, y)?)
    }
}

// --- Krm variant ---
//
// Shared between the primary `rrz` (as the logarithm-domain recalculation)
// and the top-level evaluator (as the standalone `Krm` quantity).

pub fn srs_krm(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    if z > y {
        Ok(srz(tables, x, y, z)? + y * x)
    } else {
        Ok(y * z + srz(tables, z, x, y)?)
    }
}

/// Multiplies by `x` in both branches. The published formula set is
/// asymmetric here, unlike the scaled/product variants.
pub fn qrz_krm(tables: &TuTables, x: f64, y: f64) -> Result<f64, InterpError> {
    if x.abs() < 1.0 {
        Ok(x * srs_krm(tables, x, y, x)?)
    } else {
        Ok(x * srs_krm(tables, y, x, y)?)
    }
}

pub fn rrz_krm(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    if x > y {
        Ok(y * qrz_krm(tables, y, z)?)
    } else {
        Ok(z * qrz_krm(tables, x, y)?)
    }
}

/// `Krm`, computed by the Krm variant alone.
pub fn krm(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    Ok(KRM_W1 * rrz_krm(tables, x, y, z)? + KRM_W2 * rrz_krm(tables, x, z, y)?)
}

// --- flat fallback ---

/// The terminal closed form; never fails.
pub fn fun_flat(x: f64, y: f64, z: f64) -> f64 {
    FLAT_XZ * x * z + FLAT_Y * y - FLAT_XYZ * x * y * z
}
