//! T/U table lookup and the `srz` combination.
//!
//! `T(x)` and `U(x)` are the two projections of a single table query. The
//! query resolves against one of three tables depending on where `x` falls,
//! with the coordinate mapped through `-1/x` on the inverse branches. Each
//! projection performs a full lookup; at 21 rows per table, caching would buy
//! nothing.

use crate::data::TuTables;
use crate::domain::TableId;
use crate::math::{InterpError, interpolate};

/// Map `x` to the table that covers it and the coordinate to query.
///
/// NaN falls through to the positive-inverse branch and clamps inside the
/// interpolation engine, so the lookup stays total.
pub fn select_table(x: f64) -> (TableId, f64) {
    if x.abs() <= 1.0 {
        (TableId::Direct, x)
    } else if x < -1.0 {
        (TableId::NegInverse, -1.0 / x)
    } else {
        (TableId::PosInverse, -1.0 / x)
    }
}

/// Both auxiliary functions at `x`: `(T(x), U(x))`.
pub fn get_tu(tables: &TuTables, x: f64) -> Result<(f64, f64), InterpError> {
    let (id, q) = select_table(x);
    interpolate(q, tables.table(id))
}

/// `T(x)`.
pub fn t(tables: &TuTables, x: f64) -> Result<f64, InterpError> {
    Ok(get_tu(tables, x)?.0)
}

/// `U(x)`.
pub fn u(tables: &TuTables, x: f64) -> Result<f64, InterpError> {
    Ok(get_tu(tables, x)?.1)
}

/// The closed-form combination used by every algorithm in the cascade.
pub fn srz(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<f64, InterpError> {
    if x > y {
        Ok(t(tables, x)? + u(tables, z)? - t(tables, y)?)
    } else {
        Ok(t(tables, y)? + u(tables, y)? - u(tables, z)?)
    }
}
