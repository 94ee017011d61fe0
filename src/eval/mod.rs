//! Top-level evaluation of `fun(x, y, z)`.
//!
//! Combines `Km` (from the cascade) and `Krm` (from its standalone variant)
//! into the final value. The whole evaluation is atomic: either both
//! quantities come out of the cascade, or any escaped table condition discards
//! the partial work and the flat formula supplies the value, never a mix.

pub mod cascade;
pub mod lookup;

use crate::data::TuTables;
use crate::domain::{EvalDetail, Evaluation};
use crate::math::InterpError;

/// Evaluate `fun(x, y, z)` against a table set. Total for finite inputs.
pub fn evaluate(tables: &TuTables, x: f64, y: f64, z: f64) -> Evaluation {
    match cascaded_pair(tables, x, y, z) {
        Ok((km, krm)) => Evaluation {
            x,
            y,
            z,
            value: x * km + y * krm - z * krm,
            detail: EvalDetail::Cascaded { km, krm },
        },
        Err(InterpError::EmptyTable) => Evaluation {
            x,
            y,
            z,
            value: cascade::fun_flat(x, y, z),
            detail: EvalDetail::Flat,
        },
    }
}

/// `Km` and `Krm` for one input triple.
///
/// `Krm` sees `y` and `z` exchanged relative to the `Km` call.
fn cascaded_pair(tables: &TuTables, x: f64, y: f64, z: f64) -> Result<(f64, f64), InterpError> {
    let km = cascade::km(tables, x, y, z)?;
    let krm = cascade::krm(tables, x, z, y)?;
    Ok((km, krm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn origin_evaluates_to_zero_through_the_cascade() {
        let eval = evaluate(TuTables::packaged(), 0.0, 0.0, 0.0);
        assert_eq!(eval.value, 0.0);
        assert_eq!(eval.detail, EvalDetail::Cascaded { km: 0.0, krm: 0.0 });
        assert!(!eval.is_flat());
    }

    #[test]
    fn reference_triple() {
        let eval = evaluate(TuTables::packaged(), 1.0, 2.0, 3.0);
        let EvalDetail::Cascaded { km, krm } = eval.detail else {
            panic!("expected a cascaded result");
        };
        assert!((km - 590.7014656).abs() < 1e-6, "km={km}");
        assert!((krm - 476.2407667).abs() < 1e-6, "krm={krm}");
        // fun = x*km + y*krm - z*krm = km - krm here.
        assert!((eval.value - (km - krm)).abs() < 1e-9);
        assert!((eval.value - 114.4606989).abs() < 1e-6, "value={}", eval.value);
    }

    #[test]
    fn empty_table_falls_back_to_the_flat_formula() {
        let packaged = TuTables::packaged();
        let broken = TuTables {
            version: packaged.version.clone(),
            direct: Vec::new(),
            neg_inverse: packaged.neg_inverse.clone(),
            pos_inverse: packaged.pos_inverse.clone(),
        };

        let (x, y, z) = (0.5, 0.25, 0.75);
        let eval = evaluate(&broken, x, y, z);
        assert!(eval.is_flat());
        assert_eq!(eval.value, cascade::fun_flat(x, y, z));
    }

    #[test]
    fn finite_inputs_produce_finite_values() {
        let tables = TuTables::packaged();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let x = rng.gen_range(-40.0..=40.0);
            let y = rng.gen_range(-40.0..=40.0);
            let z = rng.gen_range(-40.0..=40.0);
            let eval = evaluate(tables, x, y, z);
            assert!(
                eval.value.is_finite(),
                "fun({x}, {y}, {z}) produced {}",
                eval.value
            );
        }
    }
}
