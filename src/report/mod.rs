//! Terminal output formatting.
//!
//! Kept separate from the evaluation code so the output contract (one result
//! line) is pinned in exactly one place.

use crate::domain::Evaluation;

/// Render the single result line.
pub fn format_result(eval: &Evaluation) -> String {
    format!("Result fun(x, y, z) = {}", eval.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EvalDetail;

    #[test]
    fn result_line_shape() {
        let eval = Evaluation {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            value: 0.0,
            detail: EvalDetail::Cascaded { km: 0.0, krm: 0.0 },
        };
        assert_eq!(format_result(&eval), "Result fun(x, y, z) = 0");
    }

    #[test]
    fn result_line_carries_the_value() {
        let eval = Evaluation {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            value: 45.419,
            detail: EvalDetail::Flat,
        };
        assert_eq!(format_result(&eval), "Result fun(x, y, z) = 45.419");
    }
}
