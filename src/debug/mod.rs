//! Opt-in evaluation trace for inspecting cascade behavior.
//!
//! Set `EMFUN_TRACE` (to anything but `0`) to get a one-line breakdown on
//! stderr. Off by default, so the observable output stays one result line.

use crate::domain::{EvalDetail, Evaluation};

/// Whether tracing was requested via the environment.
pub fn enabled() -> bool {
    std::env::var_os("EMFUN_TRACE").is_some_and(|v| v != "0")
}

/// One-line trace of an evaluation.
pub fn format_trace(eval: &Evaluation) -> String {
    match eval.detail {
        EvalDetail::Cascaded { km, krm } => format!(
            "trace: x={} y={} z={} km={km} krm={krm} path=cascade",
            eval.x, eval.y, eval.z
        ),
        EvalDetail::Flat => format!(
            "trace: x={} y={} z={} path=flat",
            eval.x, eval.y, eval.z
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_names_the_path() {
        let cascaded = Evaluation {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            value: 114.0,
            detail: EvalDetail::Cascaded { km: 590.0, krm: 476.0 },
        };
        let line = format_trace(&cascaded);
        assert!(line.contains("path=cascade"));
        assert!(line.contains("km=590"));

        let flat = Evaluation {
            detail: EvalDetail::Flat,
            ..cascaded
        };
        assert!(format_trace(&flat).contains("path=flat"));
    }
}
