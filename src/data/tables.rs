//! The three packaged T/U lookup tables.
//!
//! The tables are an external, versioned dataset: 21 `(x, t, u)` rows each,
//! shipped in `data/tu_tables.json` and embedded into the binary. Values and
//! row order are preserved exactly as published, since interpolation results
//! depend on them, including a handful of rows that break the otherwise
//! smooth progression of `t` and `u` (kept as-is; they are part of the
//! dataset, not ours to smooth over).
//!
//! Orientation per table:
//! - `direct` ascends from `x = -1` to `x = 1`
//! - `neg_inverse` ascends from `0` to `1` (queried at `-1/x` for `x < -1`)
//! - `pos_inverse` descends from `0` to `-1` (queried at `-1/x` for `x > 1`)

use std::sync::LazyLock;

use serde::Deserialize;

use crate::domain::{Sample, TableId};

/// Raw JSON for the packaged table set.
const PACKAGED_JSON: &str = include_str!("../../data/tu_tables.json");

/// The three lookup tables plus the dataset version.
#[derive(Debug, Clone, Deserialize)]
pub struct TuTables {
    pub version: String,
    pub direct: Vec<Sample>,
    pub neg_inverse: Vec<Sample>,
    pub pos_inverse: Vec<Sample>,
}

impl TuTables {
    /// The packaged table set, parsed once on first use.
    ///
    /// The embedded JSON is covered by tests (row counts, orientation, spot
    /// values), so a parse failure here is a build defect, not a runtime
    /// condition.
    pub fn packaged() -> &'static TuTables {
        static PACKAGED: LazyLock<TuTables> = LazyLock::new(|| {
            serde_json::from_str(PACKAGED_JSON).expect("packaged table JSON is test-covered")
        });
        &PACKAGED
    }

    /// The rows of one table.
    pub fn table(&self, id: TableId) -> &[Sample] {
        match id {
            TableId::Direct => &self.direct,
            TableId::NegInverse => &self.neg_inverse,
            TableId::PosInverse => &self.pos_inverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interpolate;

    const IDS: [TableId; 3] = [TableId::Direct, TableId::NegInverse, TableId::PosInverse];

    #[test]
    fn packaged_tables_have_21_rows_each() {
        let tables = TuTables::packaged();
        for id in IDS {
            assert_eq!(tables.table(id).len(), 21, "{}", id.display_name());
        }
        assert_eq!(tables.version, "1.0");
    }

    #[test]
    fn packaged_orientations() {
        let tables = TuTables::packaged();

        for (id, ascending) in [
            (TableId::Direct, true),
            (TableId::NegInverse, true),
            (TableId::PosInverse, false),
        ] {
            let rows = tables.table(id);
            for pair in rows.windows(2) {
                if ascending {
                    assert!(pair[0].x < pair[1].x, "{} not ascending", id.display_name());
                } else {
                    assert!(pair[0].x > pair[1].x, "{} not descending", id.display_name());
                }
            }
        }
    }

    #[test]
    fn packaged_spot_values() {
        let tables = TuTables::packaged();

        assert_eq!(tables.direct[10], Sample { x: 0.0, t: 0.0, u: 4.571 });
        assert_eq!(tables.direct[20], Sample { x: 1.0, t: 0.0, u: 3.0 });
        assert_eq!(tables.direct[0], Sample { x: -1.0, t: -4.935, u: 1.935 });

        assert_eq!(tables.neg_inverse[20], Sample { x: 1.0, t: 5.89, u: 0.377 });
        assert_eq!(tables.pos_inverse[10], Sample { x: -0.5, t: 0.976, u: -0.141 });
    }

    #[test]
    fn every_packaged_sample_interpolates_to_itself() {
        let tables = TuTables::packaged();
        for id in IDS {
            let rows = tables.table(id);
            for row in rows {
                let (t, u) = interpolate(row.x, rows).unwrap();
                assert_eq!((t, u), (row.t, row.u), "node x={} in {}", row.x, id.display_name());
            }
        }
    }
}
