//! Salt-dependent water vaporization (RWGSALT).

use pvt_core::RegionId;
use pvt_tables::{Table2d, Table2dBuilder};

use crate::error::{PvtError, PvtResult};
use crate::input::SaltTable;
use crate::validate::MIN_SATURATED_ROWS;

/// Build the `(pressure, salt concentration) -> Rvw` table of one region.
///
/// Uses the same outer/inner assembly as the gas tables but is never extrapolated:
/// a node with a single salt concentration keeps it.
pub fn build_salt_table(table: &SaltTable, region: RegionId) -> PvtResult<Table2d> {
    if table.num_rows() < MIN_SATURATED_ROWS {
        return Err(PvtError::InsufficientData {
            table: "RWGSALT",
            region,
            rows: table.num_rows(),
        });
    }

    let mut builder = Table2dBuilder::new();
    for (node, row) in table.saturated.iter().enumerate() {
        let idx = builder.append_x_pos(row.pressure);
        for sample in table.undersaturated(node) {
            builder.append_sample_point(idx, sample.salt_concentration, sample.vaporization_ratio)?;
        }
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{SaltRow, SaltSaturatedRow};

    fn sat(pressure: f64) -> SaltSaturatedRow {
        SaltSaturatedRow {
            pressure,
            vaporization_ratio: 1.0e-5,
        }
    }

    #[test]
    fn builds_ragged_table_without_extension() {
        let table = SaltTable {
            saturated: vec![sat(10.0), sat(20.0)],
            undersaturated: vec![
                vec![SaltRow::new(0.0, 2.0e-5), SaltRow::new(5.0, 1.0e-5)],
                vec![SaltRow::new(0.0, 3.0e-5)],
            ],
        };
        let t = build_salt_table(&table, RegionId::from_index(0)).unwrap();

        assert_eq!(t.x_values(), &[10.0, 20.0]);
        assert_eq!(t.num_y(0), 2);
        assert_eq!(t.num_y(1), 1);
        assert!((t.eval(10.0, 2.5) - 1.5e-5).abs() < 1e-15);
        assert!((t.eval(20.0, 4.0) - 3.0e-5).abs() < 1e-15);
    }

    #[test]
    fn single_row_is_insufficient() {
        let table = SaltTable {
            saturated: vec![sat(10.0)],
            undersaturated: vec![vec![SaltRow::new(0.0, 1.0e-5)]],
        };
        let err = build_salt_table(&table, RegionId::from_index(4)).unwrap_err();
        assert_eq!(
            err,
            PvtError::InsufficientData {
                table: "RWGSALT",
                region: RegionId::from_index(4),
                rows: 1
            }
        );
    }

    #[test]
    fn empty_node_is_a_table_error() {
        let table = SaltTable {
            saturated: vec![sat(10.0), sat(20.0)],
            undersaturated: vec![vec![SaltRow::new(0.0, 1.0e-5)]],
        };
        assert!(matches!(
            build_salt_table(&table, RegionId::from_index(0)).unwrap_err(),
            PvtError::Table(_)
        ));
    }
}
