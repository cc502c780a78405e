//! Integration tests for pvt-tables.

use pvt_tables::{Table1d, Table2dBuilder, TableError};

#[test]
fn saturated_curve_on_pressure_axis() {
    let pressures = [50.0e5, 100.0e5, 200.0e5];
    let inv_b = [1.0 / 0.02, 1.0 / 0.01, 1.0 / 0.006];
    let curve = Table1d::from_columns(&pressures, &inv_b).unwrap();

    assert_eq!(curve.len(), 3);
    assert_eq!(curve.x_min(), 50.0e5);
    assert_eq!(curve.x_max(), 200.0e5);
    let mid = curve.eval(75.0e5);
    assert!(mid > inv_b[0] && mid < inv_b[1]);
}

#[test]
fn ragged_branches_survive_freeze() {
    // Node 0: three ratios, node 1: two ratios, node 2: one ratio
    let mut builder = Table2dBuilder::new();
    let rows: [(f64, &[(f64, f64)]); 3] = [
        (1.0, &[(0.0, 1.0), (0.5, 1.5), (1.0, 2.0)]),
        (2.0, &[(0.0, 2.0), (0.7, 2.7)]),
        (3.0, &[(0.2, 3.0)]),
    ];
    for (x, samples) in rows {
        let idx = builder.append_x_pos(x);
        for &(y, v) in samples {
            builder.append_sample_point(idx, y, v).unwrap();
        }
    }
    let table = builder.build().unwrap();

    assert_eq!(table.x_values(), &[1.0, 2.0, 3.0]);
    assert_eq!(table.num_y(0), 3);
    assert_eq!(table.num_y(1), 2);
    assert_eq!(table.num_y(2), 1);
    assert_eq!(table.min_branch_len(), 1);
    assert_eq!(table.branch_y(0), &[0.0, 0.5, 1.0]);
    assert_eq!(table.branch_values(1), &[2.0, 2.7]);
    assert!(table.branch_y(9).is_empty());
}

#[test]
fn errors_name_the_offending_node() {
    let mut builder = Table2dBuilder::new();
    let a = builder.append_x_pos(1.0);
    builder.append_sample_point(a, 0.0, 1.0).unwrap();
    let b = builder.append_x_pos(2.0);
    builder.append_sample_point(b, 0.5, 1.0).unwrap();
    builder.append_sample_point(b, 0.1, 1.0).unwrap();

    let err = builder.build().unwrap_err();
    assert_eq!(
        err,
        TableError::NonMonotonic {
            what: "inner axis",
            index: 1
        }
    );
}
