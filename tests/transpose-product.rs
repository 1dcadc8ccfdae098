#[macro_use] extern crate orbis_assert_close;

use orbis::matrix::{self, Matrix, MatrixError};
use rand::Rng;

fn random_matrix(rows: usize, cols: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let data = (0..rows * cols).map(|_| rng.gen_range(-1.0, 1.0)).collect();
    Matrix::from_row_major_data((rows, cols), data)
}

#[test]
fn matches_definition() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let (nr1r2, nc1, nc2) = (rng.gen_range(1, 10), rng.gen_range(1, 10), rng.gen_range(1, 10));
        let m1 = random_matrix(nr1r2, nc1);
        let m2 = random_matrix(nr1r2, nc2);

        let out = matrix::mtxmg(m1.row_major_data(), m2.row_major_data(), nc1, nr1r2 as isize, nc2).unwrap();
        for i in 0..nc1 {
            for j in 0..nc2 {
                let expected: f64 = (0..nr1r2).map(|k| m1[(k, i)] * m2[(k, j)]).sum();
                assert_close!(abs=1e-13, out[(i, j)], expected);
            }
        }
        assert_eq!(out, m1.tmul(&m2).unwrap());
    }
}

#[test]
fn output_over_input() {
    // square 3x3 operands: the output fits exactly over either input
    let m1 = random_matrix(3, 3);
    let m2 = random_matrix(3, 3);
    let expected = m1.tmul(&m2).unwrap();

    let mut over = m1.clone().into_row_major_data();
    matrix::mtxmg_overwrite_m1(&mut over, m2.row_major_data(), 3, 3, 3).unwrap();
    assert_eq!(over, expected.row_major_data());

    let mut over = m2.clone().into_row_major_data();
    matrix::mtxmg_overwrite_m2(m1.row_major_data(), &mut over, 3, 3, 3).unwrap();
    assert_eq!(over, expected.row_major_data());
}

#[test]
fn negative_row_count() {
    let mut out = vec![1.0; 6];
    matrix::mtxmg_into(&[1.0; 6], &[1.0; 6], 2, -1, 3, &mut out).unwrap();
    assert_eq!(out, vec![0.0; 6]);
}

#[test]
fn failed_allocation_leaves_output_alone() {
    let mut out = vec![1.0; 4];
    let huge = 1usize << 62;
    let err = matrix::mtxmg_into(&[], &[], huge, -1, huge, &mut out).unwrap_err();
    // the output length check cannot pass for such dimensions, which is
    // reported before any allocation is attempted
    assert!(matches!(err, MatrixError::ShapeMismatch { .. }));
    assert_eq!(out, vec![1.0; 4]);

    let err = matrix::mtxmg::<f64>(&[], &[], huge, -1, huge).unwrap_err();
    assert_eq!(err, MatrixError::AllocationFailure { rows: huge, cols: huge });
}
