// =========================================================================
// FALSIFY-DM: Dense matrix arithmetic contract (matriz primitives)
//
// Every comparison below is exact: the contract forbids tolerance in
// equality, so test inputs are chosen to be exactly representable and
// closed under the operation being exercised.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;
use crate::error::MatrizError;

/// FALSIFY-DM-001: Add/sub round trip: (A + B) - B = A
#[test]
fn falsify_dm_001_add_sub_roundtrip() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 3.0, -4.0, 5.0, -6.0]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![7.0, 8.0, -9.0, 10.0, -11.0, 12.0]).expect("valid");

    let roundtrip = a
        .add(&b)
        .expect("same shape")
        .sub(&b)
        .expect("same shape");

    assert_eq!(roundtrip, a, "FALSIFIED DM-001: (A+B)-B != A");
}

/// FALSIFY-DM-002: Additive inverse: A + (-A) = 0
#[test]
fn falsify_dm_002_additive_inverse() {
    let a = Matrix::from_vec(2, 2, vec![1.5, -2.25, 3.0, -0.5]).expect("valid");
    let sum = a.add(&a.neg()).expect("same shape");

    assert_eq!(
        sum,
        Matrix::zeros(2, 2),
        "FALSIFIED DM-002: A + (-A) != 0"
    );
}

/// FALSIFY-DM-003: Matmul shape law: (m×n) * (n×p) = (m×p); n != q fails
#[test]
fn falsify_dm_003_matmul_shape_law() {
    let a = Matrix::ones(2, 3);
    let b = Matrix::ones(3, 4);
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED DM-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );

    let q = Matrix::ones(4, 4);
    assert!(
        matches!(a.matmul(&q), Err(MatrizError::ShapeMismatch { .. })),
        "FALSIFIED DM-003: (2x3)*(4x4) did not fail with a shape mismatch"
    );
}

/// FALSIFY-DM-004: Scalar round trip: (A * s) / s = A for s != 0
#[test]
fn falsify_dm_004_scalar_roundtrip() {
    let a = Matrix::from_vec(2, 2, vec![1.0, -2.0, 3.5, 0.25]).expect("valid");
    let s = 4.0;

    let roundtrip = a.mul_scalar(s).div_scalar(s).expect("nonzero divisor");

    assert_eq!(roundtrip, a, "FALSIFIED DM-004: (A*s)/s != A");
}

/// FALSIFY-DM-005: Worked example: 2x3 of 2.0 doubled and times its 3x2
/// transpose-shaped counterpart of 3.0
#[test]
fn falsify_dm_005_worked_example() {
    let a = Matrix::from_rows(&[vec![2.0, 2.0, 2.0], vec![2.0, 2.0, 2.0]]).expect("valid");

    let doubled = a.add(&a).expect("same shape");
    assert_eq!(
        doubled,
        Matrix::from_rows(&[vec![4.0, 4.0, 4.0], vec![4.0, 4.0, 4.0]]).expect("valid"),
        "FALSIFIED DM-005: A + A != [[4,4,4],[4,4,4]]"
    );

    let b = Matrix::from_rows(&[vec![3.0, 3.0], vec![3.0, 3.0], vec![3.0, 3.0]]).expect("valid");
    let product = a.matmul(&b).expect("compatible dims");
    assert_eq!(product.shape(), (2, 2), "FALSIFIED DM-005: product not 2x2");
    assert!(
        product.as_slice().iter().all(|&x| x == 18.0),
        "FALSIFIED DM-005: each cell must be 2*3*3 = 18"
    );
}

/// FALSIFY-DM-006: Equality is shape-sensitive even with identical data
#[test]
fn falsify_dm_006_equality_shape_sensitive() {
    let flat: Vec<f64> = (1..=6).map(f64::from).collect();
    let wide = Matrix::from_vec(2, 3, flat.clone()).expect("valid");
    let tall = Matrix::from_vec(3, 2, flat).expect("valid");

    assert_ne!(wide, tall, "FALSIFIED DM-006: 2x3 compared equal to 3x2");
}

/// FALSIFY-DM-007: Display contract: space-separated rows, one per line,
/// trailing newline included
#[test]
fn falsify_dm_007_display_contract() {
    let m = Matrix::from_rows(&[vec![1.0, 2.5], vec![-3.0, 4.0]]).expect("valid");
    assert_eq!(
        m.to_string(),
        "1 2.5\n-3 4\n",
        "FALSIFIED DM-007: display format drifted"
    );
}

/// FALSIFY-DM-008: Compound multiplication updates the receiver's shape
#[test]
fn falsify_dm_008_compound_matmul_reshapes() {
    let mut m = MatrixMut::from_vec(2, 3, vec![2.0; 6]).expect("valid");
    let other = MatrixMut::from_vec(3, 2, vec![3.0; 6]).expect("valid");

    m.matmul_assign(&other).expect("compatible dims");

    assert_eq!(
        m.shape(),
        (2, 2),
        "FALSIFIED DM-008: receiver shape={:?}, expected (2,2)",
        m.shape()
    );
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 2);
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    // Integer-valued f64 elements keep add/sub exact; power-of-two scalars
    // keep mul/div exact.
    fn element(index: usize, seed: i32, stride: i32) -> f64 {
        f64::from((index as i32).wrapping_mul(stride).wrapping_add(seed) % 100 - 50)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// FALSIFY-DM-001-prop: Add/sub round trip for random shapes
        #[test]
        fn falsify_dm_001_prop_add_sub_roundtrip(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500i32,
        ) {
            let a_data: Vec<f64> = (0..rows * cols).map(|i| element(i, seed, 7)).collect();
            let b_data: Vec<f64> = (0..rows * cols).map(|i| element(i, seed * 3, 13)).collect();
            let a = Matrix::from_vec(rows, cols, a_data).expect("valid");
            let b = Matrix::from_vec(rows, cols, b_data).expect("valid");

            let roundtrip = a.add(&b).expect("same shape").sub(&b).expect("same shape");
            prop_assert_eq!(&roundtrip, &a);
        }

        /// FALSIFY-DM-002-prop: A + (-A) is the zero matrix
        #[test]
        fn falsify_dm_002_prop_additive_inverse(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500i32,
        ) {
            let data: Vec<f64> = (0..rows * cols).map(|i| element(i, seed, 11)).collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");

            let sum = a.add(&a.neg()).expect("same shape");
            prop_assert_eq!(sum, Matrix::zeros(rows, cols));
        }

        /// FALSIFY-DM-003-prop: (m×n)*(n×p) yields (m×p); all-ones inputs
        /// give cells equal to n
        #[test]
        fn falsify_dm_003_prop_matmul_shape(
            m in 1..=5usize,
            n in 1..=5usize,
            p in 1..=5usize,
        ) {
            let a = Matrix::ones(m, n);
            let b = Matrix::ones(n, p);

            let c = a.matmul(&b).expect("compatible dims");
            prop_assert_eq!(c.shape(), (m, p));
            prop_assert!(c.as_slice().iter().all(|&x| x == n as f64));
        }

        /// FALSIFY-DM-004-prop: (A*s)/s = A for power-of-two scalars
        #[test]
        fn falsify_dm_004_prop_scalar_roundtrip(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500i32,
            exponent in -3..=3i32,
        ) {
            let data: Vec<f64> = (0..rows * cols).map(|i| element(i, seed, 17)).collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let s = 2.0_f64.powi(exponent);

            let roundtrip = a.mul_scalar(s).div_scalar(s).expect("nonzero divisor");
            prop_assert_eq!(roundtrip, a);
        }

        /// FALSIFY-DM-009-prop: compound add matches the non-mutating add
        #[test]
        fn falsify_dm_009_prop_compound_matches_pure(
            rows in 1..=5usize,
            cols in 1..=5usize,
            seed in 0..500i32,
        ) {
            let a_data: Vec<f64> = (0..rows * cols).map(|i| element(i, seed, 19)).collect();
            let b_data: Vec<f64> = (0..rows * cols).map(|i| element(i, seed + 1, 23)).collect();
            let a = MatrixMut::from_vec(rows, cols, a_data).expect("valid");
            let b = MatrixMut::from_vec(rows, cols, b_data).expect("valid");

            let pure = a.add(&b).expect("same shape");
            let mut compound = a.clone();
            compound.add_assign(&b).expect("same shape");

            prop_assert_eq!(compound, pure);
        }
    }
}
