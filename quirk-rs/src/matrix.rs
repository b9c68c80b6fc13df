//! Complex matrices describing gate effects.

use approx::AbsDiffEq;
use ndarray::{array, Array2};
use num_complex::Complex64;
use once_cell::sync::Lazy;

use crate::{imag, real};

/// Matrix version of a gate.
pub type Matrix = Array2<Complex64>;

/// Default tolerance used when checking matrix properties.
pub const TOLERANCE: f64 = 1e-8;

pub static PAULI_X: Lazy<Matrix> = Lazy::new(|| {
    let (_0, _1) = (real!(0.0), real!(1.0));
    array![[_0, _1], [_1, _0]]
});

pub static PAULI_Y: Lazy<Matrix> = Lazy::new(|| {
    let (_0, _i) = (real!(0.0), imag!(1.0));
    array![[_0, -_i], [_i, _0]]
});

pub static PAULI_Z: Lazy<Matrix> = Lazy::new(|| {
    let (_0, _1) = (real!(0.0), real!(1.0));
    array![[_1, _0], [_0, -_1]]
});

pub static HADAMARD: Lazy<Matrix> = Lazy::new(|| {
    let _1 = real!(1.0);
    array![[_1, _1], [_1, -_1]] * real!(std::f64::consts::FRAC_1_SQRT_2)
});

pub fn identity(dimension: usize) -> Matrix {
    Array2::eye(dimension)
}

/// `diag(1, e^{i·angle})`.
pub fn phase(angle: f64) -> Matrix {
    let mut p = identity(2);
    p[[1, 1]] = Complex64::cis(angle);
    p
}

/// Raise an involutory matrix (one with eigenvalues ±1, like the Paulis) to a real power.
///
/// Uses `P^t = (I + P)/2 + e^{iπt}(I - P)/2`, which picks the principal branch so that
/// `t = 1` gives back `P` and `t = 0` gives the identity.
pub fn involution_power(involution: &Matrix, exponent: f64) -> Matrix {
    let eye = identity(involution.nrows());
    let plus = (&eye + involution) * real!(0.5);
    let minus = (&eye - involution) * real!(0.5);
    plus + minus * Complex64::cis(std::f64::consts::PI * exponent)
}

/// The conjugate transpose.
pub fn adjoint(matrix: &Matrix) -> Matrix {
    matrix.t().mapv(|c| c.conj())
}

/// The number of qubits a square `2^n x 2^n` matrix acts on, or `None` for any other shape.
pub fn qubit_span(matrix: &Matrix) -> Option<usize> {
    let (rows, cols) = matrix.dim();
    if rows != cols || !rows.is_power_of_two() {
        return None;
    }
    Some(rows.trailing_zeros() as usize)
}

pub fn is_identity(matrix: &Matrix, tolerance: f64) -> bool {
    matrix.nrows() == matrix.ncols()
        && matrix.abs_diff_eq(&identity(matrix.nrows()), tolerance)
}

pub fn is_unitary(matrix: &Matrix, tolerance: f64) -> bool {
    matrix.nrows() == matrix.ncols() && is_identity(&matrix.dot(&adjoint(matrix)), tolerance)
}

#[cfg(test)]
mod tests {
    use super::{
        adjoint, identity, involution_power, is_identity, is_unitary, phase, qubit_span, Matrix,
        HADAMARD, PAULI_X, PAULI_Y, PAULI_Z, TOLERANCE,
    };
    use crate::{imag, real};
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};
    use num_complex::Complex64;
    use rstest::rstest;

    static _0: Complex64 = real!(0.0);
    static _1: Complex64 = real!(1.0);
    static _I: Complex64 = imag!(1.0);

    #[rstest]
    #[case(&PAULI_X)]
    #[case(&PAULI_Y)]
    #[case(&PAULI_Z)]
    #[case(&HADAMARD)]
    fn standard_matrices_are_unitary(#[case] matrix: &Matrix) {
        assert!(is_unitary(matrix, TOLERANCE));
        assert_abs_diff_eq!(matrix.dot(matrix), identity(2), epsilon = 1e-12);
    }

    #[rstest]
    #[case(&PAULI_X, 1.0, PAULI_X.clone())]
    #[case(&PAULI_Z, 0.0, identity(2))]
    #[case(&PAULI_Z, 0.5, array![[_1, _0], [_0, _I]])]
    #[case(&PAULI_Z, 0.25, phase(std::f64::consts::FRAC_PI_4))]
    #[case(&PAULI_Z, -0.5, array![[_1, _0], [_0, -_I]])]
    fn involution_powers(#[case] base: &Matrix, #[case] exponent: f64, #[case] expected: Matrix) {
        assert_abs_diff_eq!(involution_power(base, exponent), expected, epsilon = 1e-12);
    }

    #[test]
    fn square_root_of_x_squares_to_x() {
        let sqrt_x = involution_power(&PAULI_X, 0.5);
        assert!(is_unitary(&sqrt_x, TOLERANCE));
        assert_abs_diff_eq!(sqrt_x.dot(&sqrt_x), *PAULI_X, epsilon = 1e-12);
        assert_abs_diff_eq!(adjoint(&sqrt_x), involution_power(&PAULI_X, -0.5), epsilon = 1e-12);
    }

    #[rstest]
    #[case(identity(1), Some(0))]
    #[case(identity(2), Some(1))]
    #[case(identity(8), Some(3))]
    #[case(identity(3), None)]
    #[case(Array2::zeros((2, 4)), None)]
    fn spans(#[case] matrix: Matrix, #[case] expected: Option<usize>) {
        assert_eq!(qubit_span(&matrix), expected);
    }

    #[test]
    fn non_unitary_is_detected() {
        let projector = array![[_1, _0], [_0, _0]];
        assert!(!is_unitary(&projector, TOLERANCE));
        assert!(!is_identity(&projector, TOLERANCE));
        assert!(is_identity(&identity(4), TOLERANCE));
    }
}
