//! Gates that cycle through the powers of a Pauli operator as time passes.

use std::sync::Arc;

use crate::drawing::CycleDrawer;
use crate::gate::{Gate, GateBuilder, GateError};
use crate::matrix::{involution_power, PAULI_X, PAULI_Y, PAULI_Z};

use super::build_all;

// A full cycle of `P^(2t)` over `t` in [0, 1) returns to the identity, so the animation loops.

pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    build_all([
        forward("X^t", "X-Raising Gate")
            .set_effect_to_time_varying_matrix(|t| Some(involution_power(&PAULI_X, 2.0 * t))),
        forward("Y^t", "Y-Raising Gate")
            .set_effect_to_time_varying_matrix(|t| Some(involution_power(&PAULI_Y, 2.0 * t))),
        forward("Z^t", "Z-Raising Gate")
            .set_effect_to_time_varying_matrix(|t| Some(involution_power(&PAULI_Z, 2.0 * t))),
        backward("X^-t", "X-Lowering Gate")
            .set_effect_to_time_varying_matrix(|t| Some(involution_power(&PAULI_X, -2.0 * t))),
        backward("Y^-t", "Y-Lowering Gate")
            .set_effect_to_time_varying_matrix(|t| Some(involution_power(&PAULI_Y, -2.0 * t))),
        backward("Z^-t", "Z-Lowering Gate")
            .set_effect_to_time_varying_matrix(|t| Some(involution_power(&PAULI_Z, -2.0 * t))),
    ])
}

fn forward(id: &str, title: &str) -> GateBuilder {
    GateBuilder::new()
        .set_serialized_id_and_symbol(id)
        .set_title(title)
        .set_blurb("Rotates through the powers of its axis as time passes.")
        .promise_effect_is_unitary()
        .set_drawer(CycleDrawer::time_dependent())
}

fn backward(id: &str, title: &str) -> GateBuilder {
    GateBuilder::new()
        .set_serialized_id_and_symbol(id)
        .set_title(title)
        .set_blurb("Counter-rotates through the powers of its axis as time passes.")
        .promise_effect_is_unitary()
        .set_drawer(CycleDrawer::time_dependent().with_scales(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use crate::matrix::{identity, is_unitary, TOLERANCE};

    #[rstest]
    #[case("X^t")]
    #[case("Y^-t")]
    #[case("Z^t")]
    fn cycles_are_unitary_and_periodic(#[case] id: &str) {
        let gates = super::all().unwrap();
        let gate = gates.iter().find(|g| g.serialized_id() == id).unwrap();
        assert!(gate.is_time_dependent());
        for k in 0..8 {
            let m = gate.matrix_at(f64::from(k) / 8.0).unwrap();
            assert!(is_unitary(&m, TOLERANCE));
        }
        let start = gate.matrix_at(0.0).unwrap();
        let end = gate.matrix_at(1.0).unwrap();
        assert_abs_diff_eq!(*start, identity(2), epsilon = 1e-9);
        assert_abs_diff_eq!(*end, identity(2), epsilon = 1e-9);
    }
}
