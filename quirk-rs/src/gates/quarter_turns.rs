use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

use crate::gate::{Gate, GateBuilder, GateError};
use crate::matrix::{involution_power, phase, PAULI_X, PAULI_Y};

use super::build_all;

pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    build_all([
        GateBuilder::new()
            .set_serialized_id_and_symbol("Z^½")
            .set_title("√Z Gate")
            .set_blurb("Principal square root of Z.\nAlso known as the 'S' gate.")
            .set_known_effect_to_matrix(phase(FRAC_PI_2)),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Z^-½")
            .set_title("Z^-½ Gate")
            .set_blurb("Adjoint square root of Z.")
            .set_known_effect_to_matrix(phase(-FRAC_PI_2)),
        GateBuilder::new()
            .set_serialized_id_and_symbol("X^½")
            .set_title("√X Gate")
            .set_blurb("Principal square root of X.")
            .set_known_effect_to_matrix(involution_power(&PAULI_X, 0.5)),
        GateBuilder::new()
            .set_serialized_id_and_symbol("X^-½")
            .set_title("X^-½ Gate")
            .set_blurb("Adjoint square root of X.")
            .set_known_effect_to_matrix(involution_power(&PAULI_X, -0.5)),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Y^½")
            .set_title("√Y Gate")
            .set_blurb("Principal square root of Y.")
            .set_known_effect_to_matrix(involution_power(&PAULI_Y, 0.5)),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Y^-½")
            .set_title("Y^-½ Gate")
            .set_blurb("Adjoint square root of Y.")
            .set_known_effect_to_matrix(involution_power(&PAULI_Y, -0.5)),
    ])
}
