use std::sync::Arc;

use crate::gate::{Gate, GateBuilder, GateError};
use crate::matrix::{HADAMARD, PAULI_X, PAULI_Y, PAULI_Z};

use super::build_all;

pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    build_all([
        GateBuilder::new()
            .set_serialized_id_and_symbol("H")
            .set_title("Hadamard Gate")
            .set_blurb("Creates simple superpositions.\nMaps ON to ON + OFF.\nMaps OFF to ON - OFF.")
            .set_known_effect_to_matrix(HADAMARD.clone()),
        GateBuilder::new()
            .set_serialized_id_and_symbol("X")
            .set_title("Pauli X Gate")
            .set_blurb("The NOT gate.\nToggles between ON and OFF.")
            .set_known_effect_to_matrix(PAULI_X.clone()),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Y")
            .set_title("Pauli Y Gate")
            .set_blurb("A combination of the X and Z gates.")
            .set_known_effect_to_matrix(PAULI_Y.clone()),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Z")
            .set_title("Pauli Z Gate")
            .set_blurb("The phase flip gate.\nNegates phases when the qubit is ON.")
            .set_known_effect_to_matrix(PAULI_Z.clone()),
    ])
}
