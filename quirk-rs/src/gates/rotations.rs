use std::sync::Arc;

use crate::drawing::{ButtonDrawer, CycleDrawer, LabelDrawer};
use crate::gate::{Gate, GateBuilder, GateError};

use super::build_all;

/// Rotations whose angle comes from an input register or a user-entered formula. Their
/// effect depends on things outside the gate, so no matrix is attached.
pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    let parameterized = ["X", "Y", "Z"].into_iter().map(|axis| {
        GateBuilder::new()
            .set_serialized_id(format!("{axis}^(A/2^n)"))
            .set_symbol(format!("{axis}^A/2ⁿ"))
            .set_title(format!("Parametrized {axis} Gate"))
            .set_blurb(format!(
                "Rotates around the {axis} axis by an angle taken from input A."
            ))
            .promise_effect_is_unitary()
            .set_drawer(LabelDrawer)
    });
    let formulaic = ["x", "y", "z"].into_iter().map(|axis| {
        GateBuilder::new()
            .set_serialized_id(format!("R{axis}ft"))
            .set_symbol(format!("R{axis}(f(t))"))
            .set_title(format!("Formula R{axis} Gate"))
            .set_blurb("Rotates by an angle given by a formula of time.")
            .promise_effect_is_unitary()
            .set_drawer(ButtonDrawer::new(CycleDrawer::time_dependent()))
    });
    build_all(parameterized.chain(formulaic))
}
