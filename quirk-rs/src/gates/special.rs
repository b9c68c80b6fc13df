use std::sync::Arc;

use crate::drawing::{
    BarrierDrawer, ControlDrawer, IdentityDrawer, LocationIndependentDrawer, SwapDrawer,
};
use crate::gate::{Gate, GateBuilder, GateError};
use crate::matrix::identity;

use super::build_all;

pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    build_all([
        GateBuilder::new()
            .set_serialized_id_and_symbol("•")
            .set_title("Control")
            .set_blurb("Conditions on a qubit being ON.\nGates in the same column only apply to states meeting the condition.")
            .promise_has_no_net_effect_on_state_vector()
            .set_known_effect_to_matrix(identity(2))
            .mark_as_not_interested_in_controls()
            .set_drawer(ControlDrawer::control()),
        GateBuilder::new()
            .set_serialized_id_and_symbol("◦")
            .set_title("Anti-Control")
            .set_blurb("Conditions on a qubit being OFF.\nGates in the same column only apply to states meeting the condition.")
            .promise_has_no_net_effect_on_state_vector()
            .set_known_effect_to_matrix(identity(2))
            .mark_as_not_interested_in_controls()
            .set_drawer(ControlDrawer::anti_control()),
        GateBuilder::new()
            .set_serialized_id("Measure")
            .set_symbol("Meas")
            .set_title("Measurement Gate")
            .set_blurb("Measures whether a qubit is ON or OFF, without conditioning on the result.")
            .set_drawer(LocationIndependentDrawer::default()),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Swap")
            .set_title("Swap Gate")
            .set_blurb("Swaps the values of two qubits.\nPlace two in the same column.")
            .set_drawer(SwapDrawer),
        GateBuilder::new()
            .set_serialized_id_and_symbol("…")
            .set_title("Spacer")
            .set_blurb("A gate with no effect.")
            .promise_has_no_net_effect_on_state_vector()
            .set_known_effect_to_matrix(identity(2))
            .set_drawer(IdentityDrawer),
        GateBuilder::new()
            .set_serialized_id_and_symbol("I")
            .set_title("Identity Gate")
            .set_blurb("Leaves the qubit unchanged.")
            .promise_has_no_net_effect_on_state_vector()
            .set_known_effect_to_matrix(identity(2))
            .set_drawer(IdentityDrawer),
        GateBuilder::new()
            .set_serialized_id("barrier")
            .set_symbol("Barrier")
            .set_title("Barrier")
            .set_blurb("Marks a boundary that optimizers should not move gates across.")
            .promise_has_no_net_effect_on_state_vector()
            .mark_as_not_interested_in_controls()
            .set_drawer(BarrierDrawer),
    ])
}
