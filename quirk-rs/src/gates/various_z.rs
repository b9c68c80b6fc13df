use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};
use std::sync::Arc;

use crate::drawing::MatrixSymbolExceptInToolboxDrawer;
use crate::gate::{Gate, GateBuilder, GateError};
use crate::matrix::phase;

use super::build_all;

pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    build_all([
        GateBuilder::new()
            .set_serialized_id_and_symbol("Z^¼")
            .set_title("Z^¼ Gate")
            .set_blurb("Principal fourth root of Z.\nAlso known as the 'T' gate.")
            .set_known_effect_to_matrix(phase(FRAC_PI_4)),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Z^-¼")
            .set_title("Z^-¼ Gate")
            .set_blurb("Adjoint fourth root of Z.")
            .set_known_effect_to_matrix(phase(-FRAC_PI_4)),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Z^⅛")
            .set_title("Z^⅛ Gate")
            .set_blurb("Principal eighth root of Z.")
            .set_known_effect_to_matrix(phase(FRAC_PI_8))
            .set_drawer(MatrixSymbolExceptInToolboxDrawer),
        GateBuilder::new()
            .set_serialized_id_and_symbol("Z^-⅛")
            .set_title("Z^-⅛ Gate")
            .set_blurb("Adjoint eighth root of Z.")
            .set_known_effect_to_matrix(phase(-FRAC_PI_8))
            .set_drawer(MatrixSymbolExceptInToolboxDrawer),
    ])
}
