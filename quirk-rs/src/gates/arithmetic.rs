use std::sync::Arc;

use crate::drawing::SectionedDrawer;
use crate::gate::{Gate, GateError};

/// Modular addition of input `A` into the target register, modulo input `R`.
pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    let drawer = SectionedDrawer::even(["+A", "mod R"])?;
    let family = Gate::build_family(1, 16, |span, builder| {
        builder
            .set_serialized_id(format!("+AmodR{span}"))
            .set_symbol("+A\nmod R")
            .set_title("Modular Addition Gate")
            .set_blurb("Adds input A into the target, mod input R.\nOnly affects values below R.")
            .promise_effect_is_unitary()
            .set_drawer(drawer.clone())
    })?;
    Ok(family.into_gates())
}
