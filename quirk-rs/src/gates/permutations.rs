//! Gates that move qubits around without otherwise changing them.

use std::sync::Arc;

use crate::drawing::PermutationDrawer;
use crate::gate::{Gate, GateError};

const MIN_SPAN: usize = 2;
const MAX_SPAN: usize = 16;

pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    let reverse = Gate::build_family(MIN_SPAN, MAX_SPAN, |span, builder| {
        builder
            .set_serialized_id(format!("rev{span}"))
            .set_symbol("Reverse")
            .set_title("Reverse Order")
            .set_blurb("Swaps some qubits to reverse their order.")
            .set_known_effect_to_bit_permutation(move |i| span - 1 - i)
            .set_drawer(PermutationDrawer)
    })?;
    let rotate_up = Gate::build_family(MIN_SPAN, MAX_SPAN, |span, builder| {
        builder
            .set_serialized_id(format!("<<{span}"))
            .set_symbol("↟")
            .set_title("Left Rotate")
            .set_blurb("Rotates bits downward.")
            .set_known_effect_to_bit_permutation(move |i| (i + 1) % span)
            .set_drawer(PermutationDrawer)
    })?;
    let rotate_down = Gate::build_family(MIN_SPAN, MAX_SPAN, |span, builder| {
        builder
            .set_serialized_id(format!(">>{span}"))
            .set_symbol("↡")
            .set_title("Right Rotate")
            .set_blurb("Rotates bits upward.")
            .set_known_effect_to_bit_permutation(move |i| (i + span - 1) % span)
            .set_drawer(PermutationDrawer)
    })?;

    Ok(reverse
        .into_gates()
        .into_iter()
        .chain(rotate_up.into_gates())
        .chain(rotate_down.into_gates())
        .collect())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    #[case("rev4", [3, 2, 1, 0])]
    #[case("<<4", [1, 2, 3, 0])]
    #[case(">>4", [3, 0, 1, 2])]
    fn four_wire_permutations(#[case] id: &str, #[case] expected: [usize; 4]) {
        let gates = super::all().unwrap();
        let gate = gates.iter().find(|g| g.serialized_id() == id).unwrap();
        let actual: Vec<_> = (0..4).map(|i| gate.bit_permutation(i).unwrap()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn families_cover_every_span() {
        let gates = super::all().unwrap();
        assert_eq!(gates.len(), 3 * 15);
        let rev2 = gates.iter().find(|g| g.serialized_id() == "rev2").unwrap();
        assert!(rev2.can_resize_up());
        assert!(!rev2.can_resize_down());
    }
}
