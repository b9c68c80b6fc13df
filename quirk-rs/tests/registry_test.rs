use std::collections::HashSet;
use std::sync::Arc;

use itertools::Itertools;
use proptest::prelude::*;
use rstest::rstest;

use quirk_rs::drawing::PermutationDrawer;
use quirk_rs::registry::{CustomGateLookup, CustomGateSet, GateRegistry};
use quirk_rs::toolbox::Toolbox;
use quirk_rs::{Gate, GateBuilder, GateError};

/// A lookup that knows nothing, standing in for a circuit with no custom gates.
struct NoCustomGates;

impl CustomGateLookup for NoCustomGates {
    fn find_gate_with_serialized_id(&self, _serialized_id: &str) -> Option<Arc<Gate>> {
        None
    }
}

#[test]
fn built_in_ids_are_unique() {
    let gates = quirk_rs::gates::all().unwrap();
    let ids: HashSet<_> = gates.iter().map(|g| g.serialized_id()).collect();
    assert_eq!(ids.len(), gates.len());
    assert_eq!(GateRegistry::shared().len(), gates.len());
}

#[test]
fn every_registered_gate_round_trips() {
    let registry = GateRegistry::shared();
    for gate in registry.iter() {
        let found = registry
            .find_gate_by_id(gate.serialized_id(), &NoCustomGates)
            .unwrap();
        assert!(Arc::ptr_eq(&found, gate));
    }
}

#[rstest]
#[case("")]
#[case("not a gate")]
#[case("Chance17")]
#[case("rev1")]
fn unknown_ids_are_absent(#[case] id: &str) {
    assert!(GateRegistry::shared()
        .find_gate_by_id(id, &CustomGateSet::new())
        .is_none());
}

proptest! {
    #[test]
    fn lookup_never_panics(id in "\\PC{0,12}") {
        let found = GateRegistry::shared().find_gate_by_id(&id, &NoCustomGates);
        if let Some(gate) = found {
            prop_assert_eq!(gate.serialized_id(), id.as_str());
        }
    }
}

#[test]
fn toolbox_gates_are_registered_and_distinct() {
    let registry = GateRegistry::shared();
    let groups = Toolbox::top_groups(registry)
        .unwrap()
        .into_iter()
        .chain(Toolbox::bottom_groups(registry).unwrap())
        .collect_vec();
    let ids = groups
        .iter()
        .flat_map(|group| group.present())
        .map(|gate| gate.serialized_id())
        .collect_vec();
    assert!(ids.iter().all_unique());
    for id in ids {
        assert!(registry.get(id).is_some(), "{id} isn't registered");
    }
}

#[test]
fn permutation_gates_are_bijections() {
    for gate in GateRegistry::shared().iter().filter(|g| g.is_bit_permutation()) {
        let images: Vec<_> = (0..gate.height())
            .map(|i| gate.bit_permutation(i).unwrap())
            .sorted()
            .collect();
        assert_eq!(images, (0..gate.height()).collect_vec(), "{}", gate.serialized_id());
    }
}

#[rstest]
#[case::duplicate_target(|i: usize| i / 2)]
#[case::out_of_range(|i: usize| i + 1)]
fn non_bijective_permutations_are_rejected(#[case] permutation: fn(usize) -> usize) {
    let err = GateBuilder::new()
        .set_serialized_id_and_symbol("bad")
        .set_height(4)
        .set_known_effect_to_bit_permutation(permutation)
        .set_drawer(PermutationDrawer)
        .build()
        .unwrap_err();
    assert!(matches!(err, GateError::InvalidPermutation { height: 4, .. }));
}

#[test]
fn families_resize_within_their_bounds() {
    let registry = GateRegistry::shared();
    let chance = registry.get("Chance").unwrap();
    let chance16 = registry.get("Chance16").unwrap();
    assert!(chance.can_resize_up() && !chance.can_resize_down());
    assert!(!chance16.can_resize_up() && chance16.can_resize_down());
    assert_eq!(chance16.height(), 16);
}
