// Copyright 2024 The quirk-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lookup of gates by serialized id.

use std::sync::Arc;

use indexmap::map::Entry;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::drawing::MatrixDrawer;
use crate::gate::{Gate, GateBuilder, GateError};
use crate::gates;
use crate::matrix::{qubit_span, Matrix};

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum RegistryError {
    #[error("more than one gate has the serialized id {0:?}")]
    DuplicateId(String),

    #[error("no gate has the serialized id {0:?}")]
    UnknownGate(String),

    #[error("a {rows}x{cols} matrix doesn't act on a whole number of qubits")]
    NotQubitSized { rows: usize, cols: usize },

    #[error(transparent)]
    Gate(#[from] GateError),
}

/// A source of gates defined outside the registry, e.g. by the user of a circuit editor.
pub trait CustomGateLookup {
    fn find_gate_with_serialized_id(&self, serialized_id: &str) -> Option<Arc<Gate>>;
}

/// Gates defined alongside a particular circuit.
#[derive(Clone, Debug, Default)]
pub struct CustomGateSet {
    gates: IndexMap<String, Arc<Gate>>,
}

impl CustomGateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, gate: Arc<Gate>) -> Result<(), RegistryError> {
        match self.gates.entry(gate.serialized_id().to_string()) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(gate);
                Ok(())
            }
        }
    }

    /// Define a gate whose effect is `matrix`, spanning as many wires as the matrix acts on.
    pub fn add_matrix_gate(
        &mut self,
        serialized_id: &str,
        symbol: &str,
        matrix: Matrix,
    ) -> Result<Arc<Gate>, RegistryError> {
        let (rows, cols) = matrix.dim();
        let height = qubit_span(&matrix)
            .filter(|&span| span > 0)
            .ok_or(RegistryError::NotQubitSized { rows, cols })?;
        let gate = Arc::new(
            GateBuilder::new()
                .set_serialized_id(serialized_id)
                .set_symbol(symbol)
                .set_title("Custom Gate")
                .set_blurb("A gate defined by a matrix.")
                .set_height(height)
                .set_known_effect_to_matrix(matrix)
                .set_drawer(MatrixDrawer)
                .build()?,
        );
        self.insert(gate.clone())?;
        Ok(gate)
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Gate>> {
        self.gates.values()
    }
}

impl CustomGateLookup for CustomGateSet {
    fn find_gate_with_serialized_id(&self, serialized_id: &str) -> Option<Arc<Gate>> {
        self.gates.get(serialized_id).cloned()
    }
}

static SHARED: Lazy<GateRegistry> =
    Lazy::new(|| GateRegistry::standard().expect("the built-in gates are valid and unique"));

/// Every known gate, keyed by serialized id, in the order they were registered.
///
/// Built once and never modified.
#[derive(Clone, Debug)]
pub struct GateRegistry {
    gates: IndexMap<String, Arc<Gate>>,
}

impl GateRegistry {
    pub fn build(gates: impl IntoIterator<Item = Arc<Gate>>) -> Result<Self, RegistryError> {
        let mut by_id = IndexMap::new();
        for gate in gates {
            match by_id.entry(gate.serialized_id().to_string()) {
                Entry::Occupied(entry) => {
                    warn!(serialized_id = %entry.key(), "duplicate gate id");
                    return Err(RegistryError::DuplicateId(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(gate);
                }
            }
        }
        debug!(gates = by_id.len(), "built gate registry");
        Ok(Self { gates: by_id })
    }

    /// A registry of the built-in gates.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::build(gates::all()?)
    }

    /// A process-wide registry of the built-in gates, built on first use.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    pub fn get(&self, serialized_id: &str) -> Option<&Arc<Gate>> {
        self.gates.get(serialized_id)
    }

    /// Find a gate among the registered gates, then among `custom`.
    pub fn find_gate_by_id(
        &self,
        serialized_id: &str,
        custom: &dyn CustomGateLookup,
    ) -> Option<Arc<Gate>> {
        self.get(serialized_id)
            .cloned()
            .or_else(|| custom.find_gate_with_serialized_id(serialized_id))
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Gate>> {
        self.gates.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.gates.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;

    use super::{CustomGateSet, GateRegistry, RegistryError};
    use crate::gate::GateBuilder;
    use crate::matrix::{identity, HADAMARD};

    fn gate(id: &str) -> Arc<crate::Gate> {
        Arc::new(
            GateBuilder::new()
                .set_serialized_id_and_symbol(id)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = GateRegistry::build([gate("A"), gate("B"), gate("A")]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("A".into()));
    }

    #[test]
    fn registration_order_is_kept() {
        let registry = GateRegistry::build([gate("B"), gate("A"), gate("C")]).unwrap();
        assert_eq!(registry.ids().collect::<Vec<_>>(), ["B", "A", "C"]);
    }

    #[rstest]
    #[case("H", true)]
    #[case("custom", true)]
    #[case("nope", false)]
    fn registered_gates_shadow_custom_ones(#[case] id: &str, #[case] found: bool) {
        let registry = GateRegistry::build([gate("H")]).unwrap();
        let mut custom = CustomGateSet::new();
        custom.add_matrix_gate("custom", "C", identity(4)).unwrap();
        custom.add_matrix_gate("H", "not H", HADAMARD.clone()).unwrap();

        let result = registry.find_gate_by_id(id, &custom);
        assert_eq!(result.is_some(), found);
        if id == "H" {
            assert_eq!(result.unwrap().symbol(), "H");
        }
    }

    #[test]
    fn custom_gate_height_follows_the_matrix() {
        let mut custom = CustomGateSet::new();
        let gate = custom.add_matrix_gate("cnot-ish", "U", identity(4)).unwrap();
        assert_eq!(gate.height(), 2);
        assert_eq!(custom.len(), 1);
    }

    #[rstest]
    #[case(identity(3))]
    #[case(identity(1))]
    fn custom_matrices_must_act_on_qubits(#[case] matrix: crate::matrix::Matrix) {
        let (rows, cols) = matrix.dim();
        let err = CustomGateSet::new()
            .add_matrix_gate("bad", "B", matrix)
            .unwrap_err();
        assert_eq!(err, RegistryError::NotQubitSized { rows, cols });
    }

    #[test]
    fn custom_ids_must_be_unique() {
        let mut custom = CustomGateSet::new();
        custom.add_matrix_gate("U", "U", identity(2)).unwrap();
        let err = custom.add_matrix_gate("U", "U", identity(2)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("U".into()));
    }

    #[test]
    fn standard_registry_builds() {
        let registry = GateRegistry::standard().unwrap();
        assert!(!registry.is_empty());
        assert!(registry.get("Z^¼").is_some());
        assert!(std::ptr::eq(GateRegistry::shared(), GateRegistry::shared()));
    }
}
