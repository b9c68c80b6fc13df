//! The palettes of gates offered to the user, and the gates that prepare each initial state.

use std::sync::Arc;

use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::gate::Gate;
use crate::registry::{GateRegistry, RegistryError};

/// A titled block of toolbox slots. Empty slots are kept so that every group lines up.
#[derive(Clone, Debug)]
pub struct ToolboxGroup {
    pub hint: String,
    pub gates: Vec<Option<Arc<Gate>>>,
}

impl ToolboxGroup {
    fn resolve(
        hint: &str,
        ids: &[Option<&str>],
        registry: &GateRegistry,
    ) -> Result<Self, RegistryError> {
        let gates = ids
            .iter()
            .map(|slot| {
                slot.map(|id| {
                    registry
                        .get(id)
                        .cloned()
                        .ok_or_else(|| RegistryError::UnknownGate(id.to_string()))
                })
                .transpose()
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            hint: hint.to_string(),
            gates,
        })
    }

    /// The gates in this group, skipping empty slots.
    pub fn present(&self) -> impl Iterator<Item = &Arc<Gate>> {
        self.gates.iter().flatten()
    }
}

type Layout = &'static [(&'static str, &'static [Option<&'static str>])];

const TOP_LAYOUT: Layout = &[
    (
        "Basic Gates",
        &[Some("H"), Some("X"), Some("Y"), Some("Z"), Some("I"), Some("Swap")],
    ),
    (
        "Phase Gates",
        &[
            Some("Z^½"),
            Some("Z^-½"),
            Some("Z^¼"),
            Some("Z^-¼"),
            Some("Z^(A/2^n)"),
            None,
        ],
    ),
    ("SX Gates", &[Some("X^½"), Some("X^-½"), None, None]),
    (
        "Rotations",
        &[Some("Rxft"), Some("Ryft"), Some("Rzft"), None, None, None],
    ),
    (
        "Control & Measure",
        &[Some("•"), Some("Measure"), None, None, None, None],
    ),
    ("Utilities", &[Some("barrier"), None, None, None, None, None]),
];

const BOTTOM_LAYOUT: Layout = &[];

/// The toolbox layouts.
#[derive(Clone, Copy, Debug)]
pub struct Toolbox;

impl Toolbox {
    /// The groups shown above the circuit.
    pub fn top_groups(registry: &GateRegistry) -> Result<Vec<ToolboxGroup>, RegistryError> {
        let groups = Self::resolve(TOP_LAYOUT, registry)?;
        debug!(groups = groups.len(), "composed top toolbox");
        Ok(groups)
    }

    /// The groups shown below the circuit.
    pub fn bottom_groups(registry: &GateRegistry) -> Result<Vec<ToolboxGroup>, RegistryError> {
        let groups = Self::resolve(BOTTOM_LAYOUT, registry)?;
        debug!(groups = groups.len(), "composed bottom toolbox");
        Ok(groups)
    }

    fn resolve(layout: Layout, registry: &GateRegistry) -> Result<Vec<ToolboxGroup>, RegistryError> {
        layout
            .iter()
            .map(|(hint, ids)| ToolboxGroup::resolve(hint, ids, registry))
            .collect()
    }
}

/// A single-qubit state that a wire can start in.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, PartialEq, Eq, Hash)]
pub enum InitialState {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "i")]
    I,
    #[strum(serialize = "-i")]
    MinusI,
}

impl InitialState {
    /// The gates that turn `|0⟩` into this state, in the order they're applied.
    pub fn gate_ids(self) -> &'static [&'static str] {
        match self {
            Self::Zero => &[],
            Self::One => &["X"],
            Self::Plus => &["H"],
            Self::Minus => &["H", "Z"],
            Self::I => &["H", "Z^½"],
            Self::MinusI => &["H", "Z^-½"],
        }
    }
}

pub fn gates_for_initial_state(
    state: InitialState,
    registry: &GateRegistry,
) -> Result<Vec<Arc<Gate>>, RegistryError> {
    state
        .gate_ids()
        .iter()
        .map(|&id| {
            registry
                .get(id)
                .cloned()
                .ok_or_else(|| RegistryError::UnknownGate(id.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};
    use num_complex::Complex64;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::{gates_for_initial_state, InitialState, Toolbox};
    use crate::registry::{GateRegistry, RegistryError};
    use crate::{imag, real};

    #[test]
    fn top_toolbox_layout() {
        let groups = Toolbox::top_groups(GateRegistry::shared()).unwrap();
        let hints: Vec<_> = groups.iter().map(|g| g.hint.as_str()).collect();
        assert_eq!(
            hints,
            [
                "Basic Gates",
                "Phase Gates",
                "SX Gates",
                "Rotations",
                "Control & Measure",
                "Utilities"
            ]
        );
        let sizes: Vec<_> = groups.iter().map(|g| g.gates.len()).collect();
        assert_eq!(sizes, [6, 6, 4, 6, 6, 6]);
        let present: Vec<_> = groups[0].present().map(|g| g.serialized_id()).collect();
        assert_eq!(present, ["H", "X", "Y", "Z", "I", "Swap"]);
    }

    #[test]
    fn bottom_toolbox_is_empty() {
        assert!(Toolbox::bottom_groups(GateRegistry::shared())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn missing_toolbox_gates_are_reported() {
        let registry = GateRegistry::build(std::iter::empty::<Arc<crate::Gate>>()).unwrap();
        let err = Toolbox::top_groups(&registry).unwrap_err();
        assert_eq!(err, RegistryError::UnknownGate("H".into()));
    }

    #[rstest]
    #[case("0", InitialState::Zero)]
    #[case("-", InitialState::Minus)]
    #[case("-i", InitialState::MinusI)]
    fn initial_states_parse(#[case] text: &str, #[case] state: InitialState) {
        assert_eq!(InitialState::from_str(text).unwrap(), state);
        assert_eq!(state.to_string(), text);
    }

    #[rstest]
    #[case(InitialState::Zero, array![real!(1.0), real!(0.0)])]
    #[case(InitialState::One, array![real!(0.0), real!(1.0)])]
    #[case(InitialState::Plus, array![real!(1.0), real!(1.0)] / real!(2f64.sqrt()))]
    #[case(InitialState::Minus, array![real!(1.0), real!(-1.0)] / real!(2f64.sqrt()))]
    #[case(InitialState::I, array![real!(1.0), imag!(1.0)] / real!(2f64.sqrt()))]
    #[case(InitialState::MinusI, array![real!(1.0), imag!(-1.0)] / real!(2f64.sqrt()))]
    fn preparation_reaches_the_state(#[case] state: InitialState, #[case] expected: Array1<Complex64>) {
        let mut amplitudes = array![real!(1.0), real!(0.0)];
        for gate in gates_for_initial_state(state, GateRegistry::shared()).unwrap() {
            amplitudes = gate.matrix_at(0.0).unwrap().dot(&amplitudes);
        }
        assert_abs_diff_eq!(amplitudes, expected, epsilon = 1e-12);
    }

    #[test]
    fn every_state_has_a_preparation() {
        for state in InitialState::iter() {
            assert!(gates_for_initial_state(state, GateRegistry::shared()).is_ok());
        }
    }
}
