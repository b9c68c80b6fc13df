use std::sync::Arc;

use super::{Gate, GateBuilder, GateError};

/// The variants of a resizable gate, one per span, ordered by span.
#[derive(Clone, Debug)]
pub struct GateFamily {
    min_span: usize,
    gates: Vec<Arc<Gate>>,
}

impl GateFamily {
    /// The member spanning `span` wires, if the family has one.
    pub fn of_size(&self, span: usize) -> Option<&Arc<Gate>> {
        span.checked_sub(self.min_span)
            .and_then(|index| self.gates.get(index))
    }

    pub fn gates(&self) -> &[Arc<Gate>] {
        &self.gates
    }

    pub fn into_gates(self) -> Vec<Arc<Gate>> {
        self.gates
    }
}

impl Gate {
    /// Build one gate per span in `min_span..=max_span`.
    ///
    /// Each builder starts out with its height set and with resizing enabled toward the
    /// neighboring members of the family.
    pub fn build_family<F>(
        min_span: usize,
        max_span: usize,
        mut customize: F,
    ) -> Result<GateFamily, GateError>
    where
        F: FnMut(usize, GateBuilder) -> GateBuilder,
    {
        if min_span == 0 || min_span > max_span {
            return Err(GateError::EmptyFamily {
                min: min_span,
                max: max_span,
            });
        }
        let gates = (min_span..=max_span)
            .map(|span| {
                let builder = GateBuilder::new()
                    .set_height(span)
                    .set_resizable(span < max_span, span > min_span);
                customize(span, builder).build().map(Arc::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GateFamily { min_span, gates })
    }
}

#[cfg(test)]
mod tests {
    use crate::gate::{Gate, GateError};
    use rstest::rstest;

    fn reverse_family() -> Result<super::GateFamily, GateError> {
        Gate::build_family(2, 4, |span, builder| {
            builder
                .set_serialized_id(format!("rev{span}"))
                .set_symbol("Reverse")
                .set_known_effect_to_bit_permutation(move |i| span - 1 - i)
        })
    }

    #[rstest]
    #[case(2, Some((false, true)))]
    #[case(3, Some((true, true)))]
    #[case(4, Some((true, false)))]
    #[case(1, None)]
    #[case(5, None)]
    fn members_resize_toward_their_neighbors(
        #[case] span: usize,
        #[case] expected: Option<(bool, bool)>,
    ) {
        let family = reverse_family().expect("family is valid");
        let resize = family
            .of_size(span)
            .map(|g| (g.can_resize_down(), g.can_resize_up()));
        assert_eq!(resize, expected);
        if let Some(gate) = family.of_size(span) {
            assert_eq!(gate.height(), span);
            assert_eq!(gate.serialized_id(), format!("rev{span}"));
        }
    }

    #[test]
    fn empty_span_ranges_are_rejected() {
        let err = Gate::build_family(3, 2, |_, b| b).unwrap_err();
        assert_eq!(err, GateError::EmptyFamily { min: 3, max: 2 });
        let err = Gate::build_family(0, 2, |_, b| b).unwrap_err();
        assert_eq!(err, GateError::EmptyFamily { min: 0, max: 2 });
    }

    #[test]
    fn member_errors_propagate() {
        let err = Gate::build_family(1, 2, |span, builder| {
            builder
                .set_serialized_id(format!("bad{span}"))
                .set_symbol("bad")
                .set_known_effect_to_bit_permutation(|_| 0)
        })
        .unwrap_err();
        assert!(matches!(err, GateError::InvalidPermutation { height: 2, .. }));
    }
}
