use std::fmt::Debug;

use crate::config::PaintConfig;
use crate::gate::Gate;
use crate::geometry::{Point, Rect};
use crate::paint::Painter;

/// A read-only view of the circuit a gate is drawn in.
pub trait CircuitDefinition: Debug {
    /// Whether any gate in the column is a control.
    fn col_has_controls(&self, col: usize) -> bool;

    /// Whether the wire at `row` carries a classical (measured) value entering column `col`.
    fn loc_is_measured(&self, col: usize, row: usize) -> bool;

    /// The chance that the wire at `row` is ON just before column `col`, when it's known.
    fn probability(&self, _col: usize, _row: usize) -> Option<f64> {
        None
    }
}

/// A circuit with no controls, no measurements and no simulation results.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyCircuit;

impl CircuitDefinition for EmptyCircuit {
    fn col_has_controls(&self, _col: usize) -> bool {
        false
    }

    fn loc_is_measured(&self, _col: usize, _row: usize) -> bool {
        false
    }
}

/// The animation phase plus whatever is known about the surrounding circuit.
#[derive(Clone, Copy, Debug)]
pub struct DrawStats<'a> {
    /// Animation phase in `[0, 1)`, supplied by the caller's redraw loop.
    pub time: f64,
    pub circuit: &'a dyn CircuitDefinition,
}

impl DrawStats<'static> {
    pub fn at_time(time: f64) -> Self {
        Self {
            time,
            circuit: &EmptyCircuit,
        }
    }
}

impl Default for DrawStats<'static> {
    fn default() -> Self {
        Self::at_time(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CircuitPosition {
    pub col: usize,
    /// The row of the gate's top wire.
    pub row: usize,
}

impl CircuitPosition {
    /// The position `cols` columns right and `rows` rows down, unless that's past the largest
    /// representable index.
    pub fn offset(self, cols: usize, rows: usize) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add(cols)?,
            row: self.row.checked_add(rows)?,
        })
    }
}

/// Where a gate is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// In the palette of selectable gates.
    Toolbox,
    Circuit(CircuitPosition),
}

impl Placement {
    pub fn circuit(col: usize, row: usize) -> Self {
        Self::Circuit(CircuitPosition { col, row })
    }

    pub fn is_in_toolbox(&self) -> bool {
        matches!(self, Self::Toolbox)
    }

    pub fn position_in_circuit(&self) -> Option<CircuitPosition> {
        match self {
            Self::Toolbox => None,
            Self::Circuit(position) => Some(*position),
        }
    }
}

/// Everything a [`GateDrawer`](super::GateDrawer) needs for one paint of one gate.
///
/// Built fresh for every paint and dropped right after.
pub struct GateDrawParams<'a> {
    pub painter: &'a mut dyn Painter,
    pub config: &'a PaintConfig,
    pub gate: &'a Gate,
    pub rect: Rect,
    pub placement: Placement,
    /// The gate is under the mouse or being dragged.
    pub is_highlighted: bool,
    pub is_resize_showing: bool,
    pub is_resize_highlighted: bool,
    pub stats: DrawStats<'a>,
    /// Points the user is pointing at, e.g. the mouse position.
    pub focus_points: &'a [Point],
    pub hand_is_holding_something: bool,
}

impl<'a> GateDrawParams<'a> {
    pub fn new(
        painter: &'a mut dyn Painter,
        config: &'a PaintConfig,
        gate: &'a Gate,
        rect: Rect,
        placement: Placement,
    ) -> Self {
        Self {
            painter,
            config,
            gate,
            rect,
            placement,
            is_highlighted: false,
            is_resize_showing: false,
            is_resize_highlighted: false,
            stats: DrawStats::default(),
            focus_points: &[],
            hand_is_holding_something: false,
        }
    }

    pub fn highlighted(mut self, is_highlighted: bool) -> Self {
        self.is_highlighted = is_highlighted;
        self
    }

    pub fn resize(mut self, is_showing: bool, is_highlighted: bool) -> Self {
        self.is_resize_showing = is_showing;
        self.is_resize_highlighted = is_highlighted;
        self
    }

    pub fn with_stats(mut self, stats: DrawStats<'a>) -> Self {
        self.stats = stats;
        self
    }

    pub fn at_time(mut self, time: f64) -> Self {
        self.stats.time = time;
        self
    }

    pub fn with_focus_points(mut self, focus_points: &'a [Point]) -> Self {
        self.focus_points = focus_points;
        self
    }

    pub fn holding_something(mut self, hand_is_holding_something: bool) -> Self {
        self.hand_is_holding_something = hand_is_holding_something;
        self
    }

    pub fn is_in_toolbox(&self) -> bool {
        self.placement.is_in_toolbox()
    }

    pub fn position_in_circuit(&self) -> Option<CircuitPosition> {
        self.placement.position_in_circuit()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::CircuitPosition;

    #[rstest]
    #[case(CircuitPosition { col: 3, row: 4 }, 1, 2, Some(CircuitPosition { col: 4, row: 6 }))]
    #[case(CircuitPosition { col: usize::MAX, row: 0 }, 1, 0, None)]
    #[case(CircuitPosition { col: 0, row: usize::MAX }, 0, 1, None)]
    #[case(CircuitPosition { col: usize::MAX, row: usize::MAX }, 0, 0, Some(CircuitPosition { col: usize::MAX, row: usize::MAX }))]
    fn offsets_stop_at_the_edge_of_the_grid(
        #[case] position: CircuitPosition,
        #[case] cols: usize,
        #[case] rows: usize,
        #[case] expected: Option<CircuitPosition>,
    ) {
        assert_eq!(position.offset(cols, rows), expected);
    }
}
