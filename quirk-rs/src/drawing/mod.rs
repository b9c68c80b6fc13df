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

//! Strategies for painting gates.
//!
//! Every gate carries a [`GateDrawer`]. A drawer is a stateless function of the
//! [`GateDrawParams`] it's handed: painting twice with the same params produces the same
//! paint calls, and nothing about the params outlives the call. Drawers never fail; when a
//! richer drawer can't render (no matrix at the current time, a degenerate rectangle) it
//! degrades to a simpler one.

mod drawers;
mod math_painter;
mod painting;
mod params;

use std::fmt::Debug;

use crate::config::PaintConfig;
use crate::paint::Color;

pub use drawers::{
    BarrierDrawer, ButtonDrawer, ControlDrawer, CycleDrawer, DisplayDrawer, HighlightedDrawer,
    IdentityDrawer, LabelDrawer, LocationIndependentDrawer, MatrixDrawer,
    MatrixSymbolExceptInToolboxDrawer, PermutationDrawer, SectionedDrawer, SectionedDrawerError,
    StatePainter, SwapDrawer,
};
pub use math_painter::{paint_matrix, MatrixColors};
pub use painting::{
    gate_button_rect, paint_background, paint_cycle_state, paint_gate_button, paint_gate_symbol,
    paint_location_independent_frame, paint_outline, paint_resize_tab, paint_symbol,
    rect_for_resize_tab, split_exponent, trace_location_independent_outline,
};
pub use params::{
    CircuitDefinition, CircuitPosition, DrawStats, EmptyCircuit, GateDrawParams, Placement,
};

/// A way of painting a gate.
pub trait GateDrawer: Debug + Send + Sync {
    fn paint(&self, args: &mut GateDrawParams<'_>);
}

/// Paint `args.gate` with its own drawer.
pub fn draw_gate(args: &mut GateDrawParams<'_>) {
    let gate = args.gate;
    gate.drawer().paint(args);
}

/// A background color, either one of the configured roles or a fixed color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FillColor {
    #[default]
    Gate,
    TimeDependent,
    DisplayInToolbox,
    OperationBack,
    Custom(Color),
}

impl FillColor {
    pub fn resolve<'c>(&'c self, config: &'c PaintConfig) -> &'c Color {
        match self {
            Self::Gate => &config.gate_fill_color,
            Self::TimeDependent => &config.time_dependent_highlight_color,
            Self::DisplayInToolbox => &config.display_gate_in_toolbox_fill_color,
            Self::OperationBack => &config.operation_back_color,
            Self::Custom(color) => color,
        }
    }
}
