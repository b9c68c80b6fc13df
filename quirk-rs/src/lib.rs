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

//! The gate model, drawing contract and gate registry behind a
//! [Quirk](https://github.com/Strilanc/Quirk)-style quantum circuit editor.
//!
//! Within this crate you'll find:
//!
//! * A [builder] for immutable, validated [gate descriptions]
//! * A [drawing contract] with a library of composable drawers, painting onto
//!   any [paint surface]
//! * A [registry] mapping serialized ids to gates, plus the [toolbox] layout and
//!   initial-state preparation sequences
//!
//! Painting is synchronous and stateless: every drawer is a pure function of the
//! [`GateDrawParams`](drawing::GateDrawParams) it is handed, so repainting a cell is
//! always safe.
//!
//! [builder]: crate::gate::GateBuilder
//! [gate descriptions]: crate::gate::Gate
//! [drawing contract]: crate::drawing::GateDrawer
//! [paint surface]: crate::paint::Painter
//! [registry]: crate::registry::GateRegistry
//! [toolbox]: crate::toolbox::Toolbox

mod macros;

pub mod config;
pub mod drawing;
pub mod gate;
pub mod gates;
pub mod geometry;
pub mod matrix;
pub mod paint;
pub mod registry;
pub mod toolbox;

pub use config::PaintConfig;
pub use gate::{Gate, GateBuilder, GateError};
pub use registry::{CustomGateSet, GateRegistry};
