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

//! The built-in gates.
//!
//! Each submodule defines one family of related gates. [`all`] gathers every one of them, in
//! the order the registry lists them.

mod arithmetic;
mod displays;
mod exponentiating;
mod half_turns;
mod permutations;
mod quarter_turns;
mod rotations;
mod special;
mod various_z;

use std::sync::Arc;

use crate::gate::{Gate, GateBuilder, GateError};

pub use displays::ProbabilityPainter;

/// Every built-in gate.
pub fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    let families: [fn() -> Result<Vec<Arc<Gate>>, GateError>; 9] = [
        special::all,
        displays::all,
        arithmetic::all,
        exponentiating::all,
        half_turns::all,
        quarter_turns::all,
        rotations::all,
        permutations::all,
        various_z::all,
    ];
    let mut gates = Vec::new();
    for family in families {
        gates.extend(family()?);
    }
    Ok(gates)
}

fn build_all(builders: impl IntoIterator<Item = GateBuilder>) -> Result<Vec<Arc<Gate>>, GateError> {
    builders
        .into_iter()
        .map(|builder| builder.build().map(Arc::new))
        .collect()
}
