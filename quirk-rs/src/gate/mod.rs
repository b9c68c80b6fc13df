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

//! Immutable descriptions of gates: what they're called, how they act, and how they're drawn.

mod builder;
mod family;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::drawing::{GateDrawer, SectionedDrawerError};
use crate::matrix::Matrix;

pub use builder::GateBuilder;
pub use family::GateFamily;

/// A matrix which depends on the animation phase, a value in `[0, 1)`.
///
/// Returns `None` at times where the gate has no small, known matrix.
pub type TimeVaryingMatrix = fn(f64) -> Option<Matrix>;

/// The effect of a gate, as a matrix, if it has one.
#[derive(Clone, Debug, Default)]
pub enum GateMatrix {
    /// No fixed matrix, e.g. arithmetic, parameterized or display-only gates.
    #[default]
    None,
    Constant(Matrix),
    TimeVarying(TimeVaryingMatrix),
}

impl GateMatrix {
    /// The matrix at the given animation phase.
    pub fn at(&self, time: f64) -> Option<Cow<'_, Matrix>> {
        match self {
            Self::None => None,
            Self::Constant(matrix) => Some(Cow::Borrowed(matrix)),
            Self::TimeVarying(matrix_at) => matrix_at(time).map(Cow::Owned),
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum GateError {
    #[error("a gate must have a non-empty serialized id")]
    MissingSerializedId,

    #[error("gate `{serialized_id}` must have a non-empty symbol")]
    MissingSymbol { serialized_id: String },

    #[error("gate `{serialized_id}` must span 1 or more wires")]
    ZeroHeight { serialized_id: String },

    #[error("gate `{serialized_id}` spans {height} wire{} but its matrix is {rows}x{cols}", if *height == 1 { "" } else { "s" })]
    MatrixSizeMismatch {
        serialized_id: String,
        height: usize,
        rows: usize,
        cols: usize,
    },

    #[error("gate `{serialized_id}` is promised to be unitary but its matrix isn't")]
    NonUnitaryMatrix { serialized_id: String },

    #[error("gate `{serialized_id}` has no net effect but its matrix isn't the identity at time {time}")]
    NoNetEffectMatrixNotIdentity { serialized_id: String, time: String },

    #[error("gate `{serialized_id}` has a bit permutation which isn't a bijection on 0..{height}: {image:?}")]
    InvalidPermutation {
        serialized_id: String,
        height: usize,
        image: Vec<usize>,
    },

    #[error("a gate family needs 1 <= min span <= max span, got {min}..={max}")]
    EmptyFamily { min: usize, max: usize },

    #[error(transparent)]
    Sectioned(#[from] SectionedDrawerError),
}

/// A described and possibly time-varying quantum operation.
///
/// Gates are built once with a [`GateBuilder`] and never change afterwards. Variants of a gate
/// (a different exponent, a different span) are distinct gates.
#[derive(Clone)]
pub struct Gate {
    serialized_id: String,
    symbol: String,
    title: String,
    blurb: String,
    height: usize,
    matrix: GateMatrix,
    is_unitary: bool,
    has_no_net_effect: bool,
    interested_in_controls: bool,
    can_resize_up: bool,
    can_resize_down: bool,
    bit_permutation: Option<Vec<usize>>,
    drawer: Arc<dyn GateDrawer>,
}

impl Gate {
    /// The key used to persist and look up this gate.
    pub fn serialized_id(&self) -> &str {
        &self.serialized_id
    }

    /// The label drawn on the gate.
    ///
    /// Lines after the first are drawn underneath it; text after a `^` is drawn as a
    /// superscript.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blurb(&self) -> &str {
        &self.blurb
    }

    /// The number of wires the gate spans.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn matrix(&self) -> &GateMatrix {
        &self.matrix
    }

    /// The gate's matrix at the given animation phase, if it has one.
    pub fn matrix_at(&self, time: f64) -> Option<Cow<'_, Matrix>> {
        self.matrix.at(time)
    }

    pub fn is_time_dependent(&self) -> bool {
        matches!(self.matrix, GateMatrix::TimeVarying(_))
    }

    pub fn is_unitary(&self) -> bool {
        self.is_unitary
    }

    pub fn has_no_net_effect(&self) -> bool {
        self.has_no_net_effect
    }

    pub fn is_interested_in_controls(&self) -> bool {
        self.interested_in_controls
    }

    pub fn can_resize_up(&self) -> bool {
        self.can_resize_up
    }

    pub fn can_resize_down(&self) -> bool {
        self.can_resize_down
    }

    pub fn can_change_in_size(&self) -> bool {
        self.can_resize_up || self.can_resize_down
    }

    /// Where wire `i` ends up, for gates that only reorder wires.
    pub fn bit_permutation(&self, i: usize) -> Option<usize> {
        self.bit_permutation.as_ref()?.get(i).copied()
    }

    pub fn is_bit_permutation(&self) -> bool {
        self.bit_permutation.is_some()
    }

    pub fn drawer(&self) -> &dyn GateDrawer {
        self.drawer.as_ref()
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate")
            .field("serialized_id", &self.serialized_id)
            .field("symbol", &self.symbol)
            .field("height", &self.height)
            .field("matrix", &self.matrix)
            .field("is_unitary", &self.is_unitary)
            .field("has_no_net_effect", &self.has_no_net_effect)
            .field("can_resize_up", &self.can_resize_up)
            .field("can_resize_down", &self.can_resize_down)
            .field("bit_permutation", &self.bit_permutation)
            .field("drawer", &self.drawer)
            .finish_non_exhaustive()
    }
}
