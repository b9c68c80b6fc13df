use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::drawing::{GateDrawer, HighlightedDrawer};
use crate::matrix::{self, Matrix};

use super::{Gate, GateError, GateMatrix, TimeVaryingMatrix};

/// Tolerance used when checking promises made about a gate's matrix.
const PROMISE_TOLERANCE: f64 = 1e-6;

/// Times at which time-varying matrices are sampled during validation.
const SAMPLES_PER_CYCLE: u32 = 16;

type BitPermutation = Box<dyn Fn(usize) -> usize>;

/// Assembles a [`Gate`], validating it when [`GateBuilder::build`] is called.
///
/// ```
/// use quirk_rs::{matrix, GateBuilder};
///
/// let t = GateBuilder::new()
///     .set_serialized_id_and_symbol("Z^¼")
///     .set_title("T Gate")
///     .set_known_effect_to_matrix(matrix::phase(std::f64::consts::FRAC_PI_4))
///     .build()
///     .unwrap();
/// assert_eq!(t.serialized_id(), "Z^¼");
/// assert!(t.is_unitary());
/// ```
pub struct GateBuilder {
    serialized_id: String,
    symbol: String,
    title: String,
    blurb: String,
    height: usize,
    matrix: GateMatrix,
    promised_unitary: bool,
    has_no_net_effect: bool,
    interested_in_controls: bool,
    can_resize_up: bool,
    can_resize_down: bool,
    bit_permutation: Option<BitPermutation>,
    drawer: Option<Arc<dyn GateDrawer>>,
}

impl Default for GateBuilder {
    fn default() -> Self {
        Self {
            serialized_id: String::new(),
            symbol: String::new(),
            title: String::new(),
            blurb: String::new(),
            height: 1,
            matrix: GateMatrix::None,
            promised_unitary: false,
            has_no_net_effect: false,
            interested_in_controls: true,
            can_resize_up: false,
            can_resize_down: false,
            bit_permutation: None,
            drawer: None,
        }
    }
}

impl fmt::Debug for GateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateBuilder")
            .field("serialized_id", &self.serialized_id)
            .field("symbol", &self.symbol)
            .field("height", &self.height)
            .field("matrix", &self.matrix)
            .field("has_bit_permutation", &self.bit_permutation.is_some())
            .finish_non_exhaustive()
    }
}

impl GateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same text as both the serialized id and the symbol.
    pub fn set_serialized_id_and_symbol(self, id_and_symbol: impl Into<String>) -> Self {
        let id_and_symbol = id_and_symbol.into();
        self.set_symbol(id_and_symbol.clone())
            .set_serialized_id(id_and_symbol)
    }

    pub fn set_serialized_id(mut self, serialized_id: impl Into<String>) -> Self {
        self.serialized_id = serialized_id.into();
        self
    }

    pub fn set_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = blurb.into();
        self
    }

    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn set_known_effect_to_matrix(mut self, matrix: Matrix) -> Self {
        self.matrix = GateMatrix::Constant(matrix);
        self
    }

    pub fn set_effect_to_time_varying_matrix(mut self, matrix_at: TimeVaryingMatrix) -> Self {
        self.matrix = GateMatrix::TimeVarying(matrix_at);
        self
    }

    pub fn promise_has_no_net_effect_on_state_vector(mut self) -> Self {
        self.has_no_net_effect = true;
        self.promised_unitary = true;
        self
    }

    pub fn promise_effect_is_unitary(mut self) -> Self {
        self.promised_unitary = true;
        self
    }

    pub fn mark_as_not_interested_in_controls(mut self) -> Self {
        self.interested_in_controls = false;
        self
    }

    pub fn set_drawer<D: GateDrawer + 'static>(mut self, drawer: D) -> Self {
        self.drawer = Some(Arc::new(drawer));
        self
    }

    /// Declare the gate to be a pure relabeling of its wires: wire `i` moves to `permutation(i)`.
    ///
    /// The function is tabulated over `0..height` when the gate is built.
    pub fn set_known_effect_to_bit_permutation(
        mut self,
        permutation: impl Fn(usize) -> usize + 'static,
    ) -> Self {
        self.bit_permutation = Some(Box::new(permutation));
        self
    }

    pub fn set_resizable(mut self, can_resize_up: bool, can_resize_down: bool) -> Self {
        self.can_resize_up = can_resize_up;
        self.can_resize_down = can_resize_down;
        self
    }

    /// Validate the configuration and produce the gate.
    pub fn build(self) -> Result<Gate, GateError> {
        if self.serialized_id.is_empty() {
            return Err(GateError::MissingSerializedId);
        }
        let serialized_id = self.serialized_id;
        if self.symbol.is_empty() {
            return Err(GateError::MissingSymbol { serialized_id });
        }
        if self.height == 0 {
            return Err(GateError::ZeroHeight { serialized_id });
        }

        let is_unitary = match check_matrix(
            &serialized_id,
            self.height,
            &self.matrix,
            self.has_no_net_effect,
        )? {
            Some(matrix_is_unitary) if self.promised_unitary && !matrix_is_unitary => {
                return Err(GateError::NonUnitaryMatrix { serialized_id });
            }
            Some(matrix_is_unitary) => matrix_is_unitary,
            None => self.promised_unitary,
        };

        let bit_permutation = match self.bit_permutation {
            Some(permutation) => {
                let image = (0..self.height).map(permutation).collect::<Vec<_>>();
                let is_bijection = image.iter().all(|&j| j < self.height)
                    && image.iter().unique().count() == self.height;
                if !is_bijection {
                    return Err(GateError::InvalidPermutation {
                        serialized_id,
                        height: self.height,
                        image,
                    });
                }
                Some(image)
            }
            None => None,
        };

        Ok(Gate {
            serialized_id,
            symbol: self.symbol,
            title: self.title,
            blurb: self.blurb,
            height: self.height,
            matrix: self.matrix,
            is_unitary,
            has_no_net_effect: self.has_no_net_effect,
            interested_in_controls: self.interested_in_controls,
            can_resize_up: self.can_resize_up,
            can_resize_down: self.can_resize_down,
            bit_permutation,
            drawer: self
                .drawer
                .unwrap_or_else(|| Arc::new(HighlightedDrawer::default())),
        })
    }
}

/// Check the matrix's size and the no-net-effect promise at every sampled time.
///
/// Returns whether a constant matrix is unitary, or `None` when there's no constant matrix.
fn check_matrix(
    serialized_id: &str,
    height: usize,
    matrix: &GateMatrix,
    has_no_net_effect: bool,
) -> Result<Option<bool>, GateError> {
    let dimension = u32::try_from(height)
        .ok()
        .and_then(|h| 1usize.checked_shl(h));
    let times: Vec<f64> = match matrix {
        GateMatrix::None => return Ok(None),
        GateMatrix::Constant(_) => vec![0.0],
        GateMatrix::TimeVarying(_) => (0..=SAMPLES_PER_CYCLE)
            .map(|k| f64::from(k) / f64::from(SAMPLES_PER_CYCLE))
            .collect(),
    };

    for time in times {
        let Some(sample) = matrix.at(time) else {
            continue;
        };
        let (rows, cols) = sample.dim();
        if Some(rows) != dimension || rows != cols {
            return Err(GateError::MatrixSizeMismatch {
                serialized_id: serialized_id.to_string(),
                height,
                rows,
                cols,
            });
        }
        if has_no_net_effect && !matrix::is_identity(&sample, PROMISE_TOLERANCE) {
            return Err(GateError::NoNetEffectMatrixNotIdentity {
                serialized_id: serialized_id.to_string(),
                time: time.to_string(),
            });
        }
    }

    Ok(match matrix {
        GateMatrix::Constant(m) => Some(matrix::is_unitary(m, PROMISE_TOLERANCE)),
        _ => None,
    })
}
