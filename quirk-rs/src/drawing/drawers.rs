use std::f64::consts::PI;
use std::fmt::Debug;
use std::sync::Arc;

use tracing::trace;

use crate::geometry::{Point, Rect};
use crate::paint::{Color, Fill, PainterExt, Stroke, TextStyle};

use super::math_painter::{paint_matrix, MatrixColors};
use super::painting::{
    paint_background, paint_cycle_state, paint_gate_button, paint_gate_symbol,
    paint_location_independent_frame, paint_outline, paint_resize_tab,
};
use super::{CircuitDefinition, CircuitPosition, FillColor, GateDrawParams, GateDrawer};

/// How far proportions given to a [`SectionedDrawer`] may sum away from 1.
const PROPORTION_SUM_TOLERANCE: f64 = 1e-9;
const CONTROL_DOT_RADIUS: f64 = 5.0;
const BARRIER_COLOR: &str = "#888";

/// Background, outline, resize tab and symbol. The default way to draw a gate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightedDrawer {
    pub toolbox_fill: FillColor,
    pub normal_fill: FillColor,
}

impl HighlightedDrawer {
    pub fn new(toolbox_fill: FillColor, normal_fill: FillColor) -> Self {
        Self {
            toolbox_fill,
            normal_fill,
        }
    }
}

impl GateDrawer for HighlightedDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        paint_background(args, &self.toolbox_fill, &self.normal_fill);
        paint_outline(args);
        paint_resize_tab(args);
        paint_gate_symbol(args);
    }
}

/// Just the symbol on a wire-height band, once the gate is placed in a circuit.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelDrawer;

impl GateDrawer for LabelDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        if args.position_in_circuit().is_none() || args.is_highlighted {
            HighlightedDrawer::default().paint(args);
            return;
        }
        let rect = args.rect;
        let config = args.config;
        let cut = (rect.h - config.gate_radius * 2.0).max(0.0) / 2.0;
        let band = rect.skip_top(cut).skip_bottom(cut);
        if !band.is_degenerate() {
            args.painter
                .fill_rect(band, &Fill::from(&config.gate_fill_color));
        }
        paint_gate_symbol(args);
    }
}

/// A clipped, roughly circular frame around the symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationIndependentDrawer {
    pub normal_fill: FillColor,
}

impl GateDrawer for LocationIndependentDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        paint_location_independent_frame(args, &self.normal_fill, &FillColor::Gate);
        paint_gate_symbol(args);
    }
}

/// A picture of the gate's matrix at the current time.
///
/// Gates without a matrix at the current time are drawn by the default drawer.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixDrawer;

impl GateDrawer for MatrixDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        let gate = args.gate;
        let time = args.stats.time;
        let Some(matrix) = gate.matrix_at(time) else {
            trace!(
                gate = gate.serialized_id(),
                time,
                "no matrix to draw, using the default drawer"
            );
            HighlightedDrawer::default().paint(args);
            return;
        };
        let rect = args.rect;
        if rect.is_degenerate() {
            return;
        }

        let config = args.config;
        let back = if args.is_highlighted {
            &config.highlighted_gate_fill_color
        } else {
            &config.gate_fill_color
        };
        args.painter.fill_rect(rect, &Fill::from(back));
        let no_value = Color::transparent();
        paint_matrix(
            &mut *args.painter,
            &matrix,
            rect,
            MatrixColors {
                fore: &config.operation_fore_color,
                stroke: &config.default_stroke_color,
                back: &config.operation_back_color,
                no_value: &no_value,
            },
        );
        if args.is_highlighted {
            args.painter.save();
            args.painter.multiply_alpha(0.9);
            args.painter
                .fill_rect(rect, &Fill::from(&config.highlighted_gate_fill_color));
            args.painter.restore();
        }
        paint_outline(args);
    }
}

/// The default drawer in the toolbox, the [`MatrixDrawer`] everywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixSymbolExceptInToolboxDrawer;

impl GateDrawer for MatrixSymbolExceptInToolboxDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        if args.is_in_toolbox() {
            HighlightedDrawer::default().paint(args);
            return;
        }
        MatrixDrawer.paint(args);
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SectionedDrawerError {
    #[error("a sectioned drawer needs at least one section")]
    NoSections,

    #[error("got {labels} labels but {proportions} proportions")]
    CountMismatch { labels: usize, proportions: usize },

    #[error("proportion {index} is {value}, which isn't a finite non-negative number")]
    InvalidProportion { index: usize, value: f64 },

    #[error("proportions sum to {sum}, not 1")]
    ProportionsDontSumToOne { sum: f64 },
}

/// Horizontal bands, top to bottom, each with its own label and separated by dividers.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionedDrawer {
    labels: Vec<String>,
    proportions: Vec<f64>,
}

impl SectionedDrawer {
    /// One band per label, with the matching share of the gate's height.
    ///
    /// The proportions must be finite, non-negative and sum to 1.
    pub fn new<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        proportions: impl IntoIterator<Item = f64>,
    ) -> Result<Self, SectionedDrawerError> {
        let labels = labels.into_iter().map(Into::into).collect::<Vec<String>>();
        let proportions = proportions.into_iter().collect::<Vec<_>>();
        if labels.is_empty() {
            return Err(SectionedDrawerError::NoSections);
        }
        if labels.len() != proportions.len() {
            return Err(SectionedDrawerError::CountMismatch {
                labels: labels.len(),
                proportions: proportions.len(),
            });
        }
        if let Some((index, &value)) = proportions
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(SectionedDrawerError::InvalidProportion { index, value });
        }
        let sum = proportions.iter().sum::<f64>();
        if (sum - 1.0).abs() > PROPORTION_SUM_TOLERANCE {
            return Err(SectionedDrawerError::ProportionsDontSumToOne { sum });
        }
        Ok(Self {
            labels,
            proportions,
        })
    }

    /// Split the gate evenly between the labels.
    pub fn even<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self, SectionedDrawerError> {
        let labels = labels.into_iter().map(Into::into).collect::<Vec<String>>();
        let share = 1.0 / labels.len() as f64;
        let proportions = vec![share; labels.len()];
        Self::new(labels, proportions)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn proportions(&self) -> &[f64] {
        &self.proportions
    }
}

impl GateDrawer for SectionedDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        if args.is_in_toolbox() {
            HighlightedDrawer::default().paint(args);
            return;
        }
        let rect = args.rect;
        if rect.is_degenerate() {
            return;
        }
        let config = args.config;
        let back = if args.is_highlighted {
            &config.highlighted_gate_fill_color
        } else {
            &config.gate_fill_color
        };
        args.painter.fill_rect(rect, &Fill::from(back));

        let divider = Stroke::from(&config.accent_color);
        let style = TextStyle::new(
            config.default_text_color.clone(),
            config.gate_symbol_font.clone(),
        );
        let bands = rect.split_rows(&self.proportions);
        let last = bands.len().saturating_sub(1);
        for (i, (label, band)) in self.labels.iter().zip(&bands).enumerate() {
            if i < last {
                args.painter
                    .stroke_line(band.bottom_left(), band.bottom_right(), &divider);
            }
            args.painter.print(
                label,
                band.center(),
                &style.clone().bounded(rect.w - 2.0, band.h),
            );
        }
        args.painter
            .stroke_rect(rect, &Stroke::from(&config.default_stroke_color));
        paint_resize_tab(args);
    }
}

/// Wires rerouted from row `i` to row `p(i)`, for gates that only reorder wires.
#[derive(Clone, Copy, Debug, Default)]
pub struct PermutationDrawer;

fn wire_y(rect: Rect, height: usize, offset: usize, wire_spacing: f64) -> f64 {
    rect.center().y + (offset as f64 - height as f64 / 2.0 + 0.5) * wire_spacing
}

/// Measured wires are drawn as a pair of strands.
fn strand_offsets(is_measured: bool) -> &'static [f64] {
    if is_measured {
        &[-1.0, 1.0]
    } else {
        &[0.0]
    }
}

/// Locations past the edge of the addressable grid are never measured.
fn is_measured(circuit: &dyn CircuitDefinition, at: Option<CircuitPosition>) -> bool {
    at.is_some_and(|p| circuit.loc_is_measured(p.col, p.row))
}

/// Paint over the straight wires the circuit already drew through the gate.
fn erase_wires(args: &mut GateDrawParams<'_>, position: CircuitPosition) {
    let rect = args.rect;
    let config = args.config;
    let circuit = args.stats.circuit;
    let height = args.gate.height();
    let erase = Stroke::from(&config.background_color_circuit);
    for i in 0..height {
        let y = wire_y(rect, height, i, config.wire_spacing);
        let p = Point::new(rect.x, y);
        let c = Point::new(rect.x + config.gate_radius, y);
        let q = Point::new(rect.right(), y);
        let entering = position.offset(0, i);
        let leaving = position.offset(1, i);
        for &dy in strand_offsets(is_measured(circuit, entering)) {
            args.painter
                .stroke_line(p.offset_by(0.0, dy), c.offset_by(1.0, dy), &erase);
        }
        for &dy in strand_offsets(is_measured(circuit, leaving)) {
            args.painter
                .stroke_line(c.offset_by(-1.0, dy), q.offset_by(0.0, dy), &erase);
        }
    }
}

impl GateDrawer for PermutationDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        let Some(position) = args.position_in_circuit() else {
            HighlightedDrawer::default().paint(args);
            return;
        };
        let rect = args.rect;
        if rect.is_degenerate() {
            return;
        }
        let gate = args.gate;
        let config = args.config;
        let circuit = args.stats.circuit;

        if args.is_highlighted
            || args.is_resize_highlighted
            || circuit.col_has_controls(position.col)
        {
            paint_background(args, &FillColor::Gate, &FillColor::Gate);
            paint_outline(args);
            paint_resize_tab(args);
        } else {
            erase_wires(args, position);
        }

        let stroke = Stroke::from(&config.default_stroke_color);
        let (x1, x2) = (rect.x, rect.right());
        for i in 0..gate.height() {
            let j = gate.bit_permutation(i).unwrap_or(i);
            let y1 = wire_y(rect, gate.height(), i, config.wire_spacing);
            let y2 = wire_y(rect, gate.height(), j, config.wire_spacing);
            let strands = if is_measured(circuit, position.offset(0, i)) {
                vec![(if j > i { 1.0 } else { -1.0 }, -1.0), (0.0, 1.0)]
            } else {
                vec![(0.0, 0.0)]
            };
            args.painter
                .trace(|tracer| {
                    for &(dx, dy) in &strands {
                        tracer
                            .move_to(Point::new(x1.min(x1 + dx), y1 + dy))
                            .line_to(Point::new(x1 + dx, y1 + dy))
                            .line_to(Point::new(x2 + dx, y2 + dy))
                            .line_to(Point::new(x2.max(x2 + dx), y2 + dy));
                    }
                })
                .then_stroke(stroke.clone());
        }
    }
}

/// Decorates another drawer with a pie showing the phase of a periodic effect.
///
/// The phase comes from `args.stats.time`; the drawer keeps no clock of its own.
#[derive(Clone, Debug)]
pub struct CycleDrawer {
    inner: Arc<dyn GateDrawer>,
    pub x_scale: f64,
    pub y_scale: f64,
    /// Cycles of the indicator per cycle of the animation.
    pub t_scale: f64,
    pub zero_angle: f64,
}

impl CycleDrawer {
    pub fn new(inner: impl GateDrawer + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
            x_scale: 1.0,
            y_scale: 1.0,
            t_scale: 1.0,
            zero_angle: 0.0,
        }
    }

    /// The default drawer, with the time-dependent fill in the toolbox.
    pub fn time_dependent() -> Self {
        Self::new(HighlightedDrawer::new(
            FillColor::TimeDependent,
            FillColor::Gate,
        ))
    }

    pub fn with_scales(mut self, x_scale: f64, y_scale: f64) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    pub fn with_t_scale(mut self, t_scale: f64) -> Self {
        self.t_scale = t_scale;
        self
    }

    pub fn with_zero_angle(mut self, zero_angle: f64) -> Self {
        self.zero_angle = zero_angle;
        self
    }
}

impl GateDrawer for CycleDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        self.inner.paint(args);
        if args.is_in_toolbox() && !args.is_highlighted {
            return;
        }
        let angle = args.stats.time * 2.0 * PI * self.t_scale;
        paint_cycle_state(args, angle, self.x_scale, self.y_scale, self.zero_angle);
    }
}

/// Renders some view of the circuit's state into a display gate's rectangle.
pub trait StatePainter: Debug + Send + Sync {
    fn paint_state(&self, args: &mut GateDrawParams<'_>);
}

/// Decorates a [`StatePainter`] with the frame of a display gate.
///
/// Outside of a circuit there's no state to show, so the gate is drawn like any other gate.
#[derive(Clone, Debug)]
pub struct DisplayDrawer {
    state_painter: Arc<dyn StatePainter>,
}

impl DisplayDrawer {
    pub fn new(state_painter: impl StatePainter + 'static) -> Self {
        Self {
            state_painter: Arc::new(state_painter),
        }
    }
}

impl GateDrawer for DisplayDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        if args.position_in_circuit().is_none() {
            HighlightedDrawer::new(FillColor::DisplayInToolbox, FillColor::Gate).paint(args);
            return;
        }
        paint_resize_tab(args);
        self.state_painter.paint_state(args);
        if args.is_highlighted && !args.rect.is_degenerate() {
            let stroke = Stroke::from(&args.config.default_stroke_color).with_width(1.5);
            args.painter.stroke_rect(args.rect, &stroke);
        }
        // The state was painted over part of the tab; fade it back in on top.
        args.painter.save();
        args.painter.multiply_alpha(0.25);
        paint_resize_tab(args);
        args.painter.restore();
    }
}

/// Adds a "change" button to another drawer when the gate is highlighted in a circuit.
#[derive(Clone, Debug)]
pub struct ButtonDrawer {
    inner: Arc<dyn GateDrawer>,
}

impl ButtonDrawer {
    pub fn new(inner: impl GateDrawer + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl GateDrawer for ButtonDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        self.inner.paint(args);
        paint_gate_button(args);
    }
}

/// Only the symbol in a circuit; a full frame in the toolbox or when highlighted.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityDrawer;

impl GateDrawer for IdentityDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        if args.is_in_toolbox() || args.is_highlighted {
            paint_background(args, &FillColor::Gate, &FillColor::Gate);
            paint_outline(args);
        }
        paint_gate_symbol(args);
    }
}

/// A dashed line along the wire, labelled only in the toolbox or when highlighted.
#[derive(Clone, Copy, Debug, Default)]
pub struct BarrierDrawer;

impl GateDrawer for BarrierDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        let framed = args.is_in_toolbox() || args.is_highlighted;
        if framed {
            paint_background(args, &FillColor::Gate, &FillColor::Gate);
            paint_outline(args);
        }
        let rect = args.rect;
        if !rect.is_degenerate() {
            let y = rect.center().y;
            args.painter.stroke_line(
                Point::new(rect.x, y),
                Point::new(rect.right(), y),
                &Stroke::new(BARRIER_COLOR).with_width(2.0).dashed(5.0, 5.0),
            );
        }
        if framed {
            paint_gate_symbol(args);
        }
    }
}

/// A dot on the wire: filled for a control, hollow for an anti-control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlDrawer {
    pub is_anti_control: bool,
}

impl ControlDrawer {
    pub fn control() -> Self {
        Self {
            is_anti_control: false,
        }
    }

    pub fn anti_control() -> Self {
        Self {
            is_anti_control: true,
        }
    }
}

impl GateDrawer for ControlDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        if args.is_in_toolbox() || args.is_highlighted {
            paint_background(args, &FillColor::Gate, &FillColor::Gate);
            paint_outline(args);
        }
        let rect = args.rect;
        if rect.is_degenerate() {
            return;
        }
        let config = args.config;
        let c = rect.center();
        if self.is_anti_control {
            args.painter.fill_circle(
                c,
                CONTROL_DOT_RADIUS,
                &Fill::from(&config.background_color_circuit),
            );
            args.painter.stroke_circle(
                c,
                CONTROL_DOT_RADIUS,
                &Stroke::from(&config.default_stroke_color),
            );
        } else {
            args.painter.fill_circle(
                c,
                CONTROL_DOT_RADIUS,
                &Fill::from(&config.default_stroke_color),
            );
        }
    }
}

/// A cross on the wire, marking one end of a swap. Framed in the toolbox or when highlighted.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwapDrawer;

impl GateDrawer for SwapDrawer {
    fn paint(&self, args: &mut GateDrawParams<'_>) {
        if args.is_in_toolbox() || args.is_highlighted {
            HighlightedDrawer::default().paint(args);
            return;
        }
        let rect = args.rect;
        if rect.is_degenerate() {
            return;
        }
        let cross = Rect::centered_square_with_radius(rect.center(), rect.w / 6.0);
        let stroke = Stroke::from(&args.config.default_stroke_color);
        args.painter
            .stroke_line(cross.top_left(), cross.bottom_right(), &stroke);
        args.painter
            .stroke_line(cross.top_right(), cross.bottom_left(), &stroke);
    }
}
