use crate::geometry::{Point, Rect};

use super::{approximate_text_width, Fill, Font, Painter, Path, Stroke, TextStyle};

/// A single call made against a [`RecordingPainter`].
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    Save,
    Restore,
    MultiplyAlpha(f64),
    StrokeLine {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    FillRect {
        rect: Rect,
        fill: Fill,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
    },
    FillPath {
        path: Path,
        fill: Fill,
    },
    FillPie {
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        fill: Fill,
        stroke: Stroke,
    },
    Print {
        text: String,
        at: Point,
        style: TextStyle,
    },
}

/// A [`Painter`] that paints nothing and remembers every call, in order.
///
/// Two paint passes produced the same pixels when they produced the same ops.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<PaintOp> {
        self.ops
    }

    /// The text of every [`PaintOp::Print`], in order.
    pub fn printed_text(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Print { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
    }

    fn multiply_alpha(&mut self, factor: f64) {
        self.ops.push(PaintOp::MultiplyAlpha(factor));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.ops.push(PaintOp::StrokeLine {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.ops.push(PaintOp::StrokeRect {
            rect,
            stroke: stroke.clone(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Fill) {
        self.ops.push(PaintOp::FillRect {
            rect,
            fill: fill.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.ops.push(PaintOp::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn fill_path(&mut self, path: &Path, fill: &Fill) {
        self.ops.push(PaintOp::FillPath {
            path: path.clone(),
            fill: fill.clone(),
        });
    }

    fn print(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(PaintOp::Print {
            text: text.to_string(),
            at,
            style: style.clone(),
        });
    }

    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        approximate_text_width(text, font)
    }

    fn fill_pie(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        fill: &Fill,
        stroke: &Stroke,
    ) {
        self.ops.push(PaintOp::FillPie {
            center,
            radius,
            start_angle,
            sweep,
            fill: fill.clone(),
            stroke: stroke.clone(),
        });
    }
}
