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

//! An abstraction over an immediate-mode 2D canvas.
//!
//! Everything that draws a gate goes through the [`Painter`] trait. Calls are ordered side
//! effects on the surface; none of them can fail. Callers are responsible for only handing
//! the painter finite geometry.
//!
//! Geometry that is rendered more than once (e.g. filled and then outlined) can be described
//! a single time with [`PainterExt::trace`] and rendered with [`Traced::then_fill`] and
//! [`Traced::then_stroke`].

mod recording;
mod svg;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

pub use recording::{PaintOp, RecordingPainter};
pub use svg::SvgPainter;

/// A CSS color string, e.g. `#1a1a2e` or `rgba(0, 0, 0, 0.6)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    pub fn transparent() -> Self {
        Self::new("transparent")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(css: &str) -> Self {
        Self::new(css)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, in `[0, 1]`.
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    pub fn new(offset: f64, color: impl Into<Color>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// How an area is filled.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Color),
    LinearGradient {
        from: Point,
        to: Point,
        stops: Vec<ColorStop>,
    },
    RadialGradient {
        inner_center: Point,
        inner_radius: f64,
        outer_center: Point,
        outer_radius: f64,
        stops: Vec<ColorStop>,
    },
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<&Color> for Fill {
    fn from(color: &Color) -> Self {
        Self::Solid(color.clone())
    }
}

/// How a line or outline is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dash and gap lengths, or `None` for a solid line.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
            width: 1.0,
            dash: None,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }
}

impl From<&Color> for Stroke {
    fn from(color: &Color) -> Self {
        Self::new(color.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size_px: f64,
    pub family: String,
}

impl Font {
    pub fn new(size_px: f64, family: impl Into<String>) -> Self {
        Self {
            size_px,
            family: family.into(),
        }
    }
}

impl std::fmt::Display for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    Alphabetic,
    Bottom,
}

/// Everything about a piece of printed text other than its content and anchor point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: Color,
    pub font: Font,
    /// Text wider than this is scaled down to fit.
    pub max_width: f64,
    /// Text taller than this is scaled down to fit.
    pub max_height: f64,
}

impl TextStyle {
    pub fn new(color: Color, font: Font) -> Self {
        Self {
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            color,
            font,
            max_width: f64::INFINITY,
            max_height: f64::INFINITY,
        }
    }

    pub fn aligned(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }

    pub fn bounded(mut self, max_width: f64, max_height: f64) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Follows canvas conventions: angles in radians, measured clockwise on screen from +x.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Close,
}

/// Geometry recorded by a [`Tracer`], ready to be stroked or filled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Records path geometry without painting it.
#[derive(Debug, Default)]
pub struct Tracer {
    path: Path,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.path.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.path.segments.push(PathSegment::LineTo(p));
        self
    }

    /// An isolated line segment.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.move_to(Point::new(x1, y1)).line_to(Point::new(x2, y2))
    }

    /// A closed polygon through the given vertices. Fewer than two vertices trace nothing.
    pub fn polygon(&mut self, vertices: &[Point]) -> &mut Self {
        if let [first, rest @ ..] = vertices {
            if rest.is_empty() {
                return self;
            }
            self.move_to(*first);
            for p in rest {
                self.line_to(*p);
            }
            self.close();
        }
        self
    }

    pub fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> &mut Self {
        self.path.segments.push(PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
        self
    }

    pub fn circle(&mut self, center: Point, radius: f64) -> &mut Self {
        self.move_to(center.offset_by(radius, 0.0))
            .arc(center, radius, 0.0, 2.0 * PI, false)
            .close()
    }

    pub fn close(&mut self) -> &mut Self {
        self.path.segments.push(PathSegment::Close);
        self
    }

    pub fn into_path(self) -> Path {
        self.path
    }
}

/// An immediate-mode 2D paint surface.
pub trait Painter {
    /// Push the current alpha onto a stack.
    fn save(&mut self);

    /// Pop the alpha pushed by the matching [`Painter::save`].
    fn restore(&mut self);

    /// Scale the alpha of everything painted until the next [`Painter::restore`].
    fn multiply_alpha(&mut self, factor: f64);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    fn fill_rect(&mut self, rect: Rect, fill: &Fill);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    fn fill_path(&mut self, path: &Path, fill: &Fill);

    /// Print `text` anchored at `at`, scaled down to fit the style's bounds.
    fn print(&mut self, text: &str, at: Point, style: &TextStyle);

    /// The unscaled width `text` occupies when printed in `font`.
    fn measure_text(&self, text: &str, font: &Font) -> f64;

    /// Fill a circular sector starting at `start_angle` and sweeping `sweep` radians
    /// clockwise, with its edges outlined by `stroke`.
    fn fill_pie(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        fill: &Fill,
        stroke: &Stroke,
    ) {
        let mut tracer = Tracer::new();
        tracer
            .move_to(center)
            .arc(center, radius, start_angle, start_angle + sweep, false)
            .close();
        let path = tracer.into_path();
        self.fill_path(&path, fill);
        self.stroke_path(&path, stroke);
    }

    fn fill_polygon(&mut self, vertices: &[Point], fill: &Fill) {
        let mut tracer = Tracer::new();
        tracer.polygon(vertices);
        self.fill_path(&tracer.into_path(), fill);
    }

    fn stroke_polygon(&mut self, vertices: &[Point], stroke: &Stroke) {
        let mut tracer = Tracer::new();
        tracer.polygon(vertices);
        self.stroke_path(&tracer.into_path(), stroke);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: &Fill) {
        let mut tracer = Tracer::new();
        tracer.circle(center, radius);
        self.fill_path(&tracer.into_path(), fill);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &Stroke) {
        let mut tracer = Tracer::new();
        tracer.circle(center, radius);
        self.stroke_path(&tracer.into_path(), stroke);
    }
}

/// Geometry traced against a painter, waiting to be rendered.
pub struct Traced<'p, P: ?Sized> {
    painter: &'p mut P,
    path: Path,
}

impl<'p, P: Painter + ?Sized> Traced<'p, P> {
    pub fn then_stroke(self, stroke: impl Into<Stroke>) -> Self {
        self.painter.stroke_path(&self.path, &stroke.into());
        self
    }

    pub fn then_fill(self, fill: impl Into<Fill>) -> Self {
        self.painter.fill_path(&self.path, &fill.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<Color> for Stroke {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

pub trait PainterExt: Painter {
    /// Describe geometry once, then paint it any number of ways.
    fn trace(&mut self, trace: impl FnOnce(&mut Tracer)) -> Traced<'_, Self> {
        let mut tracer = Tracer::new();
        trace(&mut tracer);
        Traced {
            painter: self,
            path: tracer.into_path(),
        }
    }
}

impl<P: Painter + ?Sized> PainterExt for P {}

/// A deterministic stand-in for font metrics, for surfaces without a text shaper.
pub(crate) fn approximate_text_width(text: &str, font: &Font) -> f64 {
    text.chars().count() as f64 * font.size_px * 0.6
}

#[cfg(test)]
mod tests {
    use super::{Color, PaintOp, PainterExt, PathSegment, RecordingPainter, Stroke, Tracer};
    use crate::geometry::Point;

    #[test]
    fn polygon_closes_the_path() {
        let mut tracer = Tracer::new();
        tracer.polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]);
        let path = tracer.into_path();
        assert_eq!(path.segments.len(), 4);
        assert_eq!(path.segments.last(), Some(&PathSegment::Close));
    }

    #[test]
    fn degenerate_polygon_traces_nothing() {
        let mut tracer = Tracer::new();
        tracer.polygon(&[Point::new(0.0, 0.0)]);
        assert!(tracer.into_path().is_empty());
    }

    #[test]
    fn traced_geometry_is_reused() {
        let mut painter = RecordingPainter::new();
        let traced = painter
            .trace(|t| {
                t.line(0.0, 0.0, 5.0, 5.0);
            })
            .then_fill(Color::new("#000"))
            .then_stroke(Stroke::new("#fff"));
        let path = traced.path().clone();
        assert_eq!(
            painter.ops(),
            &[
                PaintOp::FillPath {
                    path: path.clone(),
                    fill: Color::new("#000").into(),
                },
                PaintOp::StrokePath {
                    path,
                    stroke: Stroke::new("#fff"),
                },
            ]
        );
    }
}
