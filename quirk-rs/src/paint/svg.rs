use std::f64::consts::PI;
use std::fmt::Write;

use itertools::Itertools;

use crate::geometry::{Point, Rect};

use super::{
    approximate_text_width, ColorStop, Fill, Font, Painter, Path, PathSegment, Stroke, TextAlign,
    TextBaseline, TextStyle,
};

/// A [`Painter`] that renders into a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgPainter {
    width: f64,
    height: f64,
    alpha: f64,
    saved_alphas: Vec<f64>,
    defs: Vec<String>,
    body: Vec<String>,
}

impl SvgPainter {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            alpha: 1.0,
            saved_alphas: Vec::new(),
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Consume the painter and return the finished SVG document.
    pub fn finish(self) -> String {
        let mut out = String::new();
        // Writing into a `String` can't fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if !self.defs.is_empty() {
            let _ = writeln!(out, "<defs>\n{}\n</defs>", self.defs.join("\n"));
        }
        for element in &self.body {
            let _ = writeln!(out, "{element}");
        }
        out.push_str("</svg>\n");
        out
    }

    fn opacity(&self) -> String {
        if self.alpha < 1.0 {
            format!(r#" opacity="{}""#, self.alpha)
        } else {
            String::new()
        }
    }

    /// The value for a `fill` attribute, registering a gradient definition when needed.
    fn paint_server(&mut self, fill: &Fill) -> String {
        let id = format!("g{}", self.defs.len());
        let definition = match fill {
            Fill::Solid(color) => return escape(color.as_str()),
            Fill::LinearGradient { from, to, stops } => format!(
                r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">{}</linearGradient>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                gradient_stops(stops)
            ),
            Fill::RadialGradient {
                inner_center,
                inner_radius,
                outer_center,
                outer_radius,
                stops,
            } => format!(
                r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" fx="{}" fy="{}" fr="{inner_radius}" cx="{}" cy="{}" r="{outer_radius}">{}</radialGradient>"#,
                inner_center.x,
                inner_center.y,
                outer_center.x,
                outer_center.y,
                gradient_stops(stops)
            ),
        };
        self.defs.push(definition);
        format!("url(#{id})")
    }

    fn push(&mut self, element: String) {
        self.body.push(element);
    }
}

fn gradient_stops(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|s| {
            format!(
                r#"<stop offset="{}" stop-color="{}"/>"#,
                s.offset,
                escape(s.color.as_str())
            )
        })
        .join("")
}

fn stroke_attributes(stroke: &Stroke) -> String {
    let mut attributes = format!(
        r#" fill="none" stroke="{}" stroke-width="{}""#,
        escape(stroke.color.as_str()),
        stroke.width
    );
    if let Some((dash, gap)) = stroke.dash {
        let _ = write!(attributes, r#" stroke-dasharray="{dash} {gap}""#);
    }
    attributes
}

fn path_data(path: &Path) -> String {
    let mut data = String::new();
    let mut has_current_point = false;
    for segment in &path.segments {
        match segment {
            PathSegment::MoveTo(p) => {
                let _ = write!(data, "M{} {} ", p.x, p.y);
                has_current_point = true;
            }
            PathSegment::LineTo(p) => {
                let command = if has_current_point { 'L' } else { 'M' };
                let _ = write!(data, "{command}{} {} ", p.x, p.y);
                has_current_point = true;
            }
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                anticlockwise,
            } => {
                write_arc(
                    &mut data,
                    *center,
                    *radius,
                    *start_angle,
                    *end_angle,
                    *anticlockwise,
                    has_current_point,
                );
                has_current_point = true;
            }
            PathSegment::Close => data.push_str("Z "),
        }
    }
    data.trim_end().to_string()
}

fn write_arc(
    data: &mut String,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    anticlockwise: bool,
    has_current_point: bool,
) {
    let at = |angle: f64| {
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    };
    let start = at(start_angle);
    let command = if has_current_point { 'L' } else { 'M' };
    let _ = write!(data, "{command}{} {} ", start.x, start.y);

    let full_turn = 2.0 * PI;
    let raw = if anticlockwise {
        start_angle - end_angle
    } else {
        end_angle - start_angle
    };
    let delta = if raw >= full_turn {
        full_turn
    } else {
        raw.rem_euclid(full_turn)
    };
    let direction = if anticlockwise { -1.0 } else { 1.0 };
    let sweep_flag = u8::from(!anticlockwise);

    // A single SVG arc command can't describe a full circle.
    if delta >= full_turn - 1e-9 {
        for half in [1.0, 2.0] {
            let p = at(start_angle + direction * PI * half);
            let _ = write!(data, "A{radius} {radius} 0 0 {sweep_flag} {} {} ", p.x, p.y);
        }
    } else {
        let end = at(start_angle + direction * delta);
        let large_arc = u8::from(delta > PI);
        let _ = write!(
            data,
            "A{radius} {radius} 0 {large_arc} {sweep_flag} {} {} ",
            end.x, end.y
        );
    }
}

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            c => c.to_string(),
        })
        .collect()
}

impl Painter for SvgPainter {
    fn save(&mut self) {
        self.saved_alphas.push(self.alpha);
    }

    fn restore(&mut self) {
        if let Some(alpha) = self.saved_alphas.pop() {
            self.alpha = alpha;
        }
    }

    fn multiply_alpha(&mut self, factor: f64) {
        self.alpha *= factor;
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let element = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}{}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attributes(stroke),
            self.opacity()
        );
        self.push(element);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let element = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            stroke_attributes(stroke),
            self.opacity()
        );
        self.push(element);
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Fill) {
        let paint = self.paint_server(fill);
        let element = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{paint}"{}/>"#,
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            self.opacity()
        );
        self.push(element);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        if path.is_empty() {
            return;
        }
        let element = format!(
            r#"<path d="{}"{}{}/>"#,
            path_data(path),
            stroke_attributes(stroke),
            self.opacity()
        );
        self.push(element);
    }

    fn fill_path(&mut self, path: &Path, fill: &Fill) {
        if path.is_empty() {
            return;
        }
        let paint = self.paint_server(fill);
        let element = format!(
            r#"<path d="{}" fill="{paint}"{}/>"#,
            path_data(path),
            self.opacity()
        );
        self.push(element);
    }

    fn print(&mut self, text: &str, at: Point, style: &TextStyle) {
        let natural_width = self.measure_text(text, &style.font);
        let mut scale: f64 = 1.0;
        if natural_width > style.max_width && natural_width > 0.0 {
            scale = scale.min(style.max_width / natural_width);
        }
        if style.font.size_px > style.max_height && style.font.size_px > 0.0 {
            scale = scale.min(style.max_height / style.font.size_px);
        }
        let anchor = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match style.baseline {
            TextBaseline::Top => "text-before-edge",
            TextBaseline::Hanging => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Bottom => "text-after-edge",
        };
        let element = format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{}"{}>{}</text>"#,
            at.x,
            at.y,
            style.font.size_px * scale.max(0.0),
            escape(&style.font.family),
            escape(style.color.as_str()),
            self.opacity(),
            escape(text)
        );
        self.push(element);
    }

    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        approximate_text_width(text, font)
    }
}

#[cfg(test)]
mod tests {
    use super::{escape, path_data, SvgPainter};
    use crate::geometry::{Point, Rect};
    use crate::paint::{Color, Fill, ColorStop, Painter, Stroke, TextStyle, Font, Tracer};

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn full_circle_uses_two_arcs() {
        let mut tracer = Tracer::new();
        tracer.circle(Point::new(0.0, 0.0), 5.0);
        let data = path_data(&tracer.into_path());
        assert_eq!(data.matches('A').count(), 2);
        assert!(data.ends_with('Z'));
    }

    #[test]
    fn gradients_become_definitions() {
        let mut painter = SvgPainter::new(40.0, 40.0);
        painter.fill_rect(
            Rect::new(0.0, 0.0, 40.0, 40.0),
            &Fill::LinearGradient {
                from: Point::new(0.0, 0.0),
                to: Point::new(0.0, 40.0),
                stops: vec![ColorStop::new(0.0, "#000"), ColorStop::new(1.0, "#fff")],
            },
        );
        painter.stroke_rect(Rect::new(0.0, 0.0, 40.0, 40.0), &Stroke::new("#0ff"));
        let svg = painter.finish();
        assert!(svg.contains(r#"<linearGradient id="g0""#));
        assert!(svg.contains(r#"fill="url(#g0)""#));
        assert!(svg.contains(r##"stroke="#0ff""##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn alpha_is_scoped_by_save_and_restore() {
        let mut painter = SvgPainter::new(10.0, 10.0);
        painter.save();
        painter.multiply_alpha(0.5);
        painter.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), &Color::new("#111").into());
        painter.restore();
        painter.print("H", Point::new(5.0, 5.0), &TextStyle::new(Color::new("#fff"), Font::new(16.0, "sans-serif")));
        let svg = painter.finish();
        assert_eq!(svg.matches(r#"opacity="0.5""#).count(), 1);
        assert!(svg.contains(">H</text>"));
    }
}
