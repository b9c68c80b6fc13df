//! The pieces gate drawers are assembled from.

use std::f64::consts::{PI, SQRT_2};

use crate::geometry::{Point, Rect};
use crate::paint::{
    ColorStop, Fill, Font, PainterExt, Stroke, TextAlign, TextBaseline, TextStyle, Tracer,
};

use super::{FillColor, GateDrawParams};

const SYMBOL_PADDING: f64 = 2.0;
const EXTRA_LINE_SPACING: f64 = 9.0;
/// How far the first line of a multi-line symbol moves up to make room for the others.
const EXTRA_LINE_OFFSET: f64 = -5.0;
const CYCLE_INDICATOR_RADIUS: f64 = 16.0;

/// Fill the gate's rectangle.
///
/// The toolbox and the circuit use separately configurable fills; a highlighted gate always
/// uses the highlight fill.
pub fn paint_background(
    args: &mut GateDrawParams<'_>,
    toolbox_fill: &FillColor,
    normal_fill: &FillColor,
) {
    let rect = args.rect;
    if rect.is_degenerate() {
        return;
    }
    let config = args.config;
    let back = if args.is_highlighted {
        &config.highlighted_gate_fill_color
    } else if args.is_in_toolbox() {
        toolbox_fill.resolve(config)
    } else {
        normal_fill.resolve(config)
    };
    args.painter.fill_rect(rect, &Fill::from(back));
    if !config.bevel {
        return;
    }

    let glow = if args.is_highlighted { 0.25 } else { 0.15 };
    args.painter.fill_rect(
        Rect::new(rect.x, rect.y, rect.w * 0.6, rect.h * 0.6),
        &Fill::LinearGradient {
            from: rect.top_left(),
            to: Point::new(rect.x + rect.w * 0.5, rect.y + rect.h * 0.5),
            stops: vec![
                ColorStop::new(0.0, format!("rgba(255, 255, 255, {glow})").as_str()),
                ColorStop::new(1.0, "transparent"),
            ],
        },
    );
    let shade = Rect::new(
        rect.x + rect.w * 0.4,
        rect.y + rect.h * 0.4,
        rect.w * 0.6,
        rect.h * 0.6,
    );
    args.painter.fill_rect(
        shade,
        &Fill::LinearGradient {
            from: shade.top_left(),
            to: rect.bottom_right(),
            stops: vec![
                ColorStop::new(0.0, "transparent"),
                ColorStop::new(1.0, "rgba(0, 0, 0, 0.4)"),
            ],
        },
    );
}

pub fn paint_outline(args: &mut GateDrawParams<'_>) {
    let rect = args.rect;
    if rect.is_degenerate() {
        return;
    }
    let config = args.config;
    let stroke = Stroke::from(&config.default_stroke_color);
    if args.is_in_toolbox() {
        let r = rect.shifted_by(0.5, 0.5);
        args.painter
            .stroke_line(r.top_right(), r.bottom_right(), &stroke);
        args.painter
            .stroke_line(r.bottom_left(), r.bottom_right(), &stroke);
    }
    if !config.bevel {
        args.painter.stroke_rect(rect, &stroke);
        return;
    }

    let lit = stroke.with_width(2.0);
    let shaded = Stroke::new("rgba(0, 0, 0, 0.6)").with_width(2.0);
    args.painter
        .stroke_line(rect.top_left(), rect.top_right(), &lit);
    args.painter
        .stroke_line(rect.top_left(), rect.bottom_left(), &lit);
    args.painter
        .stroke_line(rect.bottom_left(), rect.bottom_right(), &shaded);
    args.painter
        .stroke_line(rect.top_right(), rect.bottom_right(), &shaded);
}

/// The tab hanging off the bottom of a gate that's dragged to resize it.
pub fn rect_for_resize_tab(gate_rect: Rect, gate_radius: f64) -> Rect {
    let overlap = gate_radius.min(gate_rect.h / 4.0);
    Rect::new(
        gate_rect.x,
        gate_rect.bottom() - overlap,
        gate_rect.w,
        gate_radius * 2.0,
    )
}

/// Paint the resize tab, if it's showing and the gate can change size.
pub fn paint_resize_tab(args: &mut GateDrawParams<'_>) {
    let gate = args.gate;
    if !args.is_resize_showing || !gate.can_change_in_size() {
        return;
    }
    let config = args.config;
    let d = config.gate_radius;
    let tab = rect_for_resize_tab(args.rect, d)
        .skip_left(2.0)
        .skip_right(2.0);
    if tab.is_degenerate() {
        return;
    }
    let c = tab.center();
    let (back, fore) = if args.is_resize_highlighted {
        (
            &config.highlighted_gate_fill_color,
            &config.default_text_color,
        )
    } else {
        (&config.gate_fill_color, &config.accent_color)
    };

    args.painter.save();
    args.painter
        .multiply_alpha(if args.is_resize_highlighted { 1.0 } else { 0.7 });
    args.painter.fill_rect(tab, &Fill::from(back));
    args.painter
        .stroke_rect(tab, &Stroke::from(&config.accent_color));
    args.painter.restore();

    let style = TextStyle::new(
        fore.clone(),
        Font::new(config.small_font.size_px, "monospace"),
    )
    .bounded(tab.w - 4.0, tab.h - 4.0);
    args.painter.print("resize", c, &style);

    let arrow_dirs = [
        if gate.can_resize_up() { 1.0 } else { -1.0 },
        if gate.can_resize_down() { -1.0 } else { 1.0 },
    ];
    args.painter
        .trace(|tracer| {
            for sx in [-1.0, 1.0] {
                for (offset, dir) in [1.0, -1.0].into_iter().zip(arrow_dirs) {
                    let by = c.y + d * offset * 5.0 / 8.0;
                    tracer.line(c.x, by + d * dir / 8.0, c.x + d * sx * 0.3, by - d * dir / 8.0);
                }
            }
        })
        .then_stroke(fore);
}

/// Split `X^2` into `("X", "2")`. Symbols without a `^`, or with nothing on either side of it,
/// aren't split.
pub fn split_exponent(symbol: &str) -> Option<(&str, &str)> {
    let (base, exponent) = symbol.split_once('^')?;
    if base.is_empty() || exponent.is_empty() {
        return None;
    }
    Some((base, exponent))
}

/// Print the gate's symbol centered in its rectangle.
pub fn paint_gate_symbol(args: &mut GateDrawParams<'_>) {
    let gate = args.gate;
    paint_symbol(args, gate.symbol(), true);
}

/// Print `symbol` centered in the gate's rectangle.
///
/// Lines after the first are printed underneath it. With `allow_exponent`, text after a `^`
/// is printed as a superscript.
pub fn paint_symbol(args: &mut GateDrawParams<'_>, symbol: &str, allow_exponent: bool) {
    let rect = args.rect.padded_by(-SYMBOL_PADDING);
    if rect.is_degenerate() {
        return;
    }
    let config = args.config;
    let font = &config.gate_symbol_font;
    let style = TextStyle::new(config.default_text_color.clone(), font.clone());
    let center = rect.center();

    let mut lines = symbol.split('\n');
    let first = lines.next().unwrap_or_default();
    let mut offset_y = 0.0;
    for (i, line) in lines.enumerate() {
        let extra_line_style = style
            .clone()
            .aligned(TextAlign::Center, TextBaseline::Hanging)
            .bounded(rect.w, font.size_px);
        args.painter.print(
            line,
            center.offset_by(0.0, EXTRA_LINE_SPACING * (i + 1) as f64),
            &extra_line_style,
        );
        offset_y = EXTRA_LINE_OFFSET;
    }
    let anchor = center.offset_by(0.0, offset_y);

    let split = if allow_exponent {
        split_exponent(first)
    } else {
        None
    };
    let Some((base, exponent)) = split else {
        args.painter
            .print(first, anchor, &style.bounded(rect.w, rect.h));
        return;
    };

    let base_width = args.painter.measure_text(base, font);
    let exponent_width = args.painter.measure_text(exponent, font);
    let total = base_width + exponent_width;
    let scale_down = if total > 0.0 {
        rect.w.min(total) / total
    } else {
        1.0
    };
    let divider = rect.w / 2.0 + (base_width - exponent_width) * scale_down / 2.0;
    let at = Point::new(rect.x + divider, anchor.y);
    args.painter.print(
        base,
        at,
        &style
            .clone()
            .aligned(TextAlign::Right, TextBaseline::Hanging)
            .bounded(divider, rect.h),
    );
    args.painter.print(
        exponent,
        at,
        &style
            .aligned(TextAlign::Left, TextBaseline::Alphabetic)
            .bounded(rect.w - divider, rect.h),
    );
}

/// An octagon inscribed in `rect`, with corners clipped as if around a circle of at most
/// `gate_radius`.
pub fn trace_location_independent_outline(tracer: &mut Tracer, rect: Rect, gate_radius: f64) {
    let (x1, x2, y1, y2) = (rect.x, rect.right(), rect.y, rect.bottom());
    let diameter = rect.h.min(rect.w).min(gate_radius * 2.0);
    let clip = diameter / (2.0 + SQRT_2);
    tracer.polygon(&[
        Point::new(x1, y1 + clip),
        Point::new(x1 + clip, y1),
        Point::new(x2 - clip, y1),
        Point::new(x2, y1 + clip),
        Point::new(x2, y2 - clip),
        Point::new(x2 - clip, y2),
        Point::new(x1 + clip, y2),
        Point::new(x1, y2 - clip),
    ]);
}

/// The frame of a gate whose look doesn't depend on grid alignment.
///
/// In the toolbox it's the ordinary rectangular frame.
pub fn paint_location_independent_frame(
    args: &mut GateDrawParams<'_>,
    normal_fill: &FillColor,
    toolbox_fill: &FillColor,
) {
    if args.is_in_toolbox() {
        paint_background(args, toolbox_fill, normal_fill);
        paint_outline(args);
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
        normal_fill.resolve(config)
    };

    let mut frame = args
        .painter
        .trace(|tracer| trace_location_independent_outline(tracer, rect, config.gate_radius))
        .then_fill(back);
    if config.bevel {
        let c = rect.center();
        let reach = rect.w.max(rect.h) / 2.0;
        frame = frame.then_fill(Fill::RadialGradient {
            inner_center: c.offset_by(-reach * 0.3, -reach * 0.3),
            inner_radius: 0.0,
            outer_center: c,
            outer_radius: reach * 1.2,
            stops: vec![
                ColorStop::new(0.0, "rgba(255, 255, 255, 0.2)"),
                ColorStop::new(0.6, "transparent"),
                ColorStop::new(1.0, "rgba(0, 0, 0, 0.3)"),
            ],
        });
    }
    let width = if config.bevel { 2.0 } else { 1.0 };
    frame.then_stroke(Stroke::from(&config.default_stroke_color).with_width(width));
}

/// Overlay a pie whose sweep shows the phase `angle` of a periodic effect.
///
/// The pie starts at the top of the gate (rotated by `zero_angle`) and sweeps clockwise.
/// Only the signs of `x_scale` and `y_scale` are used: a negative scale mirrors the pie
/// across that axis.
pub fn paint_cycle_state(
    args: &mut GateDrawParams<'_>,
    angle: f64,
    x_scale: f64,
    y_scale: f64,
    zero_angle: f64,
) {
    let rect = args.rect;
    if rect.is_degenerate() || !angle.is_finite() {
        return;
    }
    let sweep = angle.rem_euclid(2.0 * PI);
    let mut start = zero_angle - PI / 2.0;
    if y_scale < 0.0 {
        start = -start;
    }
    if x_scale < 0.0 {
        start = PI - start;
    }
    if (x_scale < 0.0) != (y_scale < 0.0) {
        start -= sweep;
    }

    let config = args.config;
    args.painter.save();
    args.painter.multiply_alpha(0.4);
    args.painter.fill_pie(
        rect.center(),
        CYCLE_INDICATOR_RADIUS,
        start,
        sweep,
        &Fill::from(&config.accent_color),
        &Stroke::from(&config.default_stroke_color),
    );
    args.painter.restore();
}

/// Where the "change" button sits on a gate.
pub fn gate_button_rect(whole_rect: Rect) -> Rect {
    if whole_rect.h > 50.0 {
        return whole_rect.bottom_half().skip_top(6.0).padded_by(-7.0);
    }
    whole_rect.bottom_half().padded_by(2.0)
}

/// Paint a "change" button on a highlighted gate in the circuit, unless the user is
/// dragging something.
pub fn paint_gate_button(args: &mut GateDrawParams<'_>) {
    if !args.is_highlighted || args.is_in_toolbox() || args.hand_is_holding_something {
        return;
    }
    let button = gate_button_rect(args.rect);
    if button.is_degenerate() {
        return;
    }
    let config = args.config;
    let is_focused = args
        .focus_points
        .iter()
        .any(|&p| button.contains_point(p));
    let fill = if is_focused {
        &config.highlighted_gate_fill_color
    } else {
        &config.operation_back_color
    };
    args.painter.fill_rect(button, &Fill::from(fill));
    args.painter.print(
        "change",
        button.center(),
        &TextStyle::new(config.default_text_color.clone(), config.small_font.clone())
            .bounded(button.w, button.h),
    );
    args.painter
        .stroke_rect(button, &Stroke::from(&config.default_stroke_color));
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::{
        gate_button_rect, paint_cycle_state, paint_gate_symbol, paint_resize_tab,
        rect_for_resize_tab, split_exponent, trace_location_independent_outline,
    };
    use crate::config::PaintConfig;
    use crate::drawing::{GateDrawParams, Placement};
    use crate::gate::{Gate, GateBuilder};
    use crate::geometry::{Point, Rect};
    use crate::paint::{PaintOp, PathSegment, RecordingPainter, TextAlign, Tracer};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    const GATE_RECT: Rect = Rect::new(0.0, 0.0, 40.0, 40.0);

    fn gate_with_symbol(symbol: &str) -> Gate {
        GateBuilder::new()
            .set_serialized_id("g")
            .set_symbol(symbol)
            .build()
            .expect("gate is valid")
    }

    fn printed(symbol: &str) -> Vec<(String, TextAlign)> {
        let gate = gate_with_symbol(symbol);
        let config = PaintConfig::default();
        let mut painter = RecordingPainter::new();
        paint_gate_symbol(&mut GateDrawParams::new(
            &mut painter,
            &config,
            &gate,
            GATE_RECT,
            Placement::Toolbox,
        ));
        painter
            .into_ops()
            .into_iter()
            .filter_map(|op| match op {
                PaintOp::Print { text, style, .. } => Some((text, style.align)),
                _ => None,
            })
            .collect()
    }

    #[rstest]
    #[case("X^2", Some(("X", "2")))]
    #[case("Z^¼", Some(("Z", "¼")))]
    #[case("H", None)]
    #[case("^2", None)]
    #[case("X^", None)]
    fn exponent_split(#[case] symbol: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_exponent(symbol), expected);
    }

    #[test]
    fn exponent_is_printed_as_a_superscript() {
        assert_eq!(
            printed("X^2"),
            vec![("X".to_string(), TextAlign::Right), ("2".to_string(), TextAlign::Left)]
        );
    }

    #[rstest]
    #[case("H")]
    #[case("^2")]
    #[case("X^")]
    fn unsplit_symbols_print_once(#[case] symbol: &str) {
        assert_eq!(printed(symbol), vec![(symbol.to_string(), TextAlign::Center)]);
    }

    #[test]
    fn extra_lines_print_below_the_first() {
        let text = printed("+A\nmod R")
            .into_iter()
            .map(|(text, _)| text)
            .collect::<Vec<_>>();
        assert_eq!(text, vec!["mod R", "+A"]);
    }

    #[test]
    fn resize_tab_overlaps_the_bottom_of_the_gate() {
        assert_eq!(
            rect_for_resize_tab(Rect::new(0.0, 0.0, 40.0, 40.0), 20.0),
            Rect::new(0.0, 30.0, 40.0, 40.0)
        );
        assert_eq!(
            rect_for_resize_tab(Rect::new(0.0, 0.0, 40.0, 140.0), 20.0),
            Rect::new(0.0, 120.0, 40.0, 40.0)
        );
    }

    #[test]
    fn resize_tab_needs_a_resizable_gate() {
        let config = PaintConfig::default();
        let fixed = gate_with_symbol("H");
        let mut painter = RecordingPainter::new();
        paint_resize_tab(
            &mut GateDrawParams::new(&mut painter, &config, &fixed, GATE_RECT, Placement::circuit(0, 0))
                .resize(true, false),
        );
        assert!(painter.ops().is_empty());

        let resizable = GateBuilder::new()
            .set_serialized_id_and_symbol("R")
            .set_resizable(true, false)
            .build()
            .expect("gate is valid");
        paint_resize_tab(
            &mut GateDrawParams::new(
                &mut painter,
                &config,
                &resizable,
                GATE_RECT,
                Placement::circuit(0, 0),
            )
            .resize(true, false),
        );
        assert_eq!(painter.printed_text(), vec!["resize"]);
    }

    #[rstest]
    #[case(Rect::new(0.0, 0.0, 40.0, 40.0), Rect::new(-2.0, 18.0, 44.0, 24.0))]
    #[case(Rect::new(0.0, 0.0, 40.0, 100.0), Rect::new(7.0, 63.0, 26.0, 30.0))]
    fn button_rects(#[case] whole: Rect, #[case] expected: Rect) {
        assert_eq!(gate_button_rect(whole), expected);
    }

    #[test]
    fn location_independent_outline_is_an_octagon() {
        let mut tracer = Tracer::new();
        trace_location_independent_outline(&mut tracer, GATE_RECT, 20.0);
        let path = tracer.into_path();
        let vertices = path
            .segments
            .iter()
            .filter(|s| matches!(s, PathSegment::MoveTo(_) | PathSegment::LineTo(_)))
            .count();
        assert_eq!(vertices, 8);
        assert_eq!(
            path.segments.first(),
            Some(&PathSegment::MoveTo(Point::new(0.0, 40.0 / (2.0 + 2f64.sqrt()))))
        );
    }

    #[rstest]
    #[case(1.0, 1.0, -PI / 2.0)]
    #[case(1.0, -1.0, PI / 2.0 - 1.0)]
    #[case(-1.0, 1.0, 3.0 * PI / 2.0 - 1.0)]
    #[case(-1.0, -1.0, PI / 2.0)]
    fn cycle_state_orientation(#[case] x_scale: f64, #[case] y_scale: f64, #[case] start: f64) {
        let config = PaintConfig::default();
        let gate = gate_with_symbol("X^t");
        let mut painter = RecordingPainter::new();
        paint_cycle_state(
            &mut GateDrawParams::new(&mut painter, &config, &gate, GATE_RECT, Placement::circuit(0, 0)),
            1.0,
            x_scale,
            y_scale,
            0.0,
        );
        let pie = painter
            .ops()
            .iter()
            .find_map(|op| match op {
                PaintOp::FillPie {
                    start_angle, sweep, ..
                } => Some((*start_angle, *sweep)),
                _ => None,
            })
            .expect("a pie is painted");
        assert_abs_diff_eq!(pie.0, start, epsilon = 1e-12);
        assert_abs_diff_eq!(pie.1, 1.0, epsilon = 1e-12);
    }
}
