use crate::geometry::{Point, Rect};
use crate::matrix::Matrix;
use crate::paint::{Color, Fill, Painter, PainterExt, Stroke};

/// Entries smaller than this are drawn as "no value".
const ZERO_AMPLITUDE: f64 = 1e-8;

/// Colors used to draw a matrix.
#[derive(Clone, Copy, Debug)]
pub struct MatrixColors<'c> {
    /// Fill showing the probability carried by an entry.
    pub fore: &'c Color,
    /// Grid lines, amplitude circles and phase lines.
    pub stroke: &'c Color,
    pub back: &'c Color,
    /// Fill of entries that are zero.
    pub no_value: &'c Color,
}

/// Paint a grid with one cell per entry of `matrix`.
///
/// Each non-zero entry shows its squared magnitude as a filled bar rising from the bottom of
/// its cell, its magnitude as the radius of a circle, and its phase as a line from the circle's
/// center.
pub fn paint_matrix(painter: &mut dyn Painter, matrix: &Matrix, rect: Rect, colors: MatrixColors<'_>) {
    let (rows, cols) = matrix.dim();
    if rows == 0 || cols == 0 || rect.is_degenerate() {
        return;
    }
    let cell_w = rect.w / cols as f64;
    let cell_h = rect.h / rows as f64;
    let stroke = Stroke::from(colors.stroke);

    painter.fill_rect(rect, &Fill::from(colors.back));
    for ((row, col), entry) in matrix.indexed_iter() {
        let cell = Rect::new(
            rect.x + col as f64 * cell_w,
            rect.y + row as f64 * cell_h,
            cell_w,
            cell_h,
        );
        let magnitude = entry.norm();
        if magnitude < ZERO_AMPLITUDE {
            painter.fill_rect(cell, &Fill::from(colors.no_value));
            continue;
        }

        let probability = entry.norm_sqr().min(1.0);
        painter.fill_rect(
            cell.skip_top(cell.h * (1.0 - probability)),
            &Fill::from(colors.fore),
        );
        let c = cell.center();
        let radius = cell_w.min(cell_h) / 2.0 * magnitude.min(1.0);
        let phase = entry.arg();
        painter
            .trace(|tracer| {
                tracer.circle(c, radius).move_to(c).line_to(Point::new(
                    c.x + radius * phase.cos(),
                    c.y - radius * phase.sin(),
                ));
            })
            .then_stroke(stroke.clone());
    }

    painter
        .trace(|tracer| {
            for col in 1..cols {
                let x = rect.x + col as f64 * cell_w;
                tracer.line(x, rect.y, x, rect.bottom());
            }
            for row in 1..rows {
                let y = rect.y + row as f64 * cell_h;
                tracer.line(rect.x, y, rect.right(), y);
            }
        })
        .then_stroke(stroke.clone());
    painter.stroke_rect(rect, &stroke);
}

#[cfg(test)]
mod tests {
    use super::{paint_matrix, MatrixColors};
    use crate::geometry::Rect;
    use crate::matrix::{identity, HADAMARD};
    use crate::paint::{Color, Fill, PaintOp, RecordingPainter};
    use rstest::rstest;

    fn colors() -> (Color, Color, Color, Color) {
        (
            Color::new("fore"),
            Color::new("stroke"),
            Color::new("back"),
            Color::new("none"),
        )
    }

    fn count_fills(ops: &[PaintOp], color: &Color) -> usize {
        ops.iter()
            .filter(|op| matches!(op, PaintOp::FillRect { fill, .. } if *fill == Fill::from(color)))
            .count()
    }

    #[rstest]
    #[case(identity(2), 2, 2)]
    #[case(identity(4), 4, 12)]
    #[case(HADAMARD.clone(), 4, 0)]
    fn zero_entries_use_the_no_value_fill(
        #[case] matrix: crate::matrix::Matrix,
        #[case] non_zero: usize,
        #[case] zero: usize,
    ) {
        let (fore, stroke, back, none) = colors();
        let mut painter = RecordingPainter::new();
        paint_matrix(
            &mut painter,
            &matrix,
            Rect::new(0.0, 0.0, 40.0, 40.0),
            MatrixColors {
                fore: &fore,
                stroke: &stroke,
                back: &back,
                no_value: &none,
            },
        );
        let ops = painter.into_ops();
        assert_eq!(count_fills(&ops, &fore), non_zero);
        assert_eq!(count_fills(&ops, &none), zero);
        assert_eq!(count_fills(&ops, &back), 1);
    }

    #[test]
    fn degenerate_rect_paints_nothing() {
        let (fore, stroke, back, none) = colors();
        let mut painter = RecordingPainter::new();
        paint_matrix(
            &mut painter,
            &identity(2),
            Rect::new(0.0, 0.0, 0.0, 40.0),
            MatrixColors {
                fore: &fore,
                stroke: &stroke,
                back: &back,
                no_value: &none,
            },
        );
        assert!(painter.ops().is_empty());
    }
}
