use std::sync::Arc;

use crate::drawing::{DisplayDrawer, GateDrawParams, StatePainter};
use crate::gate::{Gate, GateError};
use crate::paint::{Fill, Stroke, TextAlign, TextBaseline, TextStyle};

const MAX_SPAN: usize = 16;

pub(super) fn all() -> Result<Vec<Arc<Gate>>, GateError> {
    let chance = Gate::build_family(1, MAX_SPAN, |span, builder| {
        let id = if span == 1 {
            "Chance".to_string()
        } else {
            format!("Chance{span}")
        };
        builder
            .set_serialized_id(id)
            .set_symbol("Chance")
            .set_title("Probability Display")
            .set_blurb("Shows the chance that measuring each wire would return ON.\nUse controls to see conditional probabilities.")
            .promise_has_no_net_effect_on_state_vector()
            .set_drawer(DisplayDrawer::new(ProbabilityPainter))
    })?;
    Ok(chance.into_gates())
}

/// Draws a bar per wire, filled in proportion to the chance that the wire is ON.
///
/// Wires whose chance isn't known (e.g. before any simulation has run) are marked with `?`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProbabilityPainter;

impl StatePainter for ProbabilityPainter {
    fn paint_state(&self, args: &mut GateDrawParams<'_>) {
        let rect = args.rect;
        let Some(position) = args.position_in_circuit() else {
            return;
        };
        if rect.is_degenerate() {
            return;
        }
        let config = args.config;
        let height = args.gate.height().max(1);
        let band_h = rect.h / height as f64;
        let style = TextStyle::new(config.default_text_color.clone(), config.small_font.clone())
            .aligned(TextAlign::Center, TextBaseline::Middle)
            .bounded(rect.w - 2.0, band_h);

        for (i, band) in rect.split_rows(&vec![1.0 / height as f64; height]).into_iter().enumerate() {
            args.painter
                .fill_rect(band, &Fill::from(&config.operation_back_color));
            let probability = position
                .offset(0, i)
                .and_then(|wire| args.stats.circuit.probability(wire.col, wire.row));
            let label = match probability {
                Some(p) => {
                    let p = p.clamp(0.0, 1.0);
                    args.painter.fill_rect(
                        band.with_h(band.h * p),
                        &Fill::from(&config.operation_fore_color),
                    );
                    format!("{:.1}%", p * 100.0)
                }
                None => "?".to_string(),
            };
            args.painter.print(&label, band.center(), &style);
        }
        args.painter
            .stroke_rect(rect, &Stroke::from(&config.default_stroke_color));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ProbabilityPainter;
    use crate::config::PaintConfig;
    use crate::drawing::{draw_gate, CircuitDefinition, DrawStats, GateDrawParams, Placement};
    use crate::geometry::Rect;
    use crate::paint::RecordingPainter;

    #[derive(Debug)]
    struct HalfOn;

    impl CircuitDefinition for HalfOn {
        fn col_has_controls(&self, _col: usize) -> bool {
            false
        }

        fn loc_is_measured(&self, _col: usize, _row: usize) -> bool {
            false
        }

        fn probability(&self, _col: usize, row: usize) -> Option<f64> {
            (row < 3).then_some(0.5)
        }
    }

    #[test]
    fn labels_each_wire() {
        let gates = super::all().unwrap();
        let chance2 = gates.iter().find(|g| g.serialized_id() == "Chance2").unwrap();
        let config = PaintConfig::default();
        let circuit = HalfOn;
        let mut painter = RecordingPainter::new();
        let mut args = GateDrawParams::new(
            &mut painter,
            &config,
            chance2,
            Rect::new(0.0, 0.0, 40.0, 90.0),
            Placement::circuit(0, 2),
        )
        .with_stats(DrawStats {
            time: 0.0,
            circuit: &circuit,
        });
        draw_gate(&mut args);
        let printed: Vec<_> = painter
            .printed_text()
            .into_iter()
            .filter(|text| *text != "resize")
            .collect();
        assert_eq!(printed, ["50.0%", "?"]);
    }

    #[test]
    fn nothing_to_show_outside_a_circuit() {
        let gates = super::all().unwrap();
        let chance = &gates[0];
        let config = PaintConfig::default();
        let mut painter = RecordingPainter::new();
        let mut args = GateDrawParams::new(
            &mut painter,
            &config,
            chance,
            Rect::new(0.0, 0.0, 40.0, 40.0),
            Placement::Toolbox,
        );
        crate::drawing::StatePainter::paint_state(&ProbabilityPainter, &mut args);
        assert!(painter.ops().is_empty());
    }
}
