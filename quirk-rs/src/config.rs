//! Colors and dimensions used when painting gates.

use serde::{Deserialize, Serialize};

use crate::paint::{Color, Font};

/// PaintConfig contains the metadata that allows the caller to customize how
/// gates are painted, or use the default theme.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Background of an ordinary gate.
    pub gate_fill_color: Color,
    /// Background of a gate under the mouse or being dragged.
    pub highlighted_gate_fill_color: Color,
    /// Toolbox background of gates whose effect varies over time.
    pub time_dependent_highlight_color: Color,
    /// Toolbox background of display gates.
    pub display_gate_in_toolbox_fill_color: Color,
    pub operation_back_color: Color,
    pub operation_fore_color: Color,
    pub default_stroke_color: Color,
    pub default_text_color: Color,
    /// Circuit background, used to erase wires.
    pub background_color_circuit: Color,
    /// Accent used for resize tabs, dividers and cycle indicators.
    pub accent_color: Color,
    /// Half of the span of a drawn gate, width-wise and height-wise.
    pub gate_radius: f64,
    /// Vertical distance between adjacent wires.
    pub wire_spacing: f64,
    pub gate_symbol_font: Font,
    pub small_font: Font,
    /// Layer gradients, bevels and drop shadows on top of the flat fills.
    pub bevel: bool,
}

impl Default for PaintConfig {
    /// Returns the default dark theme.
    fn default() -> Self {
        Self {
            gate_fill_color: Color::new("#1a1a2e"),
            highlighted_gate_fill_color: Color::new("#00d4ff"),
            time_dependent_highlight_color: Color::new("#4ecdc4"),
            display_gate_in_toolbox_fill_color: Color::new("#4ecdc4"),
            operation_back_color: Color::new("#16213e"),
            operation_fore_color: Color::new("#00d4ff"),
            default_stroke_color: Color::new("#00d4ff"),
            default_text_color: Color::new("#ffffff"),
            background_color_circuit: Color::new("#1a1a2e"),
            accent_color: Color::new("#4ecdc4"),
            gate_radius: 20.0,
            wire_spacing: 50.0,
            gate_symbol_font: Font::new(16.0, "sans-serif"),
            small_font: Font::new(12.0, "sans-serif"),
            // true: gradients and shadows; false: flat fills only.
            bevel: true,
        }
    }
}

impl PaintConfig {
    /// The default theme with every cosmetic gradient and shadow turned off.
    pub fn flat() -> Self {
        Self {
            bevel: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PaintConfig;

    #[test]
    fn partial_json_overrides_defaults() {
        let config: PaintConfig =
            serde_json::from_str(r##"{"gate_radius": 25.0, "gate_fill_color": "#000000"}"##)
                .expect("config should parse");
        assert_eq!(config.gate_radius, 25.0);
        assert_eq!(config.gate_fill_color.as_str(), "#000000");
        assert_eq!(config.wire_spacing, PaintConfig::default().wire_spacing);
    }

    #[test]
    fn flat_disables_bevel_only() {
        let flat = PaintConfig::flat();
        assert!(!flat.bevel);
        assert_eq!(
            PaintConfig {
                bevel: true,
                ..flat
            },
            PaintConfig::default()
        );
    }
}
