//! Stroke definitions for symbol outlines.
//!
//! - [`StrokeDefinition`]: color and width of an outline
//! - [`apply_stroke!`](crate::apply_stroke!): applies every stroke attribute to an SVG element

use crate::color::Color;

/// Stroke used for symbol outlines.
///
/// ```
/// use nwdiag_core::draw::StrokeDefinition;
/// use nwdiag_core::color::Color;
///
/// let stroke = StrokeDefinition::new(Color::new("#A80036").unwrap(), 1.5);
/// assert_eq!(stroke.width(), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.5)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// ```
/// use nwdiag_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let rect = nwdiag_core::apply_stroke!(svg_element::Rectangle::new(), &stroke);
/// assert!(rect.to_string().contains("stroke-width"));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    };
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.5);
        assert_eq!(stroke.color().to_string(), "black");
    }

    #[test]
    fn test_apply_stroke_sets_color_and_width() {
        let stroke = StrokeDefinition::new(Color::black().with_alpha(0.5), 2.0);
        let rect = crate::apply_stroke!(svg_element::Rectangle::new(), &stroke).to_string();
        assert!(rect.contains("stroke-width=\"2\""));
        assert!(rect.contains("stroke-opacity=\"0.5\""));
        assert!(!rect.contains("stroke-dasharray"));
    }
}
